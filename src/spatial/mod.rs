//! Spatial data structures for the placement grid
//!
//! This module contains spatial-related functionality including:
//! - Coordinates and the write-once colour canvas
//! - Frontier tracking of placeable cells

/// Coordinates and the write-once colour canvas
pub mod canvas;
/// Frontier of empty cells adjacent to filled ones
pub mod frontier;

pub use canvas::{Canvas, Coordinate};
pub use frontier::Frontier;
