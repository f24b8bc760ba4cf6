//! Greedy frontier placement of every quantized RGB colour into one image
//!
//! Each colour of the `depth³` cube is placed exactly once, in a seeded random
//! order, onto the empty cell next to already placed colours where it fits
//! best. Similar colours end up spatially adjacent.

#![forbid(unsafe_code)]

/// Placement engine, fitness evaluation, frontier scan and checkpoint schedule
pub mod algorithm;
/// Colour cube, distance functions and placement order
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Canvas and frontier grid structures
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
