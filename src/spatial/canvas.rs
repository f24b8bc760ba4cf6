//! Write-once colour grid and the coordinate type used to address it
//!
//! The canvas is the ground truth of what has been placed. Cells start empty
//! and each one transitions to filled exactly once; a second write is an
//! invariant violation rather than an overwrite.

use crate::color::Color;
use crate::io::error::{AlgorithmError, Result};
use ndarray::Array2;
use std::fmt;

/// Grid cell address, `0 <= x < width`, `0 <= y < height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major cell index for a grid `width` cells wide
    pub const fn index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Inverse of [`Coordinate::index`]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            y: index / width,
        }
    }

    /// In-bounds cells of the `(2h+1)` x `(2h+1)` window around `self`, excluding `self`
    ///
    /// Yields in row-major order.
    pub fn neighbourhood(
        self,
        half_width: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = Self> {
        // Clamped to the grid; cost must not grow with half_width
        let rows = self.y.saturating_sub(half_width)
            ..=self.y.saturating_add(half_width).min(height.saturating_sub(1));
        let cols = self.x.saturating_sub(half_width)
            ..=self.x.saturating_add(half_width).min(width.saturating_sub(1));

        rows.flat_map(move |y| cols.clone().map(move |x| Self::new(x, y)))
            .filter(move |cell| *cell != self && cell.x < width && cell.y < height)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `width` x `height` grid of optional colours, indexed `[y, x]`
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    cells: Array2<Option<Color>>,
    filled: usize,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
            filled: 0,
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-area canvas
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of filled cells
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// True once every cell holds a colour
    pub fn is_complete(&self) -> bool {
        self.filled == self.len()
    }

    /// Whether `coordinate` lies on the canvas
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width() && coordinate.y < self.height()
    }

    /// Colour at `coordinate`; `None` if empty or out of bounds
    pub fn get(&self, coordinate: Coordinate) -> Option<&Color> {
        self.cells
            .get([coordinate.y, coordinate.x])
            .and_then(Option::as_ref)
    }

    /// Whether `coordinate` is in bounds and filled
    pub fn is_filled(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some()
    }

    /// Write `color` into an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is already filled or out of bounds
    pub fn place(&mut self, coordinate: Coordinate, color: Color) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let Some(cell) = self.cells.get_mut([coordinate.y, coordinate.x]) else {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "coordinate",
                value: coordinate.to_string(),
                reason: format!("outside {width}x{height} canvas"),
            });
        };
        if cell.is_some() {
            return Err(AlgorithmError::CellOccupied {
                coordinate,
                index: None,
            });
        }

        *cell = Some(color);
        self.filled += 1;
        Ok(())
    }

    /// Filled neighbours of `coordinate` within `half_width`
    pub fn filled_neighbours(
        &self,
        coordinate: Coordinate,
        half_width: usize,
    ) -> impl Iterator<Item = &Color> {
        coordinate
            .neighbourhood(half_width, self.width(), self.height())
            .filter_map(move |neighbour| self.get(neighbour))
    }

    /// Iterate `(coordinate, cell)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Option<&Color>)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| (Coordinate::new(x, y), cell.as_ref()))
    }
}
