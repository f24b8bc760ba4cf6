use crate::spatial::canvas::{Canvas, Coordinate};
use bitvec::prelude::*;

/// Half-width of the ring used for frontier maintenance, independent of the fitness window
pub const FRONTIER_HALF_WIDTH: usize = 1;

/// Empty cells adjacent to at least one filled cell
///
/// Membership is a row-major bitset over the grid, so iteration order is the
/// row-major order of the cells and does not depend on insertion history.
#[derive(Clone, Debug)]
pub struct Frontier {
    members: BitVec,
    width: usize,
    height: usize,
    len: usize,
}

impl Frontier {
    /// Create an empty frontier for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            members: bitvec![0; width * height],
            width,
            height,
            len: 0,
        }
    }

    /// Add a coordinate; returns false if already present or out of bounds
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        if !self.in_bounds(coordinate) {
            return false;
        }
        let index = coordinate.index(self.width);
        if self.members.get(index).as_deref() == Some(&false) {
            self.members.set(index, true);
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Remove a coordinate; returns whether it was present
    pub fn remove(&mut self, coordinate: Coordinate) -> bool {
        if !self.contains(coordinate) {
            return false;
        }
        self.members.set(coordinate.index(self.width), false);
        self.len -= 1;
        true
    }

    /// Test membership
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.in_bounds(coordinate)
            && self.members.get(coordinate.index(self.width)).as_deref() == Some(&true)
    }

    /// Number of frontier cells
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when no cell is placeable by adjacency
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row-major cell indices of all members
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.members.iter_ones()
    }

    /// Members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        self.members
            .iter_ones()
            .map(move |index| Coordinate::from_index(index, width))
    }

    /// Add every empty in-bounds cell of the 3x3 ring around `center`
    ///
    /// Returns the number of cells newly added.
    pub fn expand_around(&mut self, canvas: &Canvas, center: Coordinate) -> usize {
        let mut added = 0;
        for neighbour in center.neighbourhood(FRONTIER_HALF_WIDTH, self.width, self.height) {
            if !canvas.is_filled(neighbour) && self.insert(neighbour) {
                added += 1;
            }
        }
        added
    }

    const fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }
}
