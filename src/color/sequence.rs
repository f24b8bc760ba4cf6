//! Seeded shuffling of the colour cube into a placement order

use crate::color::space::{Color, ColorSpace};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Deterministic shuffler; equal seeds give equal orders
pub struct Sequencer {
    rng: StdRng,
}

impl Sequencer {
    /// Create a sequencer from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffle every colour of `space` into a placement sequence
    pub fn sequence(&mut self, space: &ColorSpace) -> PlacementSequence {
        let mut colors = space.colors();
        colors.shuffle(&mut self.rng);
        PlacementSequence { colors }
    }
}

/// Randomized permutation of all colours, consumed front to back
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSequence {
    colors: Vec<Color>,
}

impl PlacementSequence {
    /// Build a sequence from an explicit colour order
    pub const fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Colour placed at step `index`
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Number of placements
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when there is nothing to place
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colours in placement order
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
