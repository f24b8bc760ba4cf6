//! Inverse fitness of a colour at a candidate cell
//!
//! The evaluator looks at every filled cell in a square window around the
//! candidate and aggregates the colour distances to them. Lower is better:
//! the value is a distance, so the engine looks for the minimum.

use crate::color::{Color, ColorDistance};
use crate::spatial::{Canvas, Coordinate};

/// Inverse fitness reported when the window holds no filled cell
///
/// Worse than any real distance, so such cells lose every comparison.
pub const NO_NEIGHBOUR_FITNESS: f64 = f64::INFINITY;

/// How per-neighbour distances combine into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    /// Arithmetic mean over all filled neighbours
    #[default]
    Average,
    /// Smallest distance to any filled neighbour
    Minimum,
}

impl Aggregation {
    /// Select average (`true`) or minimum (`false`) aggregation
    pub const fn from_average_flag(average: bool) -> Self {
        if average { Self::Average } else { Self::Minimum }
    }
}

/// Scores candidate cells against already placed neighbours
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    half_width: usize,
    aggregation: Aggregation,
    distance: ColorDistance,
}

impl FitnessEvaluator {
    /// Create an evaluator for a window of `neighbourhood_width` cells per side
    ///
    /// The window spans `neighbourhood_width / 2` cells in each direction.
    pub const fn new(
        neighbourhood_width: usize,
        aggregation: Aggregation,
        distance: ColorDistance,
    ) -> Self {
        Self {
            half_width: neighbourhood_width / 2,
            aggregation,
            distance,
        }
    }

    /// Cells examined in each direction from the candidate
    pub const fn half_width(&self) -> usize {
        self.half_width
    }

    /// Configured aggregation mode
    pub const fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Configured distance function
    pub const fn distance(&self) -> ColorDistance {
        self.distance
    }

    /// Aggregated distance between `color` and the filled neighbours of `coordinate`
    ///
    /// Returns [`NO_NEIGHBOUR_FITNESS`] when no neighbour in the window is filled.
    pub fn inverse_fitness(&self, canvas: &Canvas, coordinate: Coordinate, color: &Color) -> f64 {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;

        for neighbour in canvas.filled_neighbours(coordinate, self.half_width) {
            let d = self.distance.apply(color, neighbour);
            count += 1;
            sum += d;
            min = min.min(d);
        }

        if count == 0 {
            return NO_NEIGHBOUR_FITNESS;
        }

        match self.aggregation {
            Aggregation::Average => sum / count as f64,
            Aggregation::Minimum => min,
        }
    }
}
