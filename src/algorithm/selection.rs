use crate::{
    algorithm::fitness::FitnessEvaluator,
    color::Color,
    spatial::{Canvas, Coordinate},
};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Smallest number of candidates a worker evaluates before work is split further
pub const PARALLEL_MIN_CANDIDATES: usize = 256;

/// Best cell found by a frontier scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Row-major index of the cell
    pub index: usize,
    /// Inverse fitness of the scanned colour at that cell
    pub inverse_fitness: f64,
}

impl Candidate {
    /// Cell coordinate for a grid `width` cells wide
    pub const fn coordinate(&self, width: usize) -> Coordinate {
        Coordinate::from_index(self.index, width)
    }

    /// Lower inverse fitness wins; equal fitness goes to the lower row-major index
    pub fn better(self, other: Self) -> Self {
        match self
            .inverse_fitness
            .total_cmp(&other.inverse_fitness)
            .then(self.index.cmp(&other.index))
        {
            Ordering::Greater => other,
            Ordering::Less | Ordering::Equal => self,
        }
    }
}

/// Find the candidate cell where `color` fits best
///
/// `candidates` are row-major cell indices; evaluation is spread across the
/// rayon pool and reduced to a single minimum. The result does not depend on
/// how the work is split. Returns `None` for an empty slice.
pub fn select_best_candidate(
    candidates: &[usize],
    canvas: &Canvas,
    evaluator: &FitnessEvaluator,
    color: &Color,
) -> Option<Candidate> {
    let width = canvas.width();
    candidates
        .par_iter()
        .with_min_len(PARALLEL_MIN_CANDIDATES)
        .map(|&index| Candidate {
            index,
            inverse_fitness: evaluator.inverse_fitness(
                canvas,
                Coordinate::from_index(index, width),
                color,
            ),
        })
        .reduce_with(Candidate::better)
}

/// Single-threaded reference scan with the same tie-break as [`select_best_candidate`]
pub fn select_best_candidate_sequential(
    candidates: &[usize],
    canvas: &Canvas,
    evaluator: &FitnessEvaluator,
    color: &Color,
) -> Option<Candidate> {
    let width = canvas.width();
    candidates
        .iter()
        .map(|&index| Candidate {
            index,
            inverse_fitness: evaluator.inverse_fitness(
                canvas,
                Coordinate::from_index(index, width),
                color,
            ),
        })
        .reduce(Candidate::better)
}
