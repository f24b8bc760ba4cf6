use crate::{
    algorithm::checkpoint::{Checkpoint, CheckpointSchedule, CheckpointSink},
    algorithm::fitness::FitnessEvaluator,
    algorithm::selection::{Candidate, select_best_candidate},
    color::{Color, ColorSpace, PlacementSequence, Sequencer},
    io::configuration::RunConfig,
    io::error::{AlgorithmError, Result, WithPlacement, invalid_parameter},
    spatial::{Canvas, Coordinate, Frontier},
};

/// Lifecycle of a placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing placed yet
    Empty,
    /// Some but not all cells filled
    Running,
    /// Every cell filled
    Complete,
}

/// Outcome of one placement step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position in the placement sequence
    pub index: usize,
    /// Cell that received the colour
    pub coordinate: Coordinate,
    /// Colour that was placed
    pub color: Color,
    /// Inverse fitness at the chosen cell; `None` for the origin placement
    pub inverse_fitness: Option<f64>,
    /// Checkpoint emitted after this placement
    pub checkpoint: Option<usize>,
}

/// Greedy frontier placement of a colour sequence onto a canvas
///
/// Each step takes the next colour, picks the frontier cell with the lowest
/// inverse fitness (or the origin for the very first colour), commits it and
/// grows the frontier around it. Steps are strictly sequential; only the
/// frontier scan inside a step runs in parallel.
pub struct PlacementEngine {
    /// Placement order
    pub sequence: PlacementSequence,
    /// Placed colours
    pub canvas: Canvas,
    /// Empty cells next to filled ones
    pub frontier: Frontier,
    /// Scores candidate cells
    pub evaluator: FitnessEvaluator,
    /// Placement indices that emit snapshots
    pub schedule: CheckpointSchedule,
    /// Cell receiving the first colour
    pub origin: Coordinate,
    /// Index of the next colour to place
    pub index: usize,
    /// Pre-allocated buffer to reduce allocations in hot path
    candidate_buffer: Vec<usize>,
}

impl PlacementEngine {
    /// Create an engine with the seeded shuffle of the full colour cube
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The colour cube does not exactly fill the grid
    /// - The checkpoint amount exceeds the number of placements
    /// - The origin lies outside the grid
    pub fn new(config: &RunConfig) -> Result<Self> {
        let space = ColorSpace::for_grid(config.depth, config.width, config.height)?;
        let sequence = Sequencer::new(config.seed).sequence(&space);
        Self::with_sequence(config, sequence)
    }

    /// Create an engine for an explicit placement order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sequence length differs from the number of grid cells
    /// - The checkpoint amount exceeds the number of placements
    /// - The origin lies outside the grid
    pub fn with_sequence(config: &RunConfig, sequence: PlacementSequence) -> Result<Self> {
        let canvas = Canvas::new(config.width, config.height);
        if sequence.len() != canvas.len() {
            return Err(invalid_parameter(
                "sequence",
                &sequence.len(),
                &format!("must hold exactly {} colours", canvas.len()),
            ));
        }
        if !canvas.contains(config.origin) {
            return Err(invalid_parameter(
                "start",
                &config.origin,
                &format!("outside {}x{} grid", config.width, config.height),
            ));
        }

        let schedule = CheckpointSchedule::new(sequence.len(), config.checkpoint_amount)?;

        tracing::debug!(
            width = config.width,
            height = config.height,
            origin = %config.origin,
            distance = config.evaluator.distance().name(),
            aggregation = ?config.evaluator.aggregation(),
            half_width = config.evaluator.half_width(),
            checkpoints = schedule.len(),
            "placement engine initialised"
        );

        Ok(Self {
            sequence,
            frontier: Frontier::new(config.width, config.height),
            canvas,
            evaluator: config.evaluator,
            schedule,
            origin: config.origin,
            index: 0,
            candidate_buffer: Vec::new(),
        })
    }

    /// Total number of placements
    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        if self.canvas.filled() == 0 {
            EngineState::Empty
        } else if self.canvas.is_complete() {
            EngineState::Complete
        } else {
            EngineState::Running
        }
    }

    /// Place the next colour
    ///
    /// Returns `None` once the sequence is exhausted. A snapshot is handed to
    /// `sink` when the placement index is scheduled as a checkpoint.
    ///
    /// # Errors
    ///
    /// Returns an invariant error if:
    /// - The frontier is empty after the first placement
    /// - The chosen cell is already filled
    /// - The frontier is not empty after the last placement
    pub fn step<S: CheckpointSink + ?Sized>(&mut self, sink: &mut S) -> Result<Option<Placement>> {
        let index = self.index;
        let Some(&color) = self.sequence.get(index) else {
            return Ok(None);
        };

        let (coordinate, inverse_fitness) = if self.frontier.is_empty() {
            if index > 0 {
                return Err(AlgorithmError::FrontierExhausted { index });
            }
            (self.origin, None)
        } else {
            let best = self.select(&color)?;
            (
                best.coordinate(self.canvas.width()),
                Some(best.inverse_fitness),
            )
        };

        self.commit(coordinate, color).at_placement(index)?;
        self.index += 1;

        let checkpoint = self.schedule.checkpoint_at(index);
        if let Some(id) = checkpoint {
            let snapshot = Checkpoint {
                id,
                index,
                snapshot: self.canvas.clone(),
            };
            tracing::info!(
                checkpoint = id,
                progress = snapshot.progress_percent(),
                "Progress: {:>2}%",
                snapshot.progress_percent()
            );
            sink.accept(snapshot);
        }

        if self.index == self.total() {
            self.finish()?;
        }

        Ok(Some(Placement {
            index,
            coordinate,
            color,
            inverse_fitness,
            checkpoint,
        }))
    }

    /// Place every remaining colour
    ///
    /// # Errors
    ///
    /// Returns the first invariant error raised by [`PlacementEngine::step`]
    pub fn run<S: CheckpointSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        while self.step(sink)?.is_some() {}
        self.finish()
    }

    /// Write `color` into an empty cell and grow the frontier around it
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is already filled or outside the grid
    pub fn commit(&mut self, coordinate: Coordinate, color: Color) -> Result<()> {
        self.canvas.place(coordinate, color)?;
        self.frontier.remove(coordinate);
        self.frontier.expand_around(&self.canvas, coordinate);
        Ok(())
    }

    /// Verify the completed run
    ///
    /// # Errors
    ///
    /// Returns an error if colours remain unplaced or the frontier is not empty
    pub fn finish(&self) -> Result<()> {
        let remaining = self.total() - self.index;
        if remaining > 0 {
            return Err(AlgorithmError::SequenceNotExhausted { remaining });
        }
        if !self.frontier.is_empty() {
            return Err(AlgorithmError::FrontierNotEmpty {
                remaining: self.frontier.len(),
            });
        }
        Ok(())
    }

    fn select(&mut self, color: &Color) -> Result<Candidate> {
        self.candidate_buffer.clear();
        self.candidate_buffer.extend(self.frontier.indices());

        select_best_candidate(&self.candidate_buffer, &self.canvas, &self.evaluator, color)
            .ok_or(AlgorithmError::FrontierExhausted { index: self.index })
    }
}
