//! Command-line interface driving a full placement run with checkpoint export

use crate::algorithm::executor::PlacementEngine;
use crate::color::DistanceRegistry;
use crate::io::configuration::{RunConfig, Settings};
use crate::io::error::Result;
use crate::io::export::{CheckpointExporter, ExportReport};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "allrgb")]
#[command(
    author,
    version,
    about = "Place every quantized RGB colour exactly once, next to similar colours"
)]
/// Command-line arguments for the colour placement tool
pub struct Cli {
    /// YAML settings file layered over the defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a setting, e.g. `-D color.depth=32` (repeatable)
    #[arg(short = 'D', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Random seed for reproducible placement order
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Quantization levels per colour channel
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Grid width in pixels
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Grid height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Directory receiving checkpoint images
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build settings from defaults, settings file, overrides and flags
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded or an override
    /// is malformed
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        for assignment in &self.overrides {
            settings.apply_override(assignment)?;
        }

        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(depth) = self.depth {
            settings.color.depth = depth;
        }
        if let Some(width) = self.width {
            settings.image.width = width;
        }
        if let Some(height) = self.height {
            settings.image.height = height;
        }
        if let Some(output) = &self.output {
            settings.image.path.clone_from(output);
        }

        Ok(settings)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of colours placed
    pub placements: usize,
    /// Checkpoint export outcome
    pub export: ExportReport,
}

/// Orchestrates configuration, placement and export for one run
pub struct Runner {
    config: RunConfig,
    progress: ProgressReporter,
}

impl Runner {
    /// Resolve configuration from the command line
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are invalid
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = cli.settings()?.resolve(&DistanceRegistry::with_builtins())?;
        let progress = if cli.should_show_progress() {
            ProgressReporter::new(config.total())
        } else {
            ProgressReporter::hidden()
        };
        Ok(Self { config, progress })
    }

    /// Create a runner for an already resolved configuration
    pub const fn from_config(config: RunConfig, progress: ProgressReporter) -> Self {
        Self { config, progress }
    }

    /// Resolved configuration
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Place every colour, exporting checkpoints along the way
    ///
    /// Checkpoint write failures are logged and reported in the summary; they
    /// do not stop the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be built, a placement invariant
    /// breaks, or the export worker dies
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut engine = PlacementEngine::new(&self.config)?;
        let mut exporter = CheckpointExporter::spawn(self.config.output.clone())?;

        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            depth = self.config.depth,
            seed = self.config.seed,
            distance = self.config.evaluator.distance().name(),
            "starting placement"
        );

        while let Some(placement) = engine.step(&mut exporter)? {
            self.progress.placed(placement.index);
            if let Some(id) = placement.checkpoint {
                self.progress.checkpoint(id);
            }
        }
        engine.finish()?;
        self.progress.finish();

        let export = exporter.finish()?;
        tracing::info!(
            placements = engine.total(),
            checkpoints_written = export.written.len(),
            checkpoints_failed = export.failed.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "placement complete"
        );

        Ok(RunSummary {
            placements: engine.total(),
            export,
        })
    }
}
