//! Background checkpoint export
//!
//! Snapshots are queued on a channel and encoded by one worker thread, so the
//! placement loop never waits on encoding or disk I/O. Failed writes are
//! logged and counted; later checkpoints are still attempted.

use crate::algorithm::checkpoint::{Checkpoint, CheckpointSink};
use crate::io::configuration::OutputSettings;
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::export_checkpoint;
use std::any::Any;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Outcome of all checkpoint writes of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Files written, in checkpoint order
    pub written: Vec<PathBuf>,
    /// Checkpoints whose write failed
    pub failed: Vec<usize>,
}

/// Checkpoint sink that writes images on a worker thread
pub struct CheckpointExporter {
    sender: Option<Sender<Checkpoint>>,
    worker: Option<JoinHandle<ExportReport>>,
}

impl CheckpointExporter {
    /// Start the worker thread
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned
    pub fn spawn(output: OutputSettings) -> Result<Self> {
        let (sender, receiver) = mpsc::channel::<Checkpoint>();

        let worker = thread::Builder::new()
            .name("checkpoint-export".to_string())
            .spawn(move || {
                let mut report = ExportReport::default();
                for checkpoint in receiver {
                    match export_checkpoint(&checkpoint.snapshot, &output, checkpoint.id) {
                        Ok(path) => {
                            tracing::info!(
                                checkpoint = checkpoint.id,
                                path = %path.display(),
                                "checkpoint written"
                            );
                            report.written.push(path);
                        }
                        Err(error) => {
                            tracing::warn!(
                                checkpoint = checkpoint.id,
                                %error,
                                "checkpoint export failed, continuing"
                            );
                            report.failed.push(checkpoint.id);
                        }
                    }
                }
                report
            })
            .map_err(|e| AlgorithmError::ExportWorker {
                reason: e.to_string(),
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Wait for every queued checkpoint to be written
    ///
    /// Later calls return an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread panicked
    pub fn finish(&mut self) -> Result<ExportReport> {
        drop(self.sender.take());
        match self.worker.take() {
            Some(worker) => worker.join().map_err(|payload| AlgorithmError::ExportWorker {
                reason: panic_message(payload.as_ref()),
            }),
            None => Ok(ExportReport::default()),
        }
    }
}

impl CheckpointSink for CheckpointExporter {
    fn accept(&mut self, checkpoint: Checkpoint) {
        let id = checkpoint.id;
        let delivered = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(checkpoint).is_ok());
        if !delivered {
            tracing::warn!(checkpoint = id, "export worker unavailable, checkpoint dropped");
        }
    }
}

impl Drop for CheckpointExporter {
    fn drop(&mut self) {
        if let Err(error) = self.finish() {
            tracing::warn!(%error, "checkpoint export did not shut down cleanly");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker panicked".to_string())
}
