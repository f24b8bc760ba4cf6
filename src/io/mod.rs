/// Command-line interface and run orchestration
pub mod cli;
/// Defaults, settings file and validated run configuration
pub mod configuration;
/// Error types and context management
pub mod error;
/// Background checkpoint export
pub mod export;
/// Canvas rendering and checkpoint image files
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
