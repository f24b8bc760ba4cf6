/// Checkpoint schedule and snapshot hand-off
pub mod checkpoint;
/// Placement engine and run orchestration
pub mod executor;
/// Inverse fitness evaluation against placed neighbours
pub mod fitness;
/// Parallel frontier scan for the best placement
pub mod selection;
