//! CLI entry point for the greedy all-RGB placement algorithm

use allrgb::io::cli::{Cli, Runner};
use allrgb::io::logging::init_logging;
use clap::Parser;

fn main() -> allrgb::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let runner =
        Runner::new(&cli).inspect_err(|error| tracing::error!(%error, "invalid configuration"))?;
    runner
        .run()
        .inspect_err(|error| tracing::error!(%error, "run aborted"))?;
    Ok(())
}
