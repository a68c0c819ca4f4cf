//! CLI entry point for the cave map generator

use clap::Parser;
use cavetown::io::cli::{Cli, MapProcessor};

fn main() -> cavetown::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut processor = MapProcessor::new(cli);
    processor.process().map(|_| ())
}
