//! CLI entry point for the edge-constrained chunk generator

use clap::Parser;
use edgetile::io::cli::{ChunkProcessor, Cli};

fn main() -> edgetile::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut processor = ChunkProcessor::new(cli);
    let stdout = std::io::stdout();
    processor.process(&mut stdout.lock())?;
    Ok(())
}
