//! Sparse interaction grid - main entry point
//!
//! Takes no arguments: every input is compiled into the binary. Opens a
//! window with the four heatmaps and exits when it is closed.

use anyhow::Context;
use sparse_interaction_grid::config::FigureConfig;
use sparse_interaction_grid::pipeline;
use tracing::{error, info, Level};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Sparse interaction grid v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run() {
        error!("✗ {:#}", e);
        std::process::exit(1);
    }

    info!("✓ Done");
}

fn run() -> anyhow::Result<()> {
    let config = FigureConfig::embedded().context("Failed to load figure configuration")?;
    pipeline::run(&config).context("Failed to render interaction grid")?;
    Ok(())
}
