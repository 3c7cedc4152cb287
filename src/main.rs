// The library crate holds all of the logic; this binary only wires up logging
// and runs one pass over the compiled-in project root.

use std::io::Write;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asset_optimizer::{AssetOptimizer, Reporter, Savings};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the savings report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("=== Asset optimization starting ===");

    let savings = run(&AssetOptimizer::default(), &mut Reporter::stdout())?;

    info!("Done: {} bytes saved across {} files", savings.total_bytes(), savings.files());
    Ok(())
}

/// Any error returned here makes the process exit with status 1.
fn run<W: Write>(optimizer: &AssetOptimizer, reporter: &mut Reporter<W>) -> anyhow::Result<Savings> {
    optimizer
        .run(reporter)
        .with_context(|| format!("Asset optimization under {} failed", optimizer.root().display()))
}
