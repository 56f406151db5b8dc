//! Column Means - Main Entry Point

use column_means::{init_logging, run, Settings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logging(settings.level()?)?;

    info!("=== Column Means v{} ===", env!("CARGO_PKG_VERSION"));

    let output = run(&settings)?;
    println!("{}", output);

    Ok(())
}
