//! svgdat - Main Entry Point

use anyhow::bail;
use svgdat::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", svgdat::USAGE);
            return Ok(());
        }
        Err(e) => bail!("{}\n\n{}", e, svgdat::USAGE),
    };

    let summary = svgdat::run(&config);
    tracing::info!(
        "{} converted, {} skipped, {} missing, {} failed",
        summary.converted,
        summary.skipped,
        summary.missing,
        summary.failed.len()
    );

    if !summary.is_success() {
        bail!("Failed layers: {}", summary.failed.join(", "));
    }

    Ok(())
}
