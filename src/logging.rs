use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr.
///
/// `directives` uses `EnvFilter` syntax, e.g. `info` or
/// `installer_console=debug,axum=warn`.
pub fn init(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("parse log filter '{}'", directives))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("install log subscriber")?;
    Ok(())
}
