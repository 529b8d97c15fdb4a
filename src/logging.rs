use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber. Events go to stderr so that scaled
/// output on stdout stays clean for piping.
pub fn init_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter '{}'", filter))?;

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
