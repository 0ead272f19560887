use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,hockey_bot=info,reqwest=warn";

/// Install the global subscriber. `RUST_LOG` picks levels, `LOG_FORMAT`
/// picks `json` or `pretty` output.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match format.to_lowercase().as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.try_init(),
    }
    .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
