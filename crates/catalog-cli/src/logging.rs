//! Log setup for the `catalog` binary.
//!
//! Events go to stderr so that stdout carries only command output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive that surfaces every rendered statement.
pub const VERBOSE_DIRECTIVE: &str = "warn,catalog.sql=debug";

/// Pick the filter directive: `--verbose` beats the configured level.
pub fn directive(configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    configured.unwrap_or("warn").to_string()
}

/// Install the global subscriber. `RUST_LOG` wins over `directive`.
pub fn init(directive: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|e| anyhow::anyhow!("invalid log filter {directive:?}: {e}"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_config() {
        assert_eq!(directive(Some("info"), true), VERBOSE_DIRECTIVE);
        assert_eq!(directive(Some("info"), false), "info");
        assert_eq!(directive(None, false), "warn");
    }
}
