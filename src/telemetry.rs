//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. An unparsable filter
/// falls back to `info`. Only the first call has any effect, and a
/// subscriber installed elsewhere is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let json = config.json;

        let _ = tracing_subscriber::registry()
            .with(json.then(|| fmt::layer().json().with_current_span(false)))
            .with((!json).then(|| fmt::layer().with_target(true)))
            .with(filter)
            .try_init();
    });
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&LoggingConfig {
            json: true,
            ..config
        });
        tracing::info!("still logging");
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(&LoggingConfig {
            filter: "mock_interview=loud".to_string(),
            json: false,
        });
        assert_eq!(filter.to_string(), "info");
    }
}
