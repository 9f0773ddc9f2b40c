use crate::config::TelemetryConfig;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("STYLIST_LOG_LEVEL holds an invalid filter directive '{directive}'")]
    InvalidDirective {
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("a global tracing subscriber is already installed")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter built from the configured `STYLIST_LOG_LEVEL` directive. Accepts
/// anything `EnvFilter` does, so per-module directives like
/// `info,wardrobe_ai=debug` work.
fn configured_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidDirective {
        directive: config.log_level.clone(),
        source,
    })
}

/// Install the global tracing subscriber. An explicit `RUST_LOG` wins over
/// the configured level so operators can crank verbosity without touching
/// the service config.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn accepts_plain_and_module_scoped_directives() {
        assert!(configured_filter(&config("info")).is_ok());
        assert!(configured_filter(&config("warn,wardrobe_ai=debug")).is_ok());
    }

    #[test]
    fn rejects_malformed_directives_with_the_offending_value() {
        let result = configured_filter(&config("styling=debug=loud"));
        match result {
            Err(TelemetryError::InvalidDirective { directive, .. }) => {
                assert_eq!(directive, "styling=debug=loud");
            }
            other => panic!("expected an invalid-directive error, got {other:?}"),
        }
    }
}
