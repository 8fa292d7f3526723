//! Tracing subscriber setup

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Filter used when the configured one does not parse
const FALLBACK_FILTER: &str = "warn";

/// Install the fmt subscriber on stderr so stdout carries only reports.
/// A malformed `log_filter` falls back to `warn` instead of failing the run.
pub fn init(log_filter: &str) -> Result<(), TelemetryError> {
    let (env_filter, rejected) = resolve_filter(log_filter);
    if let Some(err) = rejected {
        eprintln!("[langpay] Warning: {}, using '{}'", err, FALLBACK_FILTER);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Parse `log_filter`, or return the fallback filter with the parse error
fn resolve_filter(log_filter: &str) -> (EnvFilter, Option<TelemetryError>) {
    match EnvFilter::try_new(log_filter) {
        Ok(filter) => (filter, None),
        Err(source) => (
            EnvFilter::new(FALLBACK_FILTER),
            Some(TelemetryError::EnvFilter {
                value: log_filter.to_string(),
                source,
            }),
        ),
    }
}
