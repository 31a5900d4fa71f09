//! Logging setup.

use fabula_error::{ConfigError, ConfigErrorKind, FabulaError, FabulaResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. With `json` set, events are
/// written as newline-delimited JSON. Returns `Ok(false)` when a global
/// subscriber was already installed; the existing one stays in place.
///
/// # Errors
///
/// Returns [`ConfigErrorKind::InvalidFilter`] if `level` is not a valid filter directive.
pub fn init_tracing(level: &str, json: bool) -> FabulaResult<bool> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| {
            FabulaError::from(ConfigError::new(ConfigErrorKind::InvalidFilter {
                filter: level.to_string(),
                message: e.to_string(),
            }))
        })?;

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok())
}
