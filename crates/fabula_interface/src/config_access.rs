//! Read-only access to external configuration.

use fabula_error::{ConfigError, FabulaError, FabulaResult};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Read accessor over an external configuration store.
///
/// Keys are dotted paths such as `extensions.session.max_turns`. Extensions
/// receive an accessor at construction time and read only the keys they
/// declare.
pub trait ConfigAccessor: Debug + Send + Sync {
    /// Raw string value for `key`, if present.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Unsigned integer value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is present but not an unsigned integer.
    fn get_u64(&self, key: &str) -> FabulaResult<Option<u64>> {
        self.get_string(key)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    FabulaError::from(ConfigError::invalid_value(
                        key,
                        format!("not an unsigned integer: {}", e),
                    ))
                })
            })
            .transpose()
    }

    /// Boolean value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is present but not `true` or `false`.
    fn get_bool(&self, key: &str) -> FabulaResult<Option<bool>> {
        self.get_string(key)
            .map(|raw| match raw.trim().to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(FabulaError::from(ConfigError::invalid_value(
                    key,
                    format!("not a boolean: {}", other),
                ))),
            })
            .transpose()
    }
}

impl ConfigAccessor for config::Config {
    fn get_string(&self, key: &str) -> Option<String> {
        config::Config::get_string(self, key).ok()
    }
}

/// In-memory configuration accessor.
///
/// # Examples
///
/// ```
/// use fabula_interface::{ConfigAccessor, MapConfig};
///
/// let config = MapConfig::new().with("extensions.session.max_turns", "5");
/// assert_eq!(config.get_u64("extensions.session.max_turns").unwrap(), Some(5));
/// assert_eq!(config.get_string("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    values: BTreeMap<String, String>,
}

impl MapConfig {
    /// Creates an empty accessor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigAccessor for MapConfig {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_u64_rejects_non_numeric() {
        let config = MapConfig::new().with("limit", "many");
        let err = config.get_u64("limit").unwrap_err();
        match err.kind() {
            fabula_error::FabulaErrorKind::Config(config_err) => assert!(matches!(
                &config_err.kind,
                fabula_error::ConfigErrorKind::InvalidValue { key, .. } if key == "limit"
            )),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(config.get_u64("absent").unwrap(), None);
    }

    #[test]
    fn test_get_bool() {
        let config = MapConfig::new()
            .with("on", "TRUE")
            .with("off", " false ")
            .with("bad", "yes");
        assert_eq!(config.get_bool("on").unwrap(), Some(true));
        assert_eq!(config.get_bool("off").unwrap(), Some(false));
        assert!(config.get_bool("bad").is_err());
    }

    #[test]
    fn test_config_crate_accessor() {
        let config = config::Config::builder()
            .set_override("extensions.session.max_turns", 12)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            ConfigAccessor::get_u64(&config, "extensions.session.max_turns").unwrap(),
            Some(12)
        );
        assert_eq!(ConfigAccessor::get_string(&config, "story.locale"), None);
    }
}
