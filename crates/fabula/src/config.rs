//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from fabula.toml)
//! - `~/.config/fabula/fabula.toml`
//! - `./fabula.toml`

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use fabula_error::{ConfigError, ConfigErrorKind, FabulaError, FabulaResult};
use fabula_interface::{ConfigAccessor, ExtensionLoaderParameter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../fabula.toml");

/// Story defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct StoryConfig {
    /// Locale given to extensions and to stories that declare none
    #[serde(default = "default_locale")]
    locale: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `fabula_verify=debug`
    #[serde(default = "default_level")]
    level: String,
    /// Emit JSON lines
    #[serde(default)]
    json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Default, Deserialize)]
struct Sections {
    #[serde(default)]
    story: StoryConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Fabula configuration.
///
/// Typed sections cover the story and logging settings. Everything else,
/// notably the `[extensions.*]` tables, stays in the underlying
/// [`config::Config`] and reaches extensions through [`ConfigAccessor`].
///
/// # Example
///
/// ```toml
/// [story]
/// locale = "de-DE"
///
/// [extensions.session]
/// max_turns = 10
/// ```
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FabulaConfig {
    /// Story defaults
    story: StoryConfig,
    /// Logging settings
    logging: LoggingConfig,
    /// Merged configuration store
    #[getter(skip)]
    source: Arc<Config>,
}

impl FabulaConfig {
    /// Load configuration from bundled defaults overlaid with a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FabulaResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::build(builder)
    }

    /// Load configuration from a TOML string overlaid on bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML configuration.
    pub fn from_toml_str(toml: &str) -> FabulaResult<Self> {
        Self::build(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing user file is malformed.
    #[instrument]
    pub fn load() -> FabulaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabula/fabula.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("fabula").required(false));

        Self::build(builder)
    }

    /// Configuration accessor over the merged store.
    pub fn accessor(&self) -> Arc<dyn ConfigAccessor> {
        self.source.clone()
    }

    /// Registry construction parameter carrying the configured locale.
    pub fn loader_parameter(&self) -> ExtensionLoaderParameter {
        ExtensionLoaderParameter::new(self.story.locale.clone(), self.accessor())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> FabulaResult<Self> {
        let source = builder.build().map_err(|e| {
            FabulaError::from(ConfigError::new(ConfigErrorKind::Build(e.to_string())))
        })?;

        let sections: Sections = source.clone().try_deserialize().map_err(|e| {
            FabulaError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
        })?;

        debug!(
            locale = %sections.story.locale,
            log_level = %sections.logging.level,
            "Configuration loaded"
        );

        Ok(Self {
            story: sections.story,
            logging: sections.logging,
            source: Arc::new(source),
        })
    }
}
