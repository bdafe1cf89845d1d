//! Configuration system for Lockstep.
//!
//! Load evaluation settings from TOML or YAML files to control how a
//! single-pass evaluation reports itself, without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use lockstep_config::EvaluationConfig;
//! use std::time::Duration;
//!
//! let config = EvaluationConfig::from_toml_str(r#"
//!     name = "daily totals"
//!     progress_interval = 10000
//!     warn_after_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.name.as_deref(), Some("daily totals"));
//! assert_eq!(config.slow_threshold(), Some(Duration::from_millis(250)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use lockstep_config::EvaluationConfig;
//!
//! let config = EvaluationConfig::load("lockstep.toml").unwrap_or_default();
//! assert!(config.progress_interval.is_none());
//! ```

use std::path::Path;
use std::time::Duration;

use lockstep_core::LockstepError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for LockstepError {
    fn from(err: ConfigError) -> Self {
        LockstepError::Config(err.to_string())
    }
}

/// Settings for one single-pass evaluation.
///
/// None of these settings change results: they only control the structured
/// events emitted while the source is enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EvaluationConfig {
    /// Label attached to every event of the evaluation.
    #[serde(default)]
    pub name: Option<String>,

    /// Emit a progress event every this many elements.
    #[serde(default)]
    pub progress_interval: Option<u64>,

    /// Emit a warning when the pass takes longer than this many milliseconds.
    #[serde(default)]
    pub warn_after_ms: Option<u64>,
}

impl EvaluationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the evaluation label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the progress event interval.
    pub fn with_progress_interval(mut self, elements: u64) -> Self {
        self.progress_interval = Some(elements);
        self
    }

    /// Sets the slow-pass warning threshold.
    pub fn with_warn_after_ms(mut self, millis: u64) -> Self {
        self.warn_after_ms = Some(millis);
        self
    }

    /// Checks the configuration for values that can never be honored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero progress interval or an
    /// empty name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_interval == Some(0) {
            return Err(ConfigError::Invalid(
                "progress_interval must be greater than zero".to_string(),
            ));
        }
        if matches!(self.name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Returns the slow-pass warning threshold, if configured.
    pub fn slow_threshold(&self) -> Option<Duration> {
        self.warn_after_ms.map(Duration::from_millis)
    }

    /// Returns the evaluation label, or `"unnamed"`.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}
