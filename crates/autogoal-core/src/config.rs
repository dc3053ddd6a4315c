//! # Configuration
//!
//! Configuration is always passed explicitly; nothing in the core reads a
//! global. Values are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (see [`ConfigFile`])
//! 3. environment variables
//! 4. explicit builder calls
//!
//! ## Environment Variables
//!
//! - `AUTOGOAL_AGENT_NAME` - Agent name (default: "autogoal")
//! - `AUTOGOAL_MAX_SHORT_TERM_MEMORY` - Short-term memory capacity (default: 10)
//! - `AUTOGOAL_MAX_ITERATIONS` - Iteration cap for `run` (default: unlimited)
//! - `AUTOGOAL_ENABLE_REASONING_HISTORY` - Record reasoning steps (default: true)
//! - `AUTOGOAL_LOG_LEVEL` - Log level for hosts that install a subscriber (default: "info")
//! - `AUTOGOAL_JSON_LOGS` - Emit JSON log lines (default: true)
//!
//! ## File format
//!
//! ```toml
//! [agent]
//! name = "planner"
//! max_short_term_memory = 20
//! max_iterations = 50
//!
//! [system]
//! log_level = "debug"
//! json_logs = false
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::{env, fs, io};

/// Default short-term memory capacity.
pub const DEFAULT_SHORT_TERM_CAPACITY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9);

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Settings that shape a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Display name, reported by the agent status.
    pub name: String,
    /// Short-term memory capacity.
    pub max_short_term_memory: NonZeroUsize,
    /// Iteration cap used by `run` when the caller does not pass one.
    /// `None` runs until no pending goals remain.
    pub max_iterations: Option<usize>,
    /// Whether reasoning steps are recorded.
    pub enable_reasoning_history: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "autogoal".to_string(),
            max_short_term_memory: DEFAULT_SHORT_TERM_CAPACITY,
            max_iterations: None,
            enable_reasoning_history: true,
        }
    }
}

impl AgentConfig {
    #[must_use]
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::new()
    }
}

/// Process-wide settings consumed by hosts (log level and format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl SystemConfig {
    /// Apply `AUTOGOAL_LOG_LEVEL` and `AUTOGOAL_JSON_LOGS` on top of `self`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the resulting
    /// log level is unknown.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_lookup(|key| env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(level) = lookup("AUTOGOAL_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(json) = parse_bool(&lookup, "AUTOGOAL_JSON_LOGS")? {
            self.json_logs = json;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the log level is one `tracing` understands.
    ///
    /// `warning` is accepted as an alias for `warn`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.normalized_log_level();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(format!(
                "log_level '{}' must be one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )))
        }
    }

    /// Lowercased log level suitable for an `EnvFilter` directive.
    pub fn normalized_log_level(&self) -> String {
        match self.log_level.to_lowercase().as_str() {
            "warning" => "warn".to_string(),
            other => other.to_string(),
        }
    }
}

/// On-disk configuration: an `[agent]` and a `[system]` table, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub agent: AgentConfig,
    pub system: SystemConfig,
}

impl ConfigFile {
    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if
    /// it is not valid TOML for this schema.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Builder for [`AgentConfig`] with file and environment support.
#[derive(Debug, Clone)]
pub struct AgentConfigBuilder {
    name: String,
    max_short_term_memory: usize,
    max_iterations: Option<usize>,
    enable_reasoning_history: bool,
}

impl Default for AgentConfigBuilder {
    fn default() -> Self {
        Self::from_config(AgentConfig::default())
    }
}

impl AgentConfigBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. the `[agent]` table of a
    /// [`ConfigFile`].
    #[must_use]
    pub fn from_config(config: AgentConfig) -> Self {
        Self {
            name: config.name,
            max_short_term_memory: config.max_short_term_memory.get(),
            max_iterations: config.max_iterations,
            enable_reasoning_history: config.enable_reasoning_history,
        }
    }

    /// Start from the `[agent]` table of a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::from_config(ConfigFile::from_path(path)?.agent))
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any environment variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// Apply environment variables on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any environment variable has an invalid value.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_lookup(|key| env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(name) = lookup("AUTOGOAL_AGENT_NAME") {
            self.name = name;
        }
        if let Some(capacity) = parse_usize(&lookup, "AUTOGOAL_MAX_SHORT_TERM_MEMORY")? {
            self.max_short_term_memory = capacity;
        }
        if let Some(iterations) = parse_usize(&lookup, "AUTOGOAL_MAX_ITERATIONS")? {
            self.max_iterations = Some(iterations);
        }
        if let Some(enabled) = parse_bool(&lookup, "AUTOGOAL_ENABLE_REASONING_HISTORY")? {
            self.enable_reasoning_history = enabled;
        }
        Ok(self)
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn max_short_term_memory(mut self, capacity: usize) -> Self {
        self.max_short_term_memory = capacity;
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Remove the iteration cap.
    #[must_use]
    pub fn unlimited_iterations(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    #[must_use]
    pub fn enable_reasoning_history(mut self, enable: bool) -> Self {
        self.enable_reasoning_history = enable;
        self
    }

    /// Validate configuration and build `AgentConfig`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid.
    pub fn build(self) -> Result<AgentConfig, ConfigError> {
        let max_short_term_memory = NonZeroUsize::new(self.max_short_term_memory).ok_or_else(|| {
            ConfigError::ValidationError(
                "max_short_term_memory must be greater than 0".to_string(),
            )
        })?;

        if self.max_iterations == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_iterations must be greater than 0 when set".to_string(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "name cannot be empty".to_string(),
            ));
        }

        Ok(AgentConfig {
            name: self.name,
            max_short_term_memory,
            max_iterations: self.max_iterations,
            enable_reasoning_history: self.enable_reasoning_history,
        })
    }
}

// Environment variable helper functions

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<bool>, ConfigError> {
    match lookup(key) {
        Some(val) => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!(
                    "invalid boolean value '{val}', expected true/false/1/0/yes/no/on/off"
                ),
            }),
        },
        None => Ok(None),
    }
}

fn parse_usize(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<usize>, ConfigError> {
    match lookup(key) {
        Some(val) => val
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid usize value '{val}': {e}"),
            }),
        None => Ok(None),
    }
}
