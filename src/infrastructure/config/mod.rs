//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Shell configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ShellConfig {
    pub prompt: String,
    pub exit_command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            exit_command: "exit".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shell.exit_command.trim().is_empty() {
            return Err(ConfigError::InvalidValue("exit-command must not be empty".to_string()));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue(format!("unknown log level: {}", self.logging.level)));
        }
        Ok(())
    }

    /// Default config rendered as YAML, for `init-config`
    pub fn template() -> Result<String, ConfigError> {
        Config::default().to_yaml()
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(prompt) = lookup("SOCIAL_PROMPT") {
            self.shell.prompt = prompt;
        }

        if let Some(exit) = lookup("SOCIAL_EXIT_COMMAND") {
            self.shell.exit_command = exit;
        }

        if let Some(level) = lookup("SOCIAL_LOG_LEVEL") {
            self.logging.level = level;
        }

        self
    }

    /// File at `path` if it exists, else defaults, then environment overrides.
    pub fn from_sources(path: &Path) -> Result<Self, ConfigError> {
        Self::resolve(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::from_sources`] with an explicit override lookup.
    /// The merged result is always validated.
    pub fn resolve(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        let config = config.with_overrides(lookup);
        config.validate()?;
        Ok(config)
    }
}
