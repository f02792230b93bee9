//! Configuration management for TestForge.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `testforge.toml` file
//! 3. User config `~/.config/testforge/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::framework::{Framework, TestType};
use crate::generation::{unique_test_types, TestGenerationConfig};

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default generation options for new suites.
    pub generation: TestGenerationConfig,

    /// Suite runner configuration.
    pub runner: RunnerConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./testforge.toml` (project local)
    /// 2. `~/.config/testforge/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.generation.dedup_test_types();

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join("config.toml"))
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.runner.pass_rate) {
            return Err(ConfigError::Invalid(format!(
                "runner.pass_rate must be between 0 and 1, got {}",
                self.runner.pass_rate
            )));
        }
        if self.runner.outcome_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "runner.outcome_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok());
    }

    /// Applies overrides from a key lookup (keys are given without prefix).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Generation overrides
        if let Some(framework) = lookup("FRAMEWORK") {
            match framework.parse::<Framework>() {
                Ok(fw) => self.generation.framework = fw,
                Err(e) => warn!("ignoring {}FRAMEWORK: {}", ENV_PREFIX, e),
            }
        }
        if let Some(types) = lookup("TEST_TYPES") {
            let parsed: Result<Vec<TestType>, _> = types
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<TestType>())
                .collect();
            match parsed {
                Ok(types) => self.generation.test_types = unique_test_types(types),
                Err(e) => warn!("ignoring {}TEST_TYPES: {}", ENV_PREFIX, e),
            }
        }

        // Runner overrides
        if let Some(seed) = lookup("SEED") {
            if let Ok(n) = seed.parse() {
                self.runner.seed = Some(n);
            }
        }
        if let Some(ms) = lookup("SETTLE_MS") {
            if let Ok(n) = ms.parse() {
                self.runner.settle_delay_ms = n;
            }
        }
        if let Some(ms) = lookup("TIMEOUT_MS") {
            if let Ok(n) = ms.parse() {
                self.runner.outcome_timeout_ms = n;
            }
        }

        // Export overrides
        if let Some(dir) = lookup("EXPORT_DIR") {
            self.export.output_dir = dir;
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Suite runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Pause after each case before dispatching the next (ms).
    pub settle_delay_ms: u64,

    /// Maximum wait for one outcome (ms). A case that times out is failed.
    pub outcome_timeout_ms: u64,

    /// Seed for the simulated outcome source. Unset means random.
    pub seed: Option<u64>,

    /// Probability that a simulated case passes.
    pub pass_rate: f64,

    /// Whether the simulator sleeps for the duration it reports.
    pub simulate_latency: bool,

    /// Queue depth of the outcome worker.
    pub worker_queue: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            outcome_timeout_ms: DEFAULT_OUTCOME_TIMEOUT_MS,
            seed: None,
            pass_rate: DEFAULT_PASS_RATE,
            simulate_latency: false,
            worker_queue: DEFAULT_WORKER_QUEUE,
        }
    }
}

impl RunnerConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn outcome_timeout(&self) -> Duration {
        Duration::from_millis(self.outcome_timeout_ms)
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to.
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_EXPORT_DIR.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.runner.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
        assert_eq!(config.runner.outcome_timeout_ms, DEFAULT_OUTCOME_TIMEOUT_MS);
        assert_eq!(config.export.output_dir, DEFAULT_EXPORT_DIR);
        assert_eq!(config.generation.framework, Framework::Jest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("FRAMEWORK", "playwright"),
            ("TEST_TYPES", "e2e, accessibility, e2e"),
            ("SEED", "99"),
            ("SETTLE_MS", "0"),
            ("TIMEOUT_MS", "500"),
            ("EXPORT_DIR", "out"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.generation.framework, Framework::Playwright);
        assert_eq!(
            config.generation.test_types,
            vec![TestType::E2e, TestType::Accessibility]
        );
        assert_eq!(config.runner.seed, Some(99));
        assert_eq!(config.runner.settle_delay_ms, 0);
        assert_eq!(config.runner.outcome_timeout_ms, 500);
        assert_eq!(config.export.output_dir, "out");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "FRAMEWORK" => Some("karma".to_string()),
            "TEST_TYPES" => Some("unit,visual".to_string()),
            "SEED" => Some("abc".to_string()),
            _ => None,
        });

        assert_eq!(config.generation.framework, Framework::Jest);
        assert_eq!(
            config.generation.test_types,
            vec![TestType::Unit, TestType::Integration]
        );
        assert_eq!(config.runner.seed, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.runner.pass_rate = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.runner.outcome_timeout_ms = 0;
        assert!(config.validate().is_err());
    }
}
