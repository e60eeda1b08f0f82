use std::path::Path;

use crate::bench::BenchmarkConfig;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub benchmark: BenchmarkConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.num_boards == 0 {
            return Err(ConfigError::Validation(
                "benchmark.num_boards must be > 0".into(),
            ));
        }
        if self.benchmark.min_random_moves > self.benchmark.max_random_moves {
            return Err(ConfigError::Validation(
                "benchmark.min_random_moves must be <= benchmark.max_random_moves".into(),
            ));
        }
        if self.benchmark.max_random_moves >= ROWS * COLS {
            return Err(ConfigError::Validation(
                "benchmark.max_random_moves must be < 42".into(),
            ));
        }
        if self.benchmark.depths.is_empty() {
            return Err(ConfigError::Validation(
                "benchmark.depths must not be empty".into(),
            ));
        }
        if self.benchmark.depths.iter().any(|&d| d == 0) {
            return Err(ConfigError::Validation(
                "benchmark.depths entries must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
