use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while running the benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("could not deal {requested} non-terminal boards in {attempts} attempts")]
    BoardGeneration { requested: usize, attempts: usize },
}
