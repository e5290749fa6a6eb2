use super::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("Invalid tag '{key}': {source}")]
    InvalidTag {
        key: String,
        #[source]
        source: ValidationError,
    },
    #[error("Failed to read result '{path}': {source}")]
    ReadResult {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse result '{path}': {source}")]
    ParseResult {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
