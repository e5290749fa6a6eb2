use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::RunResult;

/// Reads a finished result from a JSON file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error when the input cannot be read or is not a valid result.
pub fn load_result(path: &str) -> AppResult<RunResult> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|err| {
                AppError::config(ConfigError::ReadResult {
                    path: PathBuf::from("<stdin>"),
                    source: err,
                })
            })?;
        return parse_result(Path::new("<stdin>"), &content);
    }

    let path = Path::new(path);
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadResult {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_result(path, &content)
}

fn parse_result(path: &Path, content: &str) -> AppResult<RunResult> {
    serde_json::from_str(content).map_err(|err| {
        AppError::config(ConfigError::ParseResult {
            path: path.to_path_buf(),
            source: err,
        })
    })
}
