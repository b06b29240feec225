//! Loading lint engine results from JSON.
//!
//! Accepts the array-of-file-results shape engines emit for JSON output
//! (`[{"filePath": ..., "messages": [...]}, ...]`). Unknown fields such as
//! per-file counts are ignored.

use crate::types::FileResult;
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {origin}: {source}")]
    Io { origin: String, source: io::Error },
    #[error("failed to parse lint results from {origin}: {source}")]
    Json { origin: String, source: serde_json::Error },
}

/// Parse results from a JSON string. `origin` names the input in errors.
pub fn parse_results(text: &str, origin: &str) -> Result<Vec<FileResult>, InputError> {
    let results: Vec<FileResult> =
        serde_json::from_str(text).map_err(|source| InputError::Json { origin: origin.to_string(), source })?;
    debug!("Parsed {} file results from {}", results.len(), origin);
    Ok(results)
}

/// Read and parse results from any reader.
pub fn read_results<R: Read>(mut reader: R, origin: &str) -> Result<Vec<FileResult>, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|source| InputError::Io { origin: origin.to_string(), source })?;
    parse_results(&text, origin)
}

/// Load results from `path`, or from stdin when `path` is `None`.
pub fn load_results(path: Option<&Path>) -> Result<Vec<FileResult>, InputError> {
    match path {
        Some(path) => {
            let origin = path.display().to_string();
            let file = File::open(path).map_err(|source| InputError::Io { origin: origin.clone(), source })?;
            read_results(BufReader::new(file), &origin)
        }
        None => read_results(io::stdin().lock(), "stdin"),
    }
}
