//! CLI command implementations.

pub mod product;

use std::path::Path;

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input document failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path the command tried to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input document is not valid JSON for the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// Path of the offending document.
        path: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// Encoding the output document failed.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    /// The form failed validation or conversion preconditions.
    #[error(transparent)]
    Validation(#[from] clearlane_catalog::ValidationError),

    /// The payload is internally inconsistent.
    #[error(transparent)]
    Integrity(#[from] clearlane_catalog::DataIntegrityError),
}

/// Read and decode a JSON document.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })
}
