//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `ConfigError`) are defined in their
//! respective crates. Everything converges into `anyhow` in `folio-cli`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, duplicate id, empty title).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document was not valid JSON for the item schema.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
