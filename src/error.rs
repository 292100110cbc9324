//! Loader error types
//!
//! Fatal failures of the resolve-check-execute pipeline. Recoverable
//! notices and warnings live in [`crate::diagnostics`] instead.

use thiserror::Error;

/// Errors raised while loading a source unit
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The resolved path does not exist on disk.
    ///
    /// Fatal for the load call: no retry, no alternate roots. Names both
    /// the qualified name and the computed path to aid diagnosis.
    #[error("No source unit found for class `{class}` with the path `{path}`")]
    UnitNotFound {
        /// Qualified name the caller asked for
        class: String,
        /// Path the resolver computed for it
        path: String,
    },

    #[error("Unit execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid loader configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        LoaderError::ExecutionFailed(e.to_string())
    }
}

impl From<anyhow::Error> for LoaderError {
    fn from(e: anyhow::Error) -> Self {
        LoaderError::ExecutionFailed(e.to_string())
    }
}
