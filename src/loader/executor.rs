//! Pluggable unit execution
//!
//! Dynamic execution of a source unit is runtime-specific, so the loader
//! only carries the contract "given a path, obtain a value". The host
//! supplies the executor; a unit may both register a definition with the
//! host as a side effect and yield a return value.

use std::path::Path;

use crate::error::LoaderError;

/// Host-supplied capability that turns a source unit into a value
pub trait UnitExecutor {
    /// Value produced by executing a unit.
    ///
    /// Callers must not assume the value is non-empty; side effects on
    /// the host runtime are equally legitimate outcomes.
    type Value;

    /// Execute the unit at `path` and return its produced value.
    ///
    /// The path is guaranteed to exist when called through
    /// [`Loader::load`](crate::loader::Loader::load).
    fn execute(&self, path: &Path) -> Result<Self::Value, LoaderError>;
}

impl<E: UnitExecutor + ?Sized> UnitExecutor for &E {
    type Value = E::Value;

    fn execute(&self, path: &Path) -> Result<Self::Value, LoaderError> {
        (**self).execute(path)
    }
}

/// Executor that yields the unit's text without interpreting it
///
/// Stands in where the host runtime performs its own evaluation on the
/// returned text, and serves as the default executor in tests.
#[derive(Debug, Default)]
pub struct SourceFileExecutor;

impl UnitExecutor for SourceFileExecutor {
    type Value = String;

    fn execute(&self, path: &Path) -> Result<String, LoaderError> {
        std::fs::read_to_string(path).map_err(|e| {
            LoaderError::ExecutionFailed(format!(
                "Failed to read source unit {}: {}",
                path.display(),
                e
            ))
        })
    }
}
