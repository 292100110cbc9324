//! Loader implementation
//!
//! Each load is an independent resolve-check-execute sequence: resolve
//! the class path, verify a source unit exists there, hand the path to
//! the executor. No caching of loaded paths, no retries, no fallback
//! roots; a missing unit is fatal for the call.

use std::path::Path;
use tracing::{debug, info};

use crate::error::LoaderError;
use crate::loader::executor::UnitExecutor;
use crate::resolver::ClassPathResolver;

/// Loads source units for qualified names
///
/// Stateless between calls; all shared state lives in the registry the
/// resolver consults.
#[derive(Debug)]
pub struct Loader<'a, E> {
    resolver: ClassPathResolver<'a>,
    executor: E,
}

impl<'a, E: UnitExecutor> Loader<'a, E> {
    /// Create a loader over a resolver and a host-supplied executor
    pub fn new(resolver: ClassPathResolver<'a>, executor: E) -> Self {
        Self { resolver, executor }
    }

    /// Resolve `qualified`, verify the source unit exists, execute it and
    /// return its produced value.
    ///
    /// Fails with [`LoaderError::UnitNotFound`] when no file exists at
    /// the resolved path; executor failures propagate unchanged.
    pub fn load(&self, qualified: &str) -> Result<E::Value, LoaderError> {
        let path = self.resolver.class_path(qualified);
        if !Path::new(&path).is_file() {
            return Err(LoaderError::UnitNotFound {
                class: qualified.to_string(),
                path,
            });
        }

        debug!("Executing source unit at {}", path);
        let value = self.executor.execute(Path::new(&path))?;
        info!("Loaded class {}", qualified);
        Ok(value)
    }
}
