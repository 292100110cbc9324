//! Test utilities for loader pipeline tests
//!
//! Provides an isolated vendor tree on disk plus a registry rooted at it.

#![allow(dead_code)]

use std::path::{PathBuf, MAIN_SEPARATOR};
use std::sync::Once;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use autoload::VendorRegistry;

static TRACING: Once = Once::new();

/// Install a test subscriber once per test binary so diagnostics logged
/// through `tracing` show up under `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Test fixture with an isolated base directory and registry
pub struct LoaderFixture {
    /// Temporary base directory hosting the vendor trees
    pub temp_dir: TempDir,
    /// Registry rooted at the temporary base directory
    pub registry: VendorRegistry,
}

impl LoaderFixture {
    /// Create a fixture with the built-in vendor trees present on disk
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        init_tracing();

        let temp_dir = TempDir::new()?;

        std::fs::create_dir_all(temp_dir.path().join("core").join("src"))?;
        std::fs::create_dir_all(temp_dir.path().join("core").join("tests"))?;
        std::fs::create_dir_all(temp_dir.path().join("vendor").join("src"))?;

        let registry = VendorRegistry::with_base_dir(temp_dir.path());

        Ok(Self { temp_dir, registry })
    }

    /// Base-dir-rooted path for `relative` (written with `/`), using the
    /// platform separator
    pub fn path(&self, relative: &str) -> String {
        format!("{}{}", self.registry.base_dir(), platform(relative))
    }

    /// Write a source unit below the base directory, creating parents
    pub fn write_unit(
        &self,
        relative: &str,
        contents: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.temp_dir.path().join(platform(relative));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Rewrite `/`-separated test paths with the platform separator
pub fn platform(relative: &str) -> String {
    relative.replace('/', &MAIN_SEPARATOR.to_string())
}
