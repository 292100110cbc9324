//! Vendor registry implementation
//!
//! Maps vendor names to their source roots and exposes the derived views
//! (`root_dir`, `real_path`) the resolver builds on. The registry is the
//! only mutable state in the pipeline: reads may run concurrently, writes
//! are exclusive, and recoverable diagnostics are buffered here so that
//! the resolver stays a pure function over registry plus filesystem.

use std::collections::HashMap;
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::{Mutex, OnceLock, RwLock};
use tracing::{debug, info, warn};

use crate::config::LoaderConfig;
use crate::diagnostics::Diagnostic;

/// Built-in vendor for the framework's production tree
const CORE_VENDOR: &str = "Core";
/// Built-in vendor for the framework's test tree
const CORE_TESTS_VENDOR: &str = "CoreTests";

static GLOBAL: OnceLock<VendorRegistry> = OnceLock::new();

/// The shared process-wide registry, initialized lazily on first access
/// with the built-in vendors and the current directory as base.
pub fn global() -> &'static VendorRegistry {
    GLOBAL.get_or_init(|| VendorRegistry::with_base_dir("."))
}

/// Vendor registry: vendor name -> relative source path
///
/// Not `Clone`: one registry instance backs all resolution for a given
/// base directory. Production callers share [`global()`]; tests inject an
/// isolated instance built with [`VendorRegistry::with_base_dir`].
#[derive(Debug)]
pub struct VendorRegistry {
    /// Registered vendors. Source paths always end with the platform
    /// separator once stored.
    vendors: RwLock<HashMap<String, String>>,
    /// Buffered recoverable diagnostics, drained by observers
    diagnostics: Mutex<Vec<Diagnostic>>,
    /// Normalized base directory, always ending with the separator
    base_dir: String,
}

impl VendorRegistry {
    /// Create a registry rooted at `base_dir`, pre-populated with the
    /// built-in vendors.
    ///
    /// The base directory is canonicalized when it exists on disk so that
    /// derived paths are stable under symlinks and `.`/`..` components.
    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        let registry = Self {
            vendors: RwLock::new(HashMap::new()),
            diagnostics: Mutex::new(Vec::new()),
            base_dir: normalize_base_dir(base_dir.as_ref()),
        };
        registry.seed_builtin_vendors();
        registry
    }

    /// Create a registry from a loader configuration, registering the
    /// configured extra vendors on top of the built-ins.
    pub fn from_config(config: &LoaderConfig) -> Self {
        let registry = Self::with_base_dir(&config.base_dir);
        registry.add_vendors(&config.vendors);
        registry
    }

    /// Register the framework's own production and test trees.
    ///
    /// Both point into the same top-level directory: a monorepo layout
    /// where production and test code share one package root.
    fn seed_builtin_vendors(&self) {
        let mut vendors = self.write_vendors();
        vendors.insert(
            CORE_VENDOR.to_string(),
            format!("core{sep}src{sep}", sep = MAIN_SEPARATOR),
        );
        vendors.insert(
            CORE_TESTS_VENDOR.to_string(),
            format!("core{sep}tests{sep}", sep = MAIN_SEPARATOR),
        );
        info!("Seeded {} built-in vendors", vendors.len());
    }

    /// Base directory all derived paths are rooted at
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Register a new vendor. First registration wins.
    ///
    /// Returns `false` without touching the registry if `name` is already
    /// present or empty. A source path missing its trailing separator is
    /// stored with one appended and a configuration notice is recorded;
    /// this does not prevent registration.
    pub fn add_vendor(&self, name: &str, source_path: &str) -> bool {
        if name.is_empty() {
            debug!("Rejected vendor registration with empty name");
            return false;
        }

        let mut vendors = self.write_vendors();
        if vendors.contains_key(name) {
            debug!("Vendor {} already registered, keeping first entry", name);
            return false;
        }

        let source_path = self.ensure_trailing_separator(name, source_path);
        debug!("Registered vendor {} -> {}", name, source_path);
        vendors.insert(name.to_string(), source_path);
        true
    }

    /// Register every vendor in `vendors`.
    ///
    /// Each pair goes through [`add_vendor`](Self::add_vendor) logic
    /// independently; a malformed pair is auto-corrected, never fails the
    /// batch. Duplicate names within one call resolve last-write-wins by
    /// virtue of the map type itself.
    pub fn add_vendors(&self, vendors: &HashMap<String, String>) -> bool {
        for (name, source_path) in vendors {
            self.add_vendor(name, source_path);
        }
        true
    }

    /// Remove a vendor. Returns `false` if it was not registered.
    pub fn remove_vendor(&self, name: &str) -> bool {
        let removed = self.write_vendors().remove(name).is_some();
        if removed {
            debug!("Removed vendor {}", name);
        }
        removed
    }

    /// Whether `name` is registered
    pub fn has_vendor(&self, name: &str) -> bool {
        self.read_vendors().contains_key(name)
    }

    /// The raw registered source path, or the empty string if unknown
    pub fn get_source_path(&self, name: &str) -> String {
        self.read_vendors().get(name).cloned().unwrap_or_default()
    }

    /// The vendor's top-level directory: base dir + first segment of the
    /// source path + trailing separator. Empty string if unknown.
    ///
    /// Distinct from the source path, which may point deeper into the
    /// tree (`vendor/src/` vs root dir `vendor/`).
    pub fn get_root_dir(&self, name: &str) -> String {
        let source_path = self.get_source_path(name);
        if source_path.is_empty() {
            return String::new();
        }
        let first_segment = source_path
            .split(MAIN_SEPARATOR)
            .next()
            .unwrap_or_default();
        format!("{}{}{}", self.base_dir, first_segment, MAIN_SEPARATOR)
    }

    /// The canonicalized absolute form of base dir + source path, with a
    /// trailing separator. Empty string if the vendor is unknown or the
    /// path does not exist on disk.
    pub fn get_real_path(&self, name: &str) -> String {
        let source_path = self.get_source_path(name);
        if source_path.is_empty() {
            return String::new();
        }
        let full = format!("{}{}", self.base_dir, source_path);
        match std::fs::canonicalize(&full) {
            Ok(path) => format!("{}{}", path.display(), MAIN_SEPARATOR),
            Err(e) => {
                debug!("Real path unavailable for vendor {} ({}): {}", name, full, e);
                String::new()
            }
        }
    }

    /// Names of all registered vendors, in no particular order
    pub fn vendor_names(&self) -> Vec<String> {
        self.read_vendors().keys().cloned().collect()
    }

    /// Drain the buffered diagnostics
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock_diagnostics())
    }

    /// Buffer a diagnostic and log it
    pub(crate) fn record_diagnostic(&self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.lock_diagnostics().push(diagnostic);
    }

    /// Append the platform separator when missing, recording a notice
    fn ensure_trailing_separator(&self, vendor: &str, source_path: &str) -> String {
        if source_path.ends_with(MAIN_SEPARATOR) {
            return source_path.to_string();
        }
        self.record_diagnostic(Diagnostic::MissingTrailingSeparator {
            vendor: vendor.to_string(),
            source_path: source_path.to_string(),
        });
        format!("{}{}", source_path, MAIN_SEPARATOR)
    }

    fn read_vendors(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.vendors.read().expect("vendor registry lock poisoned")
    }

    fn write_vendors(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.vendors.write().expect("vendor registry lock poisoned")
    }

    fn lock_diagnostics(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .expect("diagnostics buffer lock poisoned")
    }
}

/// Canonicalize where possible and guarantee a trailing separator
fn normalize_base_dir(base_dir: &Path) -> String {
    let base = std::fs::canonicalize(base_dir)
        .unwrap_or_else(|_| base_dir.to_path_buf());
    let mut base = base.display().to_string();
    if !base.ends_with(MAIN_SEPARATOR) {
        base.push(MAIN_SEPARATOR);
    }
    base
}
