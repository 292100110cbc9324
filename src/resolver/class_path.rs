//! Class path resolution
//!
//! Maps a qualified name to the absolute path of the source unit that is
//! expected to define it. Resolution is a pure function over the vendor
//! registry; the only mutable effect is recording a resolution warning
//! into the registry's diagnostics buffer when the vendor is unknown.

use std::path::MAIN_SEPARATOR;
use tracing::debug;

use crate::config::LoaderConfig;
use crate::diagnostics::Diagnostic;
use crate::registry::VendorRegistry;
use crate::resolver::name;

/// Resolves qualified names to absolute source-unit paths
#[derive(Debug)]
pub struct ClassPathResolver<'a> {
    registry: &'a VendorRegistry,
    source_suffix: String,
}

impl<'a> ClassPathResolver<'a> {
    /// Create a resolver with the default source suffix
    pub fn new(registry: &'a VendorRegistry) -> Self {
        Self::from_config(registry, &LoaderConfig::default())
    }

    /// Create a resolver with the configured source suffix
    pub fn from_config(registry: &'a VendorRegistry, config: &LoaderConfig) -> Self {
        Self {
            registry,
            source_suffix: config.source_suffix.clone(),
        }
    }

    /// Compute the path of the source unit expected to define `qualified`.
    ///
    /// The vendor segment selects the resolution prefix but is never
    /// removed from the emitted path: `Vendor\Class` with `Vendor`
    /// registered at `vendor/src/` resolves below `vendor/src/Vendor/`.
    ///
    /// An unregistered vendor degrades to an empty prefix plus an
    /// [`UnrecordedVendor`](Diagnostic::UnrecordedVendor) warning; the
    /// returned path will predictably miss on load, which surfaces the
    /// misconfiguration with the loader's clearer error.
    pub fn class_path(&self, qualified: &str) -> String {
        // A registered vendor always has a non-empty source path, so one
        // registry read decides both the prefix and the warning.
        let prefix = match name::vendor_candidate(qualified) {
            Some(vendor) => {
                let prefix = self.registry.get_source_path(vendor);
                if prefix.is_empty() {
                    self.registry.record_diagnostic(Diagnostic::UnrecordedVendor {
                        vendor: vendor.to_string(),
                    });
                }
                prefix
            }
            None => String::new(),
        };

        let relative = name::split_segments(qualified).join(&MAIN_SEPARATOR.to_string());
        let path = format!(
            "{}{}{}{}",
            self.registry.base_dir(),
            prefix,
            relative,
            self.source_suffix
        );
        debug!("Resolved {} -> {}", qualified, path);
        path
    }
}
