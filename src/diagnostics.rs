//! Recoverable diagnostics
//!
//! Notices and warnings that are observable by tests and tooling but never
//! interrupt control flow. The registry buffers them as structured values;
//! each emission is also logged through `tracing`.

use std::fmt;
use std::path::MAIN_SEPARATOR;

/// A recoverable, non-fatal diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Configuration notice: a vendor was registered with a source path
    /// missing its trailing separator. The path is auto-corrected.
    MissingTrailingSeparator {
        /// Vendor being registered
        vendor: String,
        /// The source path as supplied by the caller
        source_path: String,
    },

    /// Resolution warning: a qualified name carried a vendor segment with
    /// no registry entry. Resolution proceeds with an empty prefix, so the
    /// misconfiguration surfaces at load time with a clearer error.
    UnrecordedVendor {
        /// The detected vendor segment
        vendor: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingTrailingSeparator { source_path, .. } => {
                write!(
                    f,
                    "Vendor source path must end with `{}`: {}",
                    MAIN_SEPARATOR, source_path
                )
            }
            Diagnostic::UnrecordedVendor { vendor } => {
                write!(f, "Detected vendor `{}` was not recorded", vendor)
            }
        }
    }
}
