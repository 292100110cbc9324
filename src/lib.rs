//! Autoload - vendor-aware source-unit loading
//!
//! Resolves a fully-qualified type name to the source file that defines
//! it, across multiple independently-rooted code trees ("vendors"), and
//! executes that file through a host-supplied executor to bring the type
//! into existence at runtime.
//!
//! ## Architecture
//!
//! Three components, loaded bottom-up:
//!
//! 1. [`VendorRegistry`] - process-wide mapping from vendor name to its
//!    source root and derived paths
//! 2. [`ClassPathResolver`] - turns a qualified name into a deterministic
//!    absolute file path using the registry
//! 3. [`Loader`] - checks existence of the resolved path and delegates
//!    execution to a pluggable [`UnitExecutor`]
//!
//! Qualified names may use either the hierarchical `\` separator or the
//! legacy flat convention where `_` separates segments; both normalize to
//! the same path. Recoverable notices and warnings flow through an
//! explicit [`Diagnostic`] channel on the registry and never interrupt
//! control flow; only a missing source unit is fatal for a load call.
//!
//! ```no_run
//! use autoload::{ClassPathResolver, Loader, SourceFileExecutor, VendorRegistry};
//!
//! let registry = VendorRegistry::with_base_dir("/srv/app");
//! registry.add_vendor("Vendor", "vendor/src/");
//!
//! let loader = Loader::new(ClassPathResolver::new(&registry), SourceFileExecutor);
//! let value = loader.load(r"Vendor\ClassName")?;
//! # Ok::<(), autoload::LoaderError>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use config::LoaderConfig;
pub use diagnostics::Diagnostic;
pub use error::LoaderError;
pub use loader::{Loader, SourceFileExecutor, UnitExecutor};
pub use registry::VendorRegistry;
pub use resolver::ClassPathResolver;
