//! Source-unit loading
//!
//! Existence check and dynamic execution of resolved source units.

pub mod executor;
#[allow(clippy::module_inception)]
pub mod loader;

pub use executor::{SourceFileExecutor, UnitExecutor};
pub use loader::Loader;
