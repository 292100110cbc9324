//! Vendor registry
//!
//! Process-wide mapping from vendor name to its source root and the
//! paths derived from it.

pub mod vendors;

pub use vendors::{global, VendorRegistry};
