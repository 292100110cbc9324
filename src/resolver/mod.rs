//! Qualified-name resolution
//!
//! Turns a qualified type name into a deterministic filesystem path,
//! consulting the vendor registry for the resolution prefix.

pub mod class_path;
pub mod name;

pub use class_path::ClassPathResolver;
