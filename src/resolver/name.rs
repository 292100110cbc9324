//! Qualified-name normalization
//!
//! Two naming conventions coexist: the hierarchical `\` separator and a
//! legacy flat convention where `_` acts as the segment separator. Both
//! normalize to one canonical segment sequence before any path is built.
//! There is no escaping: every `_` in a name is a separator.

/// Hierarchical separator in qualified names
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Legacy flat-name separator
pub const LEGACY_SEPARATOR: char = '_';

/// Strip at most one leading namespace separator.
pub fn strip_leading_separator(name: &str) -> &str {
    name.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(name)
}

/// Split a qualified name into its canonical segment sequence.
pub fn split_segments(name: &str) -> Vec<&str> {
    strip_leading_separator(name)
        .split([NAMESPACE_SEPARATOR, LEGACY_SEPARATOR])
        .collect()
}

/// The vendor candidate of a qualified name: the prefix up to the first
/// separator of either convention. A single-segment name has no vendor.
pub fn vendor_candidate(name: &str) -> Option<&str> {
    let name = strip_leading_separator(name);
    name.find([NAMESPACE_SEPARATOR, LEGACY_SEPARATOR])
        .map(|idx| &name[..idx])
}
