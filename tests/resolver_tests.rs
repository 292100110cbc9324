//! Class path resolution tests
//!
//! Covers both naming conventions, the vendor prefix, and the degraded
//! path taken for unrecorded vendors.

mod common;

use autoload::{ClassPathResolver, Diagnostic, LoaderConfig};
use common::{platform, LoaderFixture};

fn vendor_fixture() -> LoaderFixture {
    let fixture = LoaderFixture::new().unwrap();
    assert!(fixture.registry.add_vendor("Vendor", &platform("vendor/src/")));
    fixture
}

#[test]
fn test_class_without_vendor_segment() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path("ClassName"),
        fixture.path("ClassName.src")
    );
    // A single-segment name has no vendor segment, so no warning either
    assert!(fixture.registry.take_diagnostics().is_empty());
}

#[test]
fn test_leading_separator_stripped() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path(r"\ClassName"),
        fixture.path("ClassName.src")
    );
}

#[test]
fn test_registered_vendor_prefix() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    // The vendor segment selects the prefix and stays in the path
    assert_eq!(
        resolver.class_path(r"Vendor\ClassName"),
        fixture.path("vendor/src/Vendor/ClassName.src")
    );
    assert_eq!(
        resolver.class_path(r"\Vendor\ClassName"),
        fixture.path("vendor/src/Vendor/ClassName.src")
    );
}

#[test]
fn test_compound_class_name() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path(r"Vendor\VendorClassName"),
        fixture.path("vendor/src/Vendor/VendorClassName.src")
    );
}

#[test]
fn test_legacy_underscore_convention() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path("Vendor_ClassName"),
        fixture.path("vendor/src/Vendor/ClassName.src")
    );
    assert_eq!(
        resolver.class_path(r"\Vendor_ClassName"),
        fixture.path("vendor/src/Vendor/ClassName.src")
    );
    assert_eq!(
        resolver.class_path("Vendor_VendorClassName"),
        fixture.path("vendor/src/Vendor/VendorClassName.src")
    );
}

#[test]
fn test_both_conventions_resolve_identically() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path(r"Vendor\ClassName"),
        resolver.class_path("Vendor_ClassName")
    );
}

#[test]
fn test_nested_namespace() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path(r"Vendor\Sub\ClassName"),
        fixture.path("vendor/src/Vendor/Sub/ClassName.src")
    );
}

#[test]
fn test_unrecorded_vendor_degrades_with_warning() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    // No vendor prefix inserted; the full segment path roots at base
    assert_eq!(
        resolver.class_path(r"Vendor2\ClassName"),
        fixture.path("Vendor2/ClassName.src")
    );
    assert_eq!(
        fixture.registry.take_diagnostics(),
        vec![Diagnostic::UnrecordedVendor {
            vendor: "Vendor2".to_string(),
        }]
    );
}

#[test]
fn test_registered_vendor_leaves_no_diagnostics() {
    let fixture = vendor_fixture();
    let resolver = ClassPathResolver::new(&fixture.registry);

    resolver.class_path(r"Vendor\ClassName");
    assert!(fixture.registry.take_diagnostics().is_empty());
}

#[test]
fn test_default_vendor_resolution() {
    let fixture = LoaderFixture::new().unwrap();
    let resolver = ClassPathResolver::new(&fixture.registry);

    assert_eq!(
        resolver.class_path(r"Core\Sample"),
        fixture.path("core/src/Core/Sample.src")
    );
    assert_eq!(
        resolver.class_path(r"CoreTests\Loader\SampleTest"),
        fixture.path("core/tests/CoreTests/Loader/SampleTest.src")
    );
}

#[test]
fn test_configured_source_suffix() {
    let fixture = vendor_fixture();
    let config = LoaderConfig {
        source_suffix: ".unit".to_string(),
        ..LoaderConfig::default()
    };
    let resolver = ClassPathResolver::from_config(&fixture.registry, &config);

    assert_eq!(
        resolver.class_path(r"Vendor\ClassName"),
        fixture.path("vendor/src/Vendor/ClassName.unit")
    );
}
