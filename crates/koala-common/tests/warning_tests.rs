//! Tests for warning deduplication.

use koala_common::warning::warn_once;

#[test]
fn test_warn_once_deduplicates_identical_messages() {
    assert!(warn_once("Test", "dedup: unsupported unit 'furlong'"));
    assert!(!warn_once("Test", "dedup: unsupported unit 'furlong'"));
}

#[test]
fn test_warn_once_keys_on_component() {
    assert!(warn_once("Selector", "keyed: same message"));
    assert!(warn_once("Grammar", "keyed: same message"));
}
