//! Tests for the deduplicating warning system.

use sprig_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    assert!(!has_warned("Test", "first message"));
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));
}

#[test]
fn test_warn_once_is_keyed_by_component() {
    warn_once("Tokenizer", "shared message");
    assert!(has_warned("Tokenizer", "shared message"));
    assert!(!has_warned("Builder", "shared message"));
}

#[test]
fn test_repeated_warning_is_recorded_once() {
    warn_once("Test", "repeated");
    warn_once("Test", "repeated");
    assert!(has_warned("Test", "repeated"));
}
