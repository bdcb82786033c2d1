//! Clearing lives in its own test binary so it cannot race the
//! deduplication tests, which share the process-wide warning set.

use sprig_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_messages() {
    warn_once("Clear", "to be cleared");
    assert!(has_warned("Clear", "to be cleared"));

    clear_warnings();
    assert!(!has_warned("Clear", "to be cleared"));

    warn_once("Clear", "to be cleared");
    assert!(has_warned("Clear", "to be cleared"));
}
