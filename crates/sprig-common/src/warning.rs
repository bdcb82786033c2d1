//! Builder warnings with colored terminal output.
//!
//! Provides deduplication so a selector that is built repeatedly does not
//! repeat the same complaint. Used by the selector builder to report input
//! it had to skip or reinterpret.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // The set only ever grows or is cleared, so a poisoned guard is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about degraded input (prints once per unique message)
///
/// # Example
/// ```
/// sprig_common::warning::warn_once("Selector", "skipped unrecognized input \"!\"");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{YELLOW}[Sprig {component}] ⚠ {message}{RESET}");
    }
}

/// Whether `message` has already been printed for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings so they are printed again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
