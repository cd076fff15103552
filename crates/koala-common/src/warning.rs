//! Style engine warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet that repeats the same bad
//! declaration a thousand times only reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about ignored or unsupported input (prints once per unique message).
///
/// Returns `true` if the warning was printed, `false` if it had already been
/// reported since the last [`clear_warnings`].
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'Q' in box-shadow");
/// ```
#[must_use]
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    // A poisoned set only means another thread panicked mid-insert; the
    // set itself is still usable for deduplication.
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Koala {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call when starting on a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
