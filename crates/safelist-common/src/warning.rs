//! Policy warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when merging features produces a result the caller may not expect,
//! such as one feature overriding another feature's enforced value.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a policy conflict (prints once per unique message)
///
/// # Example
/// ```
/// safelist_common::warning::warn_once("Whitelist", "enforced a.rel overridden");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(&format!("[{component}] {message}")) {
        eprintln!("{}", format!("[safelist {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before building a new policy)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Record `key`, returning `true` the first time it is seen.
fn record(key: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key.to_string())
}
