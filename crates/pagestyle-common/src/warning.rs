//! Style warnings with colored terminal output.
//!
//! Provides deduplication so that a value decoded for every element of a
//! page does not print the same fallback warning hundreds of times.
//! Used when a keyword falls back to its default or a color cannot be
//! normalized.
//!
//! The set of printed messages holds at most [`MAX_TRACKED_WARNINGS`]
//! entries. Once full, new messages are dropped unprinted after a single
//! notice, until [`clear_warnings`] empties it.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Distinct messages remembered before further warnings are suppressed.
pub const MAX_TRACKED_WARNINGS: usize = 256;

/// Global log of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<WarningLog>> = Mutex::new(None);

/// What happened to a message offered to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// First sighting, print it.
    New,
    /// Already printed.
    Repeated,
    /// Log is full; `first` is set for the first dropped message.
    Dropped { first: bool },
}

/// Deduplicated messages, at most `capacity` of them.
#[derive(Debug)]
struct WarningLog {
    seen: HashSet<String>,
    capacity: usize,
    saturated: bool,
}

impl WarningLog {
    fn new(capacity: usize) -> Self {
        Self {
            seen: HashSet::new(),
            capacity,
            saturated: false,
        }
    }

    fn record(&mut self, key: String) -> Entry {
        if self.seen.contains(&key) {
            Entry::Repeated
        } else if self.seen.len() < self.capacity {
            let _ = self.seen.insert(key);
            Entry::New
        } else {
            let first = !self.saturated;
            self.saturated = true;
            Entry::Dropped { first }
        }
    }

    fn clear(&mut self) {
        self.seen.clear();
        self.saturated = false;
    }
}

/// Record a warning in the global log.
fn record(key: String) -> Entry {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(|| WarningLog::new(MAX_TRACKED_WARNINGS))
        .record(key)
}

/// Warn about a value that fell back to a default (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("easing", "unknown easing 'wobble', using 'ease'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    match record(format!("[{component}] {message}")) {
        Entry::New => eprintln!("{}", format!("[pagestyle {component}] ⚠ {message}").yellow()),
        Entry::Dropped { first: true } => {
            eprintln!("{}", "[pagestyle] ⚠ too many warnings, suppressing the rest".yellow());
        }
        Entry::Repeated | Entry::Dropped { first: false } => {}
    }
}

/// Returns `true` if `warn_once` has already printed this exact message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|log| log.seen.contains(&format!("[{component}] {message}")))
}

/// Clear all recorded warnings (call between independent documents)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(log) = guard.as_mut() {
        log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test", "first sighting");
        assert!(was_warned("test", "first sighting"));
        assert!(!was_warned("test", "never printed"));
    }

    #[test]
    fn test_record_deduplicates() {
        let mut log = WarningLog::new(4);
        assert_eq!(log.record("[dedup] message".to_string()), Entry::New);
        assert_eq!(log.record("[dedup] message".to_string()), Entry::Repeated);
    }

    #[test]
    fn test_log_stops_growing_at_capacity() {
        let mut log = WarningLog::new(2);
        assert_eq!(log.record("a".to_string()), Entry::New);
        assert_eq!(log.record("b".to_string()), Entry::New);
        assert_eq!(log.record("c".to_string()), Entry::Dropped { first: true });
        assert_eq!(log.record("d".to_string()), Entry::Dropped { first: false });
        assert_eq!(log.record("a".to_string()), Entry::Repeated);
        assert_eq!(log.seen.len(), 2);
        assert!(!log.seen.contains("c"));

        log.clear();
        assert_eq!(log.record("c".to_string()), Entry::New);
    }
}
