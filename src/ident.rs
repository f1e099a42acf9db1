//! Identifier generation
//!
//! Ids keep the external shape of a millisecond timestamp (a decimal
//! string) but are strictly increasing within a process, so a burst of
//! requests never yields duplicates.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Monotonic numeric-string id source shared by the mock collaborators
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id: the current wall clock in milliseconds, bumped past the
    /// previously issued id when the clock has not advanced.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(0);
        now.max(prev + 1).to_string()
    }
}
