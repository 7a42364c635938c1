//! Bounded log of recent shop activity.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of entries a shop keeps by default.
pub const DEFAULT_CAPACITY: usize = 5;

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

/// Fixed-capacity FIFO of human-readable activity messages.
///
/// When full, enqueueing drops the oldest entry.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ActivityLog {
    /// Create an empty log holding at most `capacity` entries.
    ///
    /// Storage grows with the entries actually recorded, not with `capacity`.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record a message, evicting the oldest entry if the log is full.
    pub fn enqueue(&mut self, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            message: message.into(),
            recorded_at: Utc::now(),
        });
    }

    /// Messages, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Messages, newest first.
    pub fn recent_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(|e| e.message.as_str())
    }

    /// Timestamped entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
