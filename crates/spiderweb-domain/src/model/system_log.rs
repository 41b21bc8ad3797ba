//! SystemLog - The audit trail of every reaction
//!
//! The log is a bounded ring kept newest-first. Appending past capacity
//! silently drops the oldest entry.

use std::collections::VecDeque;

use super::module::ModuleId;
use super::time::Timestamp;

/// How many entries the dashboard keeps, and the most any ring may hold
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Unique identifier for a log entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogId(String);

impl LogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether an event helped or hurt the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        }
    }
}

/// Audit log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemLog {
    pub id: LogId,
    pub timestamp: Timestamp,
    /// Module the event is attributed to
    pub module: ModuleId,
    /// Human-readable action text
    pub action: String,
    pub details: String,
    pub impact: Impact,
}

impl SystemLog {
    pub fn new(
        id: LogId,
        timestamp: Timestamp,
        module: ModuleId,
        action: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            id,
            timestamp,
            module,
            action: action.into(),
            details: String::new(),
            impact,
        }
    }
}

/// Bounded newest-first ring of log entries
#[derive(Debug, Clone)]
pub struct LogRing {
    entries: VecDeque<SystemLog>,
    capacity: usize,
}

impl LogRing {
    /// Create a new ring holding at most `capacity` entries.
    /// Capacity never exceeds [`DEFAULT_LOG_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(DEFAULT_LOG_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend an entry, dropping the oldest past capacity
    pub fn push(&mut self, entry: SystemLog) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&SystemLog> {
        self.entries.front()
    }

    /// Entry by position, 0 being the newest
    pub fn get(&self, index: usize) -> Option<&SystemLog> {
        self.entries.get(index)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &SystemLog> {
        self.entries.iter()
    }

    /// Get recent entries
    pub fn recent(&self, limit: usize) -> Vec<&SystemLog> {
        self.entries.iter().take(limit).collect()
    }

    /// Count entries by impact
    pub fn stats(&self) -> LogStats {
        let mut stats = LogStats {
            total_entries: self.entries.len(),
            ..LogStats::default()
        };
        for entry in &self.entries {
            match entry.impact {
                Impact::Positive => stats.positive += 1,
                Impact::Negative => stats.negative += 1,
                Impact::Neutral => stats.neutral += 1,
            }
        }
        stats
    }
}

impl Default for LogRing {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

/// Log statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStats {
    pub total_entries: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}
