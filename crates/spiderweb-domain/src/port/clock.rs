//! Clock and IdGenerator - Time and identity for new records
//!
//! The reaction engine never reads the system clock or invents ids on
//! its own. Tests plug in [`ManualClock`] and [`SequentialIds`].

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::time::Timestamp;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Source of fresh, unique identities
pub trait IdGenerator: Send + Sync {
    /// Produce a new id, e.g. `log-...`
    fn next_id(&self, prefix: &str) -> String;
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn starting_at(at: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(at.as_millis()),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now.load(Ordering::SeqCst))
    }
}

/// Deterministic ids: `prefix-1`, `prefix-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::starting_at(Timestamp::from_millis(1_000));
        clock.advance(250);
        assert_eq!(clock.now(), Timestamp::from_millis(1_250));
    }

    #[test]
    fn test_sequential_ids_share_one_counter() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id("log"), "log-1");
        assert_eq!(ids.next_id("lead"), "lead-2");
    }
}
