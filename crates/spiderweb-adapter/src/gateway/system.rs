//! System clock and id generator

use chrono::Utc;
use uuid::Uuid;

use spiderweb_domain::{Clock, IdGenerator, Timestamp};

/// Wall clock in Unix milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        Timestamp::from_millis(millis)
    }
}

/// `<prefix>-<uuid v4>` ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}
