use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use janseva_types::{ComplaintId, Department};

/// Mints complaint identifiers of the form `<PREFIX><millis6><seq3>`.
///
/// The prefix is the filing department's two-letter tag so an identifier
/// can be traced back to its department. The time suffix alone can
/// collide when two submissions land in the same clock tick, so a
/// process-wide sequence counter is appended; identifiers from one
/// generator are pairwise distinct for the life of the process.
#[derive(Debug, Default)]
pub struct ComplaintIdGenerator {
    seq: AtomicU64,
}

impl ComplaintIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&self, department: Department, now: DateTime<Utc>) -> ComplaintId {
        let millis = now.timestamp_millis().rem_euclid(1_000_000);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) % 1_000;
        ComplaintId::new(format!("{}{:06}{:03}", department.prefix(), millis, seq))
    }
}
