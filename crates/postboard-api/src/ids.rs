//! Id synthesis for created posts.
//!
//! The demo backend never persists writes and echoes the same id for every
//! `POST`, so the client assigns its own key. The generator is injected so
//! tests can supply a deterministic sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Produces ids for newly created posts.
///
/// Implementations must never hand out the same id twice within a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Millisecond-timestamp ids, forced strictly increasing.
///
/// Two calls within the same millisecond get `last + 1` rather than a repeat.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Plain counter starting at a fixed value.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ids_strictly_increase() {
        let ids = TimestampIds::new();
        let mut prev = ids.next_id();
        for _ in 0..1_000 {
            let id = ids.next_id();
            assert!(id > prev, "{id} should be greater than {prev}");
            prev = id;
        }
    }

    #[test]
    fn timestamp_ids_track_wall_clock() {
        let before = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = TimestampIds::new().next_id();
        assert!(id >= before);
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let ids = SequentialIds::starting_at(1000);
        assert_eq!(ids.next_id(), 1000);
        assert_eq!(ids.next_id(), 1001);
        assert_eq!(ids.next_id(), 1002);
    }
}
