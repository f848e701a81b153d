//! # Search Sequencer
//!
//! Orders overlapping searches. Each search takes a ticket; a result is
//! applied only if its ticket is the newest issued and newer than whatever
//! was applied last, so a slow early response can never overwrite a fast
//! later one.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tickets plus the last applied result.
#[derive(Debug, Default)]
pub struct SearchSequencer<T> {
    issued: AtomicU64,
    applied: Mutex<(u64, T)>,
}

impl<T: Clone + Default> SearchSequencer<T> {
    /// Empty sequencer.
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            applied: Mutex::new((0, T::default())),
        }
    }

    /// Take the next ticket, superseding every earlier one.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the newest.
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }

    /// Apply `value` if `ticket` is still the newest. Returns whether it was.
    pub fn offer(&self, ticket: u64, value: T) -> bool {
        let mut applied = self.applied.lock();
        if ticket > applied.0 && self.is_latest(ticket) {
            *applied = (ticket, value);
            true
        } else {
            false
        }
    }

    /// Supersede pending work and drop the applied value.
    pub fn reset(&self) {
        let ticket = self.issue();
        *self.applied.lock() = (ticket, T::default());
    }

    /// Last applied value.
    pub fn current(&self) -> T {
        self.applied.lock().1.clone()
    }

    /// Ticket of the last applied value.
    pub fn applied_ticket(&self) -> u64 {
        self.applied.lock().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_applies() {
        let seq: SearchSequencer<Vec<u32>> = SearchSequencer::new();
        let t1 = seq.issue();
        let t2 = seq.issue();

        assert!(seq.offer(t2, vec![2]));
        assert!(!seq.offer(t1, vec![1]));
        assert_eq!(seq.current(), vec![2]);
    }

    #[test]
    fn test_older_ticket_rejected_even_before_newer_arrives() {
        let seq: SearchSequencer<Vec<u32>> = SearchSequencer::new();
        let t1 = seq.issue();
        let _t2 = seq.issue();

        assert!(!seq.offer(t1, vec![1]));
        assert!(seq.current().is_empty());
    }

    #[test]
    fn test_reset_supersedes_pending() {
        let seq: SearchSequencer<Vec<u32>> = SearchSequencer::new();
        let t1 = seq.issue();
        seq.reset();
        assert!(!seq.offer(t1, vec![1]));
        assert!(seq.current().is_empty());
    }
}
