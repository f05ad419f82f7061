//! Last-issued-wins result application.
//!
//! A view issues at most one live store query at a time, but a slow
//! response can still arrive after a newer query has completed. The
//! ordering rule is last-issued-wins: results are applied in ticket
//! order, not arrival order. Tickets come from a monotonically
//! increasing sequence taken at issue time and are compared at the
//! point the result is applied, not ad hoc boolean flags.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Holds the newest committed value for one view.
#[derive(Debug, Default)]
pub struct LatestWins<T> {
    seq: AtomicU64,
    slot: RwLock<Option<(u64, T)>>,
}

impl<T: Clone> LatestWins<T> {
    /// Create an empty holder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
            slot: RwLock::new(None),
        }
    }

    /// Take a ticket for a query about to be issued. Tickets are
    /// strictly increasing; a later `begin` always outranks an
    /// earlier one.
    pub fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a result carrying `ticket`. Returns whether the value
    /// was stored: a result from a superseded ticket is discarded so
    /// it can never overwrite state produced by a newer query.
    pub fn commit(&self, ticket: u64, value: T) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some((stored, _)) if *stored >= ticket => false,
            _ => {
                *slot = Some((ticket, value));
                true
            }
        }
    }

    /// The newest committed value, if any.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|(_, value)| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase_monotonically() {
        let live: LatestWins<u32> = LatestWins::new();
        let a = live.begin();
        let b = live.begin();
        assert!(b > a);
    }

    #[test]
    fn stale_result_cannot_overwrite_newer_state() {
        let live: LatestWins<&str> = LatestWins::new();
        let old_ticket = live.begin();
        let new_ticket = live.begin();

        // The newer query's response lands first.
        assert!(live.commit(new_ticket, "new"));
        // The stale response arrives late and is discarded.
        assert!(!live.commit(old_ticket, "old"));
        assert_eq!(live.current(), Some("new"));
    }

    #[test]
    fn in_order_commits_apply_normally() {
        let live: LatestWins<u32> = LatestWins::new();
        let first = live.begin();
        assert!(live.commit(first, 1));
        let second = live.begin();
        assert!(live.commit(second, 2));
        assert_eq!(live.current(), Some(2));
    }

    #[test]
    fn duplicate_commit_for_same_ticket_is_rejected() {
        let live: LatestWins<u32> = LatestWins::new();
        let ticket = live.begin();
        assert!(live.commit(ticket, 1));
        assert!(!live.commit(ticket, 2));
        assert_eq!(live.current(), Some(1));
    }
}
