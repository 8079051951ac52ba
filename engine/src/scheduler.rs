//! Deferred settle queue.
//!
//! Wheel and scratch payouts land a fixed delay after the action that earned
//! them. This module holds those pending mutations between the action and the
//! host's next [`drain_due`](SettleQueue::drain_due) call.
//!
//! ## Semantics
//! - Schedule-once: every entry fires exactly once.
//! - Non-cancellable: there is no removal API; a scheduled payout always
//!   lands, even if the card that earned it has since been discarded.
//! - Deterministic clock: entries compare against the `now_ms` the host
//!   passes in; the queue never reads wall-clock time.
//!
//! Due entries drain in due-time order; ties fire in schedule order.

/// A deferred mutation to apply when its due time passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Credit a wheel prize (drawn at settle time) and return the wheel to
    /// idle.
    WheelPayout,
    /// Credit a revealed card's prize. The base prize is captured at reveal
    /// so a later batch replacement cannot void it.
    CardPayout { card_id: u64, base_prize: u64 },
}

/// A scheduled settle with its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSettle {
    pub due_at_ms: u64,
    pub settle: Settle,
    seq: u64,
}

/// One-shot delayed-mutation queue.
#[derive(Clone, Debug, Default)]
pub struct SettleQueue {
    pending: Vec<PendingSettle>,
    next_seq: u64,
}

impl SettleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a settle to fire once `now_ms` reaches `due_at_ms`.
    pub fn schedule(&mut self, due_at_ms: u64, settle: Settle) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingSettle {
            due_at_ms,
            settle,
            seq,
        });
    }

    /// Remove and return every entry due at `now_ms`, in firing order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<PendingSettle> {
        let mut due = Vec::new();
        let mut rest = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.due_at_ms <= now_ms {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.pending = rest;
        due.sort_by_key(|entry| (entry.due_at_ms, entry.seq));
        due
    }

    /// Due time of the earliest pending entry, if any.
    pub fn next_due_at(&self) -> Option<u64> {
        self.pending.iter().map(|entry| entry.due_at_ms).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
