//! One-shot timer queue
//!
//! Holds pending deadlines with attached payloads and drains the due ones on
//! each tick. The queue never spawns threads; the host loop decides when time
//! advances, and tests pass an explicit `Instant` for determinism.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    /// Key identifying a pending timer
    pub struct TimerId;
}

struct Entry<T> {
    deadline: Instant,
    // Insertion sequence, breaks ties between equal deadlines
    seq: u64,
    payload: T,
}

/// Cancellable one-shot deadline queue
pub struct TimerQueue<T> {
    entries: SlotMap<TimerId, Entry<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to fire `after` from now
    pub fn schedule(&mut self, after: Duration, payload: T) -> TimerId {
        self.schedule_at(Instant::now() + after, payload)
    }

    /// Schedule `payload` to fire at an absolute deadline
    pub fn schedule_at(&mut self, deadline: Instant, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.entries.insert(Entry {
            deadline,
            seq,
            payload,
        });
        tracing::trace!(
            "TimerQueue::schedule_at - timer {:?} scheduled (pending: {})",
            id,
            self.entries.len()
        );
        id
    }

    /// Cancel a pending timer, returning its payload
    ///
    /// Cancelling an already-fired or already-cancelled timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let payload = self.entries.remove(id).map(|entry| entry.payload);
        if payload.is_some() {
            tracing::trace!("TimerQueue::cancel - timer {:?} cancelled", id);
        }
        payload
    }

    /// Drain every timer due at `now`, in deadline order
    pub fn tick_at(&mut self, now: Instant) -> Vec<T> {
        let mut due: SmallVec<[(Instant, u64, TimerId); 4]> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(id, entry)| (entry.deadline, entry.seq, id))
            .collect();
        due.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        if !due.is_empty() {
            tracing::trace!("TimerQueue::tick_at - firing {} timer(s)", due.len());
        }

        due.into_iter()
            .filter_map(|(_, _, id)| self.entries.remove(id))
            .map(|entry| entry.payload)
            .collect()
    }

    /// Drain every timer due now
    pub fn tick(&mut self) -> Vec<T> {
        self.tick_at(Instant::now())
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|entry| entry.deadline).min()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
