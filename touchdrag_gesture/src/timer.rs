// Copyright 2025 the Touchdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation-tagged timer queue.
//!
//! ## Overview
//!
//! The recognizer schedules delayed work (the drag-initiation window and the
//! long-press window) by pushing entries tagged with the session generation
//! at schedule time. The host polls [`TimerQueue::next_deadline`] and, once
//! that moment has passed, drains due entries.
//!
//! Timers are never explicitly canceled. Invalidation is purely
//! generational: when the session generation moves on (reset, early-movement
//! tap invalidation, tap completion), entries scheduled against the old
//! generation are still returned by [`TimerQueue::pop_due`] but fail the
//! caller's generation comparison and are silently dropped. This keeps
//! cancellation bookkeeping out of the queue entirely.
//!
//! ## Minimal example
//!
//! ```
//! use touchdrag_gesture::timer::{TimerKind, TimerQueue};
//!
//! let mut q = TimerQueue::new();
//! q.schedule(TimerKind::DragInit, 160, 1);
//! q.schedule(TimerKind::ContextMenu, 1000, 1);
//! assert_eq!(q.next_deadline(), Some(160));
//!
//! let t = q.pop_due(200).unwrap();
//! assert_eq!(t.kind, TimerKind::DragInit);
//! // The long-press entry is not due yet.
//! assert!(q.pop_due(200).is_none());
//! ```

use alloc::vec::Vec;

/// What a scheduled timer does when it fires live.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// End of the drag-initiation window: motion may now start a drag.
    DragInit,
    /// End of the long-press window: synthesize `contextmenu`.
    ContextMenu,
}

/// A scheduled timer entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    /// What to do when this fires.
    pub kind: TimerKind,
    /// Absolute deadline, in the host's millisecond timeline.
    pub due: u64,
    /// Session generation at schedule time; compared at fire time.
    pub generation: u64,
}

/// A small host-agnostic queue of generation-tagged timers.
///
/// The gesture layer schedules at most a couple of entries per touch, so a
/// plain vector with linear scans is the whole implementation.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Timer>,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `kind` at absolute time `due`, tagged with `generation`.
    pub fn schedule(&mut self, kind: TimerKind, due: u64, generation: u64) {
        self.entries.push(Timer {
            kind,
            due,
            generation,
        });
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|t| t.due).min()
    }

    /// Remove and return the earliest entry due at or before `now`.
    ///
    /// Entries with equal deadlines come back in schedule order. Returns
    /// `None` when nothing is due; entries scheduled for the future stay
    /// queued.
    pub fn pop_due(&mut self, now: u64) -> Option<Timer> {
        let mut best: Option<usize> = None;
        for (i, t) in self.entries.iter().enumerate() {
            if t.due > now {
                continue;
            }
            match best {
                None => best = Some(i),
                Some(j) if t.due < self.entries[j].due => best = Some(i),
                Some(_) => {}
            }
        }
        best.map(|i| self.entries.remove(i))
    }

    /// Whether any entries are pending (due or not, live or stale).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_has_no_deadline() {
        let mut q = TimerQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
        assert_eq!(q.pop_due(u64::MAX), None);
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::ContextMenu, 1000, 1);
        q.schedule(TimerKind::DragInit, 160, 1);
        assert_eq!(q.next_deadline(), Some(160));
    }

    #[test]
    fn pop_due_returns_entries_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::ContextMenu, 1000, 1);
        q.schedule(TimerKind::DragInit, 160, 1);
        let first = q.pop_due(2000).unwrap();
        let second = q.pop_due(2000).unwrap();
        assert_eq!(first.kind, TimerKind::DragInit);
        assert_eq!(second.kind, TimerKind::ContextMenu);
        assert!(q.is_empty());
    }

    #[test]
    fn future_entries_stay_queued() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::DragInit, 160, 1);
        assert_eq!(q.pop_due(100), None);
        assert!(!q.is_empty());
        assert!(q.pop_due(160).is_some(), "due exactly at the deadline");
    }

    // Equal deadlines: schedule order is preserved.
    #[test]
    fn equal_deadlines_pop_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::ContextMenu, 500, 1);
        q.schedule(TimerKind::DragInit, 500, 1);
        assert_eq!(q.pop_due(500).unwrap().kind, TimerKind::ContextMenu);
        assert_eq!(q.pop_due(500).unwrap().kind, TimerKind::DragInit);
    }

    // The queue itself does not filter stale generations; callers compare.
    #[test]
    fn generations_are_carried_not_filtered() {
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::DragInit, 160, 7);
        let t = q.pop_due(200).unwrap();
        assert_eq!(t.generation, 7);
    }
}
