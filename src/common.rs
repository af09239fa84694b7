//! Counters shared by the push and pop sides of the queue
//!
//! Every cross-thread handoff in the queue goes through one of these
//! counters, so every read-modify-write is `AcqRel` and every plain load is
//! `Acquire`. Anything weaker lets a consumer observe a published index
//! before the slot contents written under it.

use crossbeam_utils::CachePadded;

use crate::arch::Spinner;
use crate::sync::{AtomicIsize, AtomicUsize};

/// Memory ordering aliases used by the counters
pub(crate) mod ordering {
    pub use std::sync::atomic::Ordering::AcqRel as AR;
    pub use std::sync::atomic::Ordering::Acquire as A;
}

/// An admission counter.
///
/// Increments and decrements are optimistic: a thread moves the bound first
/// and backs the change out if it overshot, so the value can read slightly
/// past its limits while threads race.
pub(crate) struct Bound {
    value: CachePadded<AtomicIsize>,
}

impl Bound {
    pub(crate) fn new() -> Self {
        Self {
            value: CachePadded::new(AtomicIsize::new(0)),
        }
    }

    #[inline]
    pub(crate) fn load(&self) -> isize {
        self.value.load(ordering::A)
    }

    /// Takes one unit of room below `limit`; retracts and returns false if
    /// there was none.
    #[inline]
    pub(crate) fn try_acquire_upper(&self, limit: isize) -> bool {
        if self.value.fetch_add(1, ordering::AR) + 1 > limit {
            self.value.fetch_sub(1, ordering::AR);
            return false;
        }
        true
    }

    /// Takes one unit above zero; retracts and returns false if there was none.
    #[inline]
    pub(crate) fn try_acquire_lower(&self) -> bool {
        if self.value.fetch_sub(1, ordering::AR) - 1 < 0 {
            self.value.fetch_add(1, ordering::AR);
            return false;
        }
        true
    }

    #[inline]
    pub(crate) fn increment(&self) {
        self.value.fetch_add(1, ordering::AR);
    }

    #[inline]
    pub(crate) fn decrement(&self) {
        self.value.fetch_sub(1, ordering::AR);
    }
}

/// The leading and trailing edge of one side of the ring.
///
/// `lead` hands out tickets; `trail` counts tickets whose work is done.
/// Tickets finish strictly in the order they were handed out.
pub(crate) struct Edge {
    lead: CachePadded<AtomicUsize>,
    trail: CachePadded<AtomicUsize>,
}

impl Edge {
    pub(crate) fn new() -> Self {
        Self::starting_at(0)
    }

    /// Both edges start at `ticket`, as if that many operations had already
    /// finished.
    pub(crate) fn starting_at(ticket: usize) -> Self {
        Self {
            lead: CachePadded::new(AtomicUsize::new(ticket)),
            trail: CachePadded::new(AtomicUsize::new(ticket)),
        }
    }

    /// Draws the next ticket. Wraps at `usize::MAX`.
    #[inline]
    pub(crate) fn reserve(&self) -> usize {
        self.lead.fetch_add(1, ordering::AR)
    }

    /// Waits until every smaller ticket has finished, then finishes `ticket`.
    ///
    /// Cannot be abandoned: later tickets wait on this one.
    #[inline]
    pub(crate) fn advance_after(&self, ticket: usize, spinner: &mut Spinner) {
        while self.trail.load(ordering::A) != ticket {
            spinner.spin();
        }
        self.trail.fetch_add(1, ordering::AR);
    }

    /// Tickets drawn but not yet finished
    #[inline]
    pub(crate) fn in_flight(&self) -> usize {
        let trail = self.trail.load(ordering::A);
        self.lead.load(ordering::A).wrapping_sub(trail)
    }
}
