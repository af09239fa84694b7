//! Bounded MPMC queue with ticket-ordered publication
//!
//! The queue is a ring of nullable slots and six counters:
//!
//! - `size_upper_bound` counts slots that are full, being written, or reserved
//!   for writing. Pushes are admitted while it stays within capacity.
//! - `size_lower_bound` counts published elements not yet claimed by a pop.
//!   Pops are admitted while it stays non-negative.
//! - `back` (lead/trail) hands out write tickets and records publication.
//! - `front` (lead/trail) hands out read tickets and records release.
//!
//! A push is admitted, draws a ticket, writes its slot, then waits until all
//! smaller tickets have published before publishing its own. Elements become
//! visible in exactly the order their tickets were drawn, no matter how long
//! each write takes. Pops mirror this on the front edge.
//!
//! The cost is that a thread stalled between drawing a ticket and finishing
//! it holds up every later ticket on that side. Only the admission phase can
//! time out.

use std::fmt;

use tracing::{debug, trace};

use crate::arch::{round_up_to_power_of_2, Spinner, MAX_CAPACITY};
use crate::common::{Bound, Edge};
use crate::config::QueueBuilder;
use crate::error::{QueueError, TryPushError};
use crate::slot::Slot;

/// A fixed-capacity lock-free FIFO queue for any number of producers and
/// consumers.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use ticket_queue_rs::TicketQueue;
///
/// let queue = Arc::new(TicketQueue::<u32>::new(4).unwrap());
///
/// let producer = {
///     let queue = Arc::clone(&queue);
///     thread::spawn(move || {
///         for i in 0..100u32 {
///             queue.push(i);
///         }
///     })
/// };
///
/// for i in 0..100u32 {
///     assert_eq!(queue.pop(), i);
/// }
/// producer.join().unwrap();
/// ```
pub struct TicketQueue<T> {
    size_upper_bound: Bound,
    size_lower_bound: Bound,
    back: Edge,
    front: Edge,
    buffer: Box<[Slot<T>]>,
    /// `buffer.len() - 1`; the length is a power of 2
    mask: usize,
    yield_interval: u32,
}

impl<T> TicketQueue<T> {
    /// Creates a queue holding at least `capacity` elements.
    ///
    /// The capacity is rounded up to a power of 2 so that ring positions stay
    /// correct when the ticket counters wrap.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Self::builder(capacity).build()
    }

    /// Starts a [`QueueBuilder`] for a queue of at least `capacity` elements
    pub fn builder(capacity: usize) -> QueueBuilder<T> {
        QueueBuilder::new(capacity)
    }

    pub(crate) fn from_builder(builder: QueueBuilder<T>) -> Result<Self, QueueError> {
        let requested = builder.capacity;
        if requested == 0 {
            return Err(QueueError::CapacityZero);
        }
        if requested > MAX_CAPACITY {
            return Err(QueueError::CapacityTooLarge {
                requested,
                max: MAX_CAPACITY,
            });
        }

        let capacity = round_up_to_power_of_2(requested);
        let buffer: Box<[Slot<T>]> = (0..capacity).map(|_| Slot::empty()).collect();

        debug!(
            requested,
            capacity,
            yield_interval = builder.yield_interval,
            "created ticket queue"
        );

        Ok(Self {
            size_upper_bound: Bound::new(),
            size_lower_bound: Bound::new(),
            back: Edge::new(),
            front: Edge::new(),
            buffer,
            mask: capacity - 1,
            yield_interval: builder.yield_interval,
        })
    }

    /// Pushes `value`, spinning while the queue is full.
    pub fn push(&self, value: T) {
        let mut spinner = self.spinner();
        while !self.size_upper_bound.try_acquire_upper(self.limit()) {
            spinner.spin();
        }
        self.push_impl(value);
    }

    /// Pushes `value` if room opens up within `1 + max_attempts` admission
    /// attempts. On failure nothing has changed and the value is returned
    /// inside the error.
    pub fn try_push(&self, value: T, max_attempts: u16) -> Result<(), TryPushError<T>> {
        let mut spinner = self.spinner();
        let mut attempt: u16 = 0;
        while !self.size_upper_bound.try_acquire_upper(self.limit()) {
            if attempt == max_attempts {
                trace!(max_attempts, "push not admitted");
                return Err(TryPushError::timeout(value, max_attempts));
            }
            attempt += 1;
            spinner.spin();
        }
        self.push_impl(value);
        Ok(())
    }

    /// Pops the oldest element, spinning while the queue is empty.
    pub fn pop(&self) -> T {
        let mut spinner = self.spinner();
        while !self.size_lower_bound.try_acquire_lower() {
            spinner.spin();
        }
        self.pop_impl()
    }

    /// Pops the oldest element if one is published within `1 + max_attempts`
    /// admission attempts.
    pub fn try_pop(&self, max_attempts: u16) -> Option<T> {
        let mut spinner = self.spinner();
        let mut attempt: u16 = 0;
        while !self.size_lower_bound.try_acquire_lower() {
            if attempt == max_attempts {
                trace!(max_attempts, "pop not admitted");
                return None;
            }
            attempt += 1;
            spinner.spin();
        }
        Some(self.pop_impl())
    }

    /// Upper bound on the number of elements held.
    ///
    /// Counts slots reserved by in-flight pushes and can read above
    /// [`capacity`](Self::capacity) while pushes race for admission. Not
    /// linearizable; use it for telemetry only.
    pub fn size(&self) -> usize {
        self.size_upper_bound.load().max(0) as usize
    }

    /// Whether no published element is waiting to be claimed.
    ///
    /// A heuristic: the answer may be stale by the time it is returned.
    pub fn is_empty(&self) -> bool {
        self.size_lower_bound.load() <= 0
    }

    /// Fixed capacity, after rounding up to a power of 2
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Idle spin iterations between scheduler yields while waiting
    pub fn yield_interval(&self) -> u32 {
        self.yield_interval
    }

    #[inline]
    fn limit(&self) -> isize {
        // capacity <= MAX_CAPACITY < isize::MAX
        self.buffer.len() as isize
    }

    #[inline]
    fn spinner(&self) -> Spinner {
        Spinner::new(self.yield_interval)
    }

    #[inline]
    fn slot(&self, ticket: usize) -> &Slot<T> {
        &self.buffer[ticket & self.mask]
    }

    fn push_impl(&self, value: T) {
        let ticket = self.back.reserve();

        // Safety: admission on the upper bound keeps at most `capacity` write
        // reservations outstanding, and the slot was released by the pop that
        // returned its upper-bound unit, so this thread is its only writer.
        unsafe { self.slot(ticket).construct(value) };

        self.back.advance_after(ticket, &mut self.spinner());
        self.size_lower_bound.increment();
    }

    fn pop_impl(&self) -> T {
        let ticket = self.front.reserve();

        // Safety: admission on the lower bound means the push holding this
        // ticket has already published, and no other pop holds it.
        let value = unsafe { self.slot(ticket).release() };

        self.front.advance_after(ticket, &mut self.spinner());
        self.size_upper_bound.decrement();
        value
    }
}

impl<T> fmt::Debug for TicketQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketQueue")
            .field("capacity", &self.capacity())
            .field("size_upper_bound", &self.size_upper_bound.load())
            .field("size_lower_bound", &self.size_lower_bound.load())
            .field("pushes_in_flight", &self.back.in_flight())
            .field("pops_in_flight", &self.front.in_flight())
            .finish()
    }
}
