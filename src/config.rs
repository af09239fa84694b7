//! Construction settings for [`TicketQueue`]

use std::marker::PhantomData;

use crate::arch::DEFAULT_YIELD_INTERVAL;
use crate::error::QueueError;
use crate::ticket_queue::TicketQueue;

/// Builder for a [`TicketQueue`]
///
/// ```
/// use ticket_queue_rs::TicketQueue;
///
/// let queue = TicketQueue::<u64>::builder(100)
///     .yield_interval(64)
///     .build()
///     .unwrap();
/// assert_eq!(queue.capacity(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct QueueBuilder<T> {
    pub(crate) capacity: usize,
    pub(crate) yield_interval: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> QueueBuilder<T> {
    /// Builder for a queue of at least `capacity` elements with default settings
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            yield_interval: DEFAULT_YIELD_INTERVAL,
            _marker: PhantomData,
        }
    }

    /// Requested capacity, rounded up to a power of 2 on build
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Idle spin iterations between scheduler yields while a push or pop
    /// waits for its turn. Values below 1 are treated as 1.
    ///
    /// Lower values suit runs with more threads than cores.
    pub fn yield_interval(mut self, iterations: u32) -> Self {
        self.yield_interval = iterations.max(1);
        self
    }

    /// Validates the capacity and allocates the queue
    pub fn build(self) -> Result<TicketQueue<T>, QueueError> {
        TicketQueue::from_builder(self)
    }
}
