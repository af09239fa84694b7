//! # ticket_queue_rs
//!
//! A bounded lock-free multiple-producer-multiple-consumer queue built from
//! plain atomic counters and a ring buffer of nullable slots.
//!
//! Producers and consumers draw tickets with fetch-and-add and finish in
//! ticket order, so elements are consumed in exactly the order their pushes
//! reserved a slot. No mutexes or compare-and-swap loops are involved; waits
//! are bounded spin loops that yield to the scheduler periodically.
//!
//! ```
//! use ticket_queue_rs::TicketQueue;
//!
//! let queue = TicketQueue::new(3).unwrap();
//! assert_eq!(queue.capacity(), 4);
//!
//! queue.push("first");
//! assert!(queue.try_push("second", 4).is_ok());
//!
//! assert_eq!(queue.pop(), "first");
//! assert_eq!(queue.try_pop(4), Some("second"));
//! assert_eq!(queue.try_pop(0), None);
//! ```

mod arch;
mod common;
mod slot;
mod sync;

pub mod config;
pub mod error;
pub mod ticket_queue;

// Re-exports for convenience
pub use arch::{round_up_to_power_of_2, DEFAULT_YIELD_INTERVAL, MAX_CAPACITY};
pub use config::QueueBuilder;
pub use error::{QueueError, TryPushError};
pub use ticket_queue::TicketQueue;
