//! Word-width constants and spin-wait pacing
//!
//! The bound counters are `isize`, so the largest capacity is chosen as a
//! quarter of that signed range. Concurrent increment-then-retract on the
//! bounds can overshoot by at most the number of racing threads, which stays
//! far from the overflow boundary.

use crate::sync::yield_now;

/// Largest capacity a queue can be built with (2^62 on 64-bit, 2^30 on 32-bit)
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 2);

/// Idle spin iterations between scheduler yields while waiting on a trailing edge
pub const DEFAULT_YIELD_INTERVAL: u32 = 256;

/// Returns the smallest power of 2 greater than or equal to `n`
///
/// `n` must be non-zero; zero wraps around and yields 0.
pub const fn round_up_to_power_of_2(n: usize) -> usize {
    let mut n = n.wrapping_sub(1);
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    #[cfg(target_pointer_width = "64")]
    {
        n |= n >> 32;
    }
    n.wrapping_add(1)
}

/// Paces a polling loop: a CPU pause hint per idle iteration and a scheduler
/// yield every `yield_interval` iterations, so oversubscribed threads make room
/// for the thread they are waiting on.
pub(crate) struct Spinner {
    count: u32,
    yield_interval: u32,
}

impl Spinner {
    #[inline]
    pub(crate) fn new(yield_interval: u32) -> Self {
        Self {
            count: 0,
            yield_interval: yield_interval.max(1),
        }
    }

    #[inline]
    pub(crate) fn spin(&mut self) {
        // loom only explores other threads at explicit yield points
        if cfg!(feature = "loom") {
            yield_now();
            return;
        }

        self.count = self.count.wrapping_add(1);
        if self.count % self.yield_interval == 0 {
            yield_now();
        } else {
            std::hint::spin_loop();
        }
    }
}
