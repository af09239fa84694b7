//! Nullable slot used as the element type of the ring buffer
//!
//! A slot holds at most one value. It does no synchronization of its own:
//! exclusive access to a slot is granted by the queue's counters, which
//! is why every accessor is `unsafe`.

use crate::sync::cell::UnsafeCell;

pub(crate) struct Slot<T> {
    value: UnsafeCell<Option<T>>,
}

// Safety: access to `value` is serialized by the queue's reservation protocol
unsafe impl<T: Send> Send for Slot<T> {}
unsafe impl<T: Send> Sync for Slot<T> {}

impl<T> Slot<T> {
    #[inline]
    pub(crate) fn empty() -> Self {
        Self {
            value: UnsafeCell::new(None),
        }
    }

    /// Places `value` into the slot.
    ///
    /// # Safety
    ///
    /// The caller must hold the write reservation for this slot and the slot
    /// must be empty.
    #[inline]
    pub(crate) unsafe fn construct(&self, value: T) {
        debug_assert!(!self.is_present(), "construct into an occupied slot");
        self.value.with_mut(|cell| *cell = Some(value));
    }

    /// Moves the value out, leaving the slot empty.
    ///
    /// # Safety
    ///
    /// The caller must hold the read reservation for this slot and the slot
    /// must be occupied.
    #[inline]
    pub(crate) unsafe fn release(&self) -> T {
        debug_assert!(self.is_present(), "release of an empty slot");
        self.value
            .with_mut(|cell| (*cell).take())
            .unwrap_unchecked()
    }

    /// # Safety
    ///
    /// No other thread may be writing the slot concurrently.
    #[inline]
    pub(crate) unsafe fn is_present(&self) -> bool {
        self.value.with(|cell| (*cell).is_some())
    }
}
