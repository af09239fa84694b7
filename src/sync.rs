//! Atomic, cell and scheduling primitives, switched to loom's model-checked
//! versions when the `loom` feature is enabled.

#[cfg(feature = "loom")]
pub(crate) use loom::sync::atomic::{AtomicIsize, AtomicUsize};
#[cfg(feature = "loom")]
pub(crate) use loom::thread::yield_now;

#[cfg(not(feature = "loom"))]
pub(crate) use std::sync::atomic::{AtomicIsize, AtomicUsize};
#[cfg(not(feature = "loom"))]
pub(crate) use std::thread::yield_now;

#[cfg(feature = "loom")]
pub(crate) mod cell {
    pub(crate) use loom::cell::UnsafeCell;
}

/// `std::cell::UnsafeCell` behind loom's closure-based access API, so slot
/// accesses are tracked by the model checker under the `loom` feature.
#[cfg(not(feature = "loom"))]
pub(crate) mod cell {
    #[derive(Debug)]
    pub(crate) struct UnsafeCell<T>(std::cell::UnsafeCell<T>);

    impl<T> UnsafeCell<T> {
        #[inline]
        pub(crate) const fn new(data: T) -> UnsafeCell<T> {
            UnsafeCell(std::cell::UnsafeCell::new(data))
        }

        #[inline]
        pub(crate) fn with<R>(&self, f: impl FnOnce(*const T) -> R) -> R {
            f(self.0.get())
        }

        #[inline]
        pub(crate) fn with_mut<R>(&self, f: impl FnOnce(*mut T) -> R) -> R {
            f(self.0.get())
        }
    }
}
