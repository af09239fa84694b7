//! Error types for queue construction and bounded operations

use std::fmt;

use thiserror::Error;

/// Errors reported by [`TicketQueue`](crate::TicketQueue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A queue must hold at least one element
    #[error("specified capacity is zero - queue must have non zero capacity")]
    CapacityZero,

    /// The requested capacity is above [`MAX_CAPACITY`](crate::MAX_CAPACITY)
    #[error("specified capacity {requested} is larger than max allowable capacity {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    /// A bounded operation ran out of attempts before it was admitted
    #[error("operation was not admitted after {attempts} retries")]
    AdmissionTimeout { attempts: u16 },
}

/// Returned by [`TicketQueue::try_push`](crate::TicketQueue::try_push) when
/// the value was not admitted. The value is handed back untouched.
#[derive(Error)]
#[error("push rejected: {cause}")]
pub struct TryPushError<T> {
    value: T,
    #[source]
    cause: QueueError,
}

impl<T> TryPushError<T> {
    pub(crate) fn timeout(value: T, attempts: u16) -> Self {
        Self {
            value,
            cause: QueueError::AdmissionTimeout { attempts },
        }
    }

    /// Recovers the value that was not pushed
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The reason the push was rejected
    pub fn cause(&self) -> QueueError {
        self.cause
    }
}

impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPushError")
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueueError::CapacityZero.to_string(),
            "specified capacity is zero - queue must have non zero capacity"
        );
        assert_eq!(
            QueueError::CapacityTooLarge { requested: 10, max: 8 }.to_string(),
            "specified capacity 10 is larger than max allowable capacity 8"
        );
    }

    #[test]
    fn test_try_push_error_returns_value() {
        struct Opaque(u32);

        let err = TryPushError::timeout(Opaque(5), 3);
        assert_eq!(err.cause(), QueueError::AdmissionTimeout { attempts: 3 });
        assert!(err.source().is_some());
        assert!(format!("{err:?}").contains("AdmissionTimeout"));
        assert_eq!(err.to_string(), "push rejected: operation was not admitted after 3 retries");
        assert_eq!(err.into_inner().0, 5);
    }
}
