//! Errors raised by the pure counter core.

use thiserror::Error;

/// Reasons an auto-increment interval can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("Auto-increment interval must be positive, got zero")]
    Zero,

    #[error("Auto-increment interval of {millis}ms exceeds the supported maximum")]
    TooLong { millis: u64 },
}
