//! State store errors.

use crate::config::ConfigError;
use crate::core::IntervalError;
use thiserror::Error;

/// Errors returned by [`CounterStore`](super::CounterStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was created outside a tokio runtime
    #[error("No tokio runtime available to run the auto-increment scheduler")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("Invalid auto-increment interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("Invalid counter configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
