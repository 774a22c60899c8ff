//! Immutable counter snapshot.
//!
//! Every mutation of the counter produces a fresh [`CounterState`]; nothing
//! in this module has side effects.

use super::interval::Interval;
use serde::{Deserialize, Serialize};

/// Complete counter state at one point in time.
///
/// Fields are private so a snapshot handed to an observer can never be
/// changed underneath it. The transition methods take `&self` and return the
/// next snapshot.
///
/// # Example
///
/// ```rust
/// use counterplus::core::CounterState;
///
/// let state = CounterState::default().incremented().incremented().decremented();
/// assert_eq!(state.count(), 1);
///
/// let state = state.reset();
/// assert_eq!(state.count(), 0);
/// assert!(!state.is_auto_mode());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    count: i64,
    is_auto_mode: bool,
    auto_increment_interval: Interval,
}

impl CounterState {
    pub fn new(count: i64, interval: Interval) -> Self {
        Self {
            count,
            is_auto_mode: false,
            auto_increment_interval: interval,
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn is_auto_mode(&self) -> bool {
        self.is_auto_mode
    }

    pub fn interval(&self) -> Interval {
        self.auto_increment_interval
    }

    /// Count plus one. Saturates at `i64::MAX`.
    #[must_use]
    pub fn incremented(&self) -> Self {
        Self {
            count: self.count.saturating_add(1),
            ..*self
        }
    }

    /// Count minus one. Saturates at `i64::MIN`.
    #[must_use]
    pub fn decremented(&self) -> Self {
        Self {
            count: self.count.saturating_sub(1),
            ..*self
        }
    }

    /// Count back to zero; auto mode and interval are kept.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self { count: 0, ..*self }
    }

    #[must_use]
    pub fn with_auto_mode(&self, is_auto_mode: bool) -> Self {
        Self {
            is_auto_mode,
            ..*self
        }
    }

    #[must_use]
    pub fn with_interval(&self, interval: Interval) -> Self {
        Self {
            auto_increment_interval: interval,
            ..*self
        }
    }

    /// Caption shown under the count while auto mode is on.
    pub fn status_line(&self) -> Option<String> {
        let seconds = self.auto_increment_interval.as_secs();
        self.is_auto_mode.then(|| format!("Incrementing every {seconds}s"))
    }
}
