//! Validated auto-increment interval.
//!
//! An [`Interval`] is always strictly positive, so a running scheduler can
//! never be handed a zero-length period.

use super::error::IntervalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::time::Duration;

/// Interval choices offered by the reference settings dialog, in seconds.
pub const PRESET_SECONDS: [u32; 9] = [1, 2, 3, 5, 6, 7, 8, 9, 10];

const MILLIS_PER_SEC: u64 = 1000;

/// Period between automatic increments.
///
/// Stored as milliseconds. Serializes as a bare number of milliseconds so the
/// snapshot reads `"autoIncrementInterval": 3000`.
///
/// # Example
///
/// ```rust
/// use counterplus::core::Interval;
///
/// let interval = Interval::from_secs(5).unwrap();
/// assert_eq!(interval.as_millis(), 5000);
/// assert_eq!(interval.as_secs(), 5);
///
/// assert!(Interval::from_secs(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Interval(NonZeroU64);

impl Interval {
    /// Three seconds, the interval a fresh session starts with.
    pub const DEFAULT: Interval = Interval(match NonZeroU64::new(3 * MILLIS_PER_SEC) {
        Some(millis) => millis,
        None => unreachable!(),
    });

    /// Largest accepted interval: `u32::MAX` whole seconds.
    pub const MAX_MILLIS: u64 = u32::MAX as u64 * MILLIS_PER_SEC;

    /// Build an interval from whole seconds.
    pub fn from_secs(seconds: u32) -> Result<Self, IntervalError> {
        Self::from_millis(u64::from(seconds) * MILLIS_PER_SEC)
    }

    /// Build an interval from milliseconds.
    pub fn from_millis(millis: u64) -> Result<Self, IntervalError> {
        if millis > Self::MAX_MILLIS {
            return Err(IntervalError::TooLong { millis });
        }
        NonZeroU64::new(millis)
            .map(Interval)
            .ok_or(IntervalError::Zero)
    }

    pub fn as_millis(&self) -> u64 {
        self.0.get()
    }

    /// Whole seconds, rounded down. This is what the settings picker shows.
    pub fn as_secs(&self) -> u64 {
        self.0.get() / MILLIS_PER_SEC
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0.get())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for Interval {
    type Error = IntervalError;

    fn try_from(millis: u64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<Interval> for u64 {
    fn from(interval: Interval) -> Self {
        interval.as_millis()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.as_millis();
        if millis % MILLIS_PER_SEC == 0 {
            write!(f, "{}s", millis / MILLIS_PER_SEC)
        } else {
            write!(f, "{millis}ms")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(Interval::default().as_millis(), 3000);
        assert_eq!(Interval::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn zero_seconds_is_rejected() {
        assert!(matches!(Interval::from_secs(0), Err(IntervalError::Zero)));
        assert!(matches!(Interval::from_millis(0), Err(IntervalError::Zero)));
    }

    #[test]
    fn largest_second_count_is_accepted() {
        let interval = Interval::from_secs(u32::MAX).unwrap();
        assert_eq!(interval.as_millis(), Interval::MAX_MILLIS);
    }

    #[test]
    fn millis_beyond_max_are_rejected() {
        let result = Interval::from_millis(Interval::MAX_MILLIS + 1);
        assert!(matches!(result, Err(IntervalError::TooLong { .. })));
    }

    #[test]
    fn as_secs_rounds_down() {
        let interval = Interval::from_millis(2500).unwrap();
        assert_eq!(interval.as_secs(), 2);
    }

    #[test]
    fn display_prefers_whole_seconds() {
        assert_eq!(Interval::from_secs(7).unwrap().to_string(), "7s");
        assert_eq!(Interval::from_millis(1500).unwrap().to_string(), "1500ms");
    }

    #[test]
    fn every_preset_is_a_valid_interval() {
        for seconds in PRESET_SECONDS {
            assert!(Interval::from_secs(seconds).is_ok(), "preset {seconds}");
        }
    }

    #[test]
    fn deserializing_zero_fails() {
        let result: Result<Interval, _> = serde_json::from_str("0");
        assert!(result.is_err());

        let interval: Interval = serde_json::from_str("5000").unwrap();
        assert_eq!(interval.as_secs(), 5);
    }
}
