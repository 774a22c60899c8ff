//! Counter commands and their pure application.
//!
//! [`Command::apply`] decides the next snapshot and what the scheduler has
//! to do about it. Carrying out the scheduler side is left to the store.

use super::error::IntervalError;
use super::interval::Interval;
use super::state::CounterState;

/// A mutation requested by the presentation layer or the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Increment,
    Decrement,
    Reset,
    ToggleAutoMode,
    UpdateInterval { seconds: u32 },
}

/// What the scheduler slot must do after a command is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerDirective {
    /// Leave the slot as it is.
    Keep,
    /// Slot is idle; start ticking at this interval.
    Start(Interval),
    /// Cancel the running task.
    Stop,
    /// Cancel the running task, then start a fresh one at this interval.
    Restart(Interval),
}

/// Next snapshot plus the scheduler directive that keeps it consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub state: CounterState,
    pub directive: SchedulerDirective,
}

impl Outcome {
    fn keep(state: CounterState) -> Self {
        Self {
            state,
            directive: SchedulerDirective::Keep,
        }
    }

    pub fn increment(current: &CounterState) -> Self {
        Self::keep(current.incremented())
    }

    pub fn decrement(current: &CounterState) -> Self {
        Self::keep(current.decremented())
    }

    pub fn reset(current: &CounterState) -> Self {
        Self::keep(current.reset())
    }

    /// Flip auto mode and start or stop the scheduler to match.
    pub fn toggle_auto_mode(current: &CounterState) -> Self {
        let next = current.with_auto_mode(!current.is_auto_mode());
        let directive = if next.is_auto_mode() {
            SchedulerDirective::Start(next.interval())
        } else {
            SchedulerDirective::Stop
        };
        Self {
            state: next,
            directive,
        }
    }

    /// Swap the interval; a running scheduler restarts so the new period
    /// counts from now.
    pub fn update_interval(current: &CounterState, interval: Interval) -> Self {
        let next = current.with_interval(interval);
        let directive = if next.is_auto_mode() {
            SchedulerDirective::Restart(interval)
        } else {
            SchedulerDirective::Keep
        };
        Self {
            state: next,
            directive,
        }
    }
}

impl Command {
    /// Name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
            Self::ToggleAutoMode => "toggle_auto_mode",
            Self::UpdateInterval { .. } => "update_interval",
        }
    }

    /// Compute the outcome of this command against `current` (pure).
    ///
    /// Only `UpdateInterval` can fail, and only for a zero second count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use counterplus::core::{Command, CounterState, SchedulerDirective};
    ///
    /// let outcome = Command::ToggleAutoMode.apply(&CounterState::default()).unwrap();
    /// assert!(outcome.state.is_auto_mode());
    /// assert!(matches!(outcome.directive, SchedulerDirective::Start(_)));
    /// ```
    pub fn apply(&self, current: &CounterState) -> Result<Outcome, IntervalError> {
        let outcome = match *self {
            Self::Increment => Outcome::increment(current),
            Self::Decrement => Outcome::decrement(current),
            Self::Reset => Outcome::reset(current),
            Self::ToggleAutoMode => Outcome::toggle_auto_mode(current),
            Self::UpdateInterval { seconds } => {
                Outcome::update_interval(current, Interval::from_secs(seconds)?)
            }
        };
        Ok(outcome)
    }
}
