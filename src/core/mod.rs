//! Pure counter core.
//!
//! This module contains the side-effect-free half of the counter:
//! - The immutable [`CounterState`] snapshot
//! - The validated [`Interval`] type and the preset list
//! - [`Command`] values and their pure application
//!
//! The store in [`crate::store`] is the imperative shell around it.

mod command;
mod error;
mod interval;
mod state;

pub use command::{Command, Outcome, SchedulerDirective};
pub use error::IntervalError;
pub use interval::{Interval, PRESET_SECONDS};
pub use state::CounterState;
