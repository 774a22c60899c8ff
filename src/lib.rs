//! Counterplus: counter state with a cancellable auto-increment timer
//!
//! The counter is split the "pure core, imperative shell" way. The core
//! decides every next snapshot with pure functions; the store commits it,
//! publishes it, and drives a single background timer task.
//!
//! # Core Concepts
//!
//! - **Snapshot**: [`CounterState`], an immutable value holding the count,
//!   the auto-mode flag and the auto-increment interval
//! - **Commands**: [`Command`] values applied purely to a snapshot, yielding
//!   the next snapshot and a [`SchedulerDirective`]
//! - **Scheduler**: [`AutoIncrementScheduler`], a single-slot repeating task
//!   that increments the count once per interval while auto mode is on
//! - **Store**: [`CounterStore`], the session owner that serializes commands
//!   and ticks and publishes snapshots over a `watch` channel
//!
//! # Example
//!
//! ```rust
//! use counterplus::CounterStore;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> Result<(), counterplus::StoreError> {
//! let store = CounterStore::new()?;
//! let mut snapshots = store.subscribe();
//!
//! store.toggle_auto_mode();
//! tokio::time::sleep(Duration::from_millis(3100)).await;
//! assert_eq!(snapshots.borrow_and_update().count(), 1);
//!
//! store.toggle_auto_mode();
//! tokio::time::sleep(Duration::from_secs(10)).await;
//! assert_eq!(snapshots.borrow_and_update().count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, CounterConfig};
pub use core::{Command, CounterState, Interval, IntervalError, SchedulerDirective};
pub use scheduler::{AutoIncrementScheduler, SchedulerState};
pub use store::{CounterStore, StoreError};
