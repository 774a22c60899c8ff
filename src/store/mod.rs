//! Session-scoped counter store.
//!
//! [`CounterStore`] owns the current [`CounterState`] snapshot and the
//! auto-increment scheduler slot. It is the imperative shell around
//! [`Command::apply`]: it commits the next snapshot, publishes it to
//! observers, and carries out the scheduler directive.
//!
//! The snapshot and the scheduler slot sit behind one mutex. User commands
//! and scheduler ticks both go through it, so no update is lost and a tick
//! can never land after the scheduler was stopped.

use crate::config::{validate_presets, CounterConfig};
use crate::core::{Command, CounterState, Outcome, SchedulerDirective};
use crate::scheduler::{AutoIncrementScheduler, SchedulerState};
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

pub mod error;

pub use error::StoreError;

struct Slot {
    state: CounterState,
    scheduler: AutoIncrementScheduler,
}

struct Shared {
    slot: Mutex<Slot>,
    snapshots: watch::Sender<CounterState>,
    presets: Vec<u32>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Slot> {
        // Slot mutations never panic midway, so a poisoned guard is still consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, slot: &mut Slot, next: CounterState) {
        slot.state = next;
        self.snapshots.send_replace(next);
    }

    fn tick(&self, token: &CancellationToken) -> ControlFlow<()> {
        let mut slot = self.lock();
        if token.is_cancelled() {
            return ControlFlow::Break(());
        }
        let next = slot.state.incremented();
        self.publish(&mut slot, next);
        trace!(count = next.count(), "auto-increment tick");
        ControlFlow::Continue(())
    }
}

fn tick_callback(
    shared: Weak<Shared>,
) -> impl FnMut(&CancellationToken) -> ControlFlow<()> + Send + 'static {
    move |token| match shared.upgrade() {
        Some(shared) => shared.tick(token),
        None => ControlFlow::Break(()),
    }
}

/// Owner of one counter session.
///
/// Creating the store starts the session; [`shutdown`](Self::shutdown) or
/// dropping it ends the session and cancels any running auto-increment task.
///
/// # Example
///
/// ```rust
/// use counterplus::CounterStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), counterplus::StoreError> {
/// let store = CounterStore::new()?;
/// let snapshots = store.subscribe();
///
/// store.increment();
/// store.increment();
/// store.decrement();
/// assert_eq!(snapshots.borrow().count(), 1);
///
/// store.update_interval(5)?;
/// assert_eq!(store.snapshot().interval().as_millis(), 5000);
///
/// store.shutdown();
/// # Ok(())
/// # }
/// ```
pub struct CounterStore {
    shared: Arc<Shared>,
}

impl CounterStore {
    /// Start a session with default settings on the current tokio runtime.
    pub fn new() -> Result<Self, StoreError> {
        Self::from_config(&CounterConfig::default())
    }

    /// Start a session from `config` on the current tokio runtime.
    pub fn from_config(config: &CounterConfig) -> Result<Self, StoreError> {
        let runtime = Handle::try_current()?;
        config.validate()?;
        let initial = config.initial_state()?;
        Self::with_runtime(runtime, initial, config.presets.clone())
    }

    /// Start a session whose scheduler runs on `runtime`.
    ///
    /// `presets` gets the same checks as a loaded config: non-empty, no zero
    /// entries.
    pub fn with_runtime(
        runtime: Handle,
        initial: CounterState,
        presets: Vec<u32>,
    ) -> Result<Self, StoreError> {
        validate_presets(&presets)?;
        // A session always starts with the scheduler idle.
        let initial = initial.with_auto_mode(false);
        let (snapshots, _) = watch::channel(initial);
        info!(
            count = initial.count(),
            interval = %initial.interval(),
            "counter session started"
        );
        Ok(Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    state: initial,
                    scheduler: AutoIncrementScheduler::new(runtime),
                }),
                snapshots,
                presets,
            }),
        })
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> CounterState {
        *self.shared.snapshots.borrow()
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.shared.snapshots.subscribe()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.shared.lock().scheduler.state()
    }

    /// Interval choices for the settings picker, in seconds.
    pub fn presets(&self) -> &[u32] {
        &self.shared.presets
    }

    pub fn increment(&self) -> CounterState {
        self.apply_with(Command::Increment, Outcome::increment)
    }

    pub fn decrement(&self) -> CounterState {
        self.apply_with(Command::Decrement, Outcome::decrement)
    }

    /// Zero the count. Auto mode and interval are untouched.
    pub fn reset(&self) -> CounterState {
        self.apply_with(Command::Reset, Outcome::reset)
    }

    /// Flip auto mode, starting or stopping the scheduler to match.
    pub fn toggle_auto_mode(&self) -> CounterState {
        self.apply_with(Command::ToggleAutoMode, Outcome::toggle_auto_mode)
    }

    /// Set the auto-increment interval to `seconds`.
    ///
    /// While auto mode is on the scheduler restarts, so the next tick comes
    /// one full new interval after this call. Zero is rejected and leaves
    /// the state untouched.
    pub fn update_interval(&self, seconds: u32) -> Result<CounterState, StoreError> {
        self.dispatch(Command::UpdateInterval { seconds })
    }

    /// Apply any command.
    pub fn dispatch(&self, command: Command) -> Result<CounterState, StoreError> {
        let mut slot = self.shared.lock();
        let outcome = command.apply(&slot.state)?;
        Ok(self.commit(&mut slot, command, outcome))
    }

    /// End the session.
    ///
    /// Stops the scheduler unconditionally and publishes a final snapshot
    /// with auto mode off. Subscribers see the channel close afterwards.
    pub fn shutdown(self) -> CounterState {
        let mut slot = self.shared.lock();
        slot.scheduler.stop();
        let last = slot.state.with_auto_mode(false);
        self.shared.publish(&mut slot, last);
        info!(count = last.count(), "counter session ended");
        last
    }

    fn apply_with(
        &self,
        command: Command,
        decide: fn(&CounterState) -> Outcome,
    ) -> CounterState {
        let mut slot = self.shared.lock();
        let outcome = decide(&slot.state);
        self.commit(&mut slot, command, outcome)
    }

    /// Carry out the directive, then publish. Runs under the slot lock.
    fn commit(&self, slot: &mut Slot, command: Command, outcome: Outcome) -> CounterState {
        match outcome.directive {
            SchedulerDirective::Keep => {}
            SchedulerDirective::Start(interval) => {
                let on_tick = tick_callback(Arc::downgrade(&self.shared));
                slot.scheduler.start(interval, on_tick);
            }
            SchedulerDirective::Stop => {
                slot.scheduler.stop();
            }
            SchedulerDirective::Restart(interval) => {
                slot.scheduler.stop();
                let on_tick = tick_callback(Arc::downgrade(&self.shared));
                slot.scheduler.start(interval, on_tick);
            }
        }

        self.shared.publish(slot, outcome.state);
        debug!(
            command = command.name(),
            count = outcome.state.count(),
            auto_mode = outcome.state.is_auto_mode(),
            "applied counter command"
        );
        outcome.state
    }
}

impl std::fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterStore")
            .field("state", &self.snapshot())
            .field("scheduler", &self.scheduler_state())
            .finish()
    }
}
