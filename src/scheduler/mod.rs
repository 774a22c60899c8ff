//! Single-slot auto-increment scheduler.
//!
//! Holds at most one repeating task. The task waits one interval, calls its
//! tick callback, and repeats until the slot is stopped or dropped.

use crate::core::Interval;
use std::ops::ControlFlow;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Observable state of the scheduler slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running { interval: Interval },
}

impl SchedulerState {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Running { .. } => "Running",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

struct RunningTask {
    interval: Interval,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Cancellable repeating task slot.
///
/// The tick callback receives the task's cancellation token. Callers that
/// mutate shared state should re-check it under the same lock they hold
/// when calling [`stop`](Self::stop); that closes the window between the
/// timer firing and the callback running.
pub struct AutoIncrementScheduler {
    runtime: Handle,
    slot: Option<RunningTask>,
}

impl AutoIncrementScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            slot: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        match &self.slot {
            Some(task) => SchedulerState::Running {
                interval: task.interval,
            },
            None => SchedulerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.slot.is_some()
    }

    /// Spawn the repeating task.
    ///
    /// The first tick fires one full `interval` after this call. A task
    /// already occupying the slot is stopped first.
    pub fn start<F>(&mut self, interval: Interval, on_tick: F)
    where
        F: FnMut(&CancellationToken) -> ControlFlow<()> + Send + 'static,
    {
        if let Some(previous) = self.slot.as_ref() {
            warn!(
                previous = %previous.interval,
                next = %interval,
                "auto-increment task already running; replacing it"
            );
            self.stop();
        }

        let token = CancellationToken::new();
        let first_tick = Instant::now() + interval.as_duration();
        let handle = self
            .runtime
            .spawn(tick_loop(first_tick, interval, token.clone(), on_tick));

        info!(interval = %interval, "auto-increment started");
        self.slot = Some(RunningTask {
            interval,
            token,
            handle,
        });
    }

    /// Cancel the running task, if any. Returns whether one was stopped.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.slot.take() else {
            return false;
        };
        task.token.cancel();
        task.handle.abort();
        info!(interval = %task.interval, "auto-increment stopped");
        true
    }
}

impl Drop for AutoIncrementScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn tick_loop<F>(
    first_tick: Instant,
    interval: Interval,
    token: CancellationToken,
    mut on_tick: F,
) where
    F: FnMut(&CancellationToken) -> ControlFlow<()> + Send + 'static,
{
    let mut ticker = time::interval_at(first_tick, interval.as_duration());
    // One increment per elapsed interval, never a catch-up burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            _ = ticker.tick() => {}
        }
        if on_tick(&token).is_break() {
            break;
        }
    }
    debug!(interval = %interval, "auto-increment task exited");
}
