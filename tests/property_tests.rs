//! Property-based tests for the counter core and store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command sequences.

use counterplus::core::{Command, CounterState, Interval, SchedulerDirective};
use counterplus::{CounterStore, SchedulerState};
use proptest::prelude::*;
use tokio::runtime::{Builder, Runtime};

fn runtime() -> Runtime {
    Builder::new_current_thread().enable_time().build().unwrap()
}

prop_compose! {
    fn arbitrary_state()(
        count in -1_000_000i64..1_000_000,
        is_auto_mode in any::<bool>(),
        seconds in 1u32..=600,
    ) -> CounterState {
        CounterState::new(count, Interval::from_secs(seconds).unwrap()).with_auto_mode(is_auto_mode)
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Increment),
        Just(Command::Decrement),
        Just(Command::Reset),
        Just(Command::ToggleAutoMode),
        (0u32..=10).prop_map(|seconds| Command::UpdateInterval { seconds }),
    ]
}

proptest! {
    #[test]
    fn count_is_sum_of_deltas(ups in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut state = CounterState::default();
        let mut expected = 0i64;

        for up in &ups {
            if *up {
                state = state.incremented();
                expected += 1;
            } else {
                state = state.decremented();
                expected -= 1;
            }
        }

        prop_assert_eq!(state.count(), expected);
    }

    #[test]
    fn count_restarts_from_zero_after_reset(
        before in prop::collection::vec(any::<bool>(), 0..50),
        after in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let rt = runtime();
        let _guard = rt.enter();
        let store = CounterStore::new().unwrap();

        for up in &before {
            if *up { store.increment(); } else { store.decrement(); }
        }
        store.reset();

        let expected: i64 = after.iter().map(|&up| if up { 1 } else { -1 }).sum();
        for up in &after {
            if *up { store.increment(); } else { store.decrement(); }
        }

        prop_assert_eq!(store.snapshot().count(), expected);
    }

    #[test]
    fn reset_only_touches_count(state in arbitrary_state()) {
        let reset = state.reset();

        prop_assert_eq!(reset.count(), 0);
        prop_assert_eq!(reset.is_auto_mode(), state.is_auto_mode());
        prop_assert_eq!(reset.interval(), state.interval());
    }

    #[test]
    fn double_toggle_leaves_scheduler_idle(
        prefix in prop::collection::vec(arbitrary_command(), 0..20),
    ) {
        let rt = runtime();
        let _guard = rt.enter();
        let store = CounterStore::new().unwrap();

        for command in prefix {
            let _ = store.dispatch(command);
        }
        let before = store.snapshot();
        let tasks_before = store.scheduler_state();

        store.toggle_auto_mode();
        let after = store.toggle_auto_mode();

        prop_assert_eq!(after.is_auto_mode(), before.is_auto_mode());
        prop_assert_eq!(store.scheduler_state(), tasks_before);
        if !before.is_auto_mode() {
            prop_assert_eq!(store.scheduler_state(), SchedulerState::Idle);
        }
    }

    #[test]
    fn directives_keep_slot_in_sync_with_auto_mode(
        commands in prop::collection::vec(arbitrary_command(), 1..60),
    ) {
        let mut state = CounterState::default();
        let mut running = false;

        for command in commands {
            let Ok(outcome) = command.apply(&state) else {
                continue;
            };
            match outcome.directive {
                SchedulerDirective::Keep => {}
                SchedulerDirective::Start(interval) => {
                    prop_assert!(!running, "start issued while running");
                    prop_assert_eq!(interval, outcome.state.interval());
                    running = true;
                }
                SchedulerDirective::Stop => {
                    prop_assert!(running, "stop issued while idle");
                    running = false;
                }
                SchedulerDirective::Restart(interval) => {
                    prop_assert!(running, "restart issued while idle");
                    prop_assert_eq!(interval, outcome.state.interval());
                }
            }
            state = outcome.state;
            prop_assert_eq!(running, state.is_auto_mode());
        }
    }

    #[test]
    fn store_slot_matches_auto_mode(
        commands in prop::collection::vec(arbitrary_command(), 1..40),
    ) {
        let rt = runtime();
        let _guard = rt.enter();
        let store = CounterStore::new().unwrap();

        for command in commands {
            let _ = store.dispatch(command);
            let state = store.snapshot();
            match store.scheduler_state() {
                SchedulerState::Idle => prop_assert!(!state.is_auto_mode()),
                SchedulerState::Running { interval } => {
                    prop_assert!(state.is_auto_mode());
                    prop_assert_eq!(interval, state.interval());
                }
            }
        }
    }

    #[test]
    fn zero_interval_never_changes_state(state in arbitrary_state()) {
        let result = Command::UpdateInterval { seconds: 0 }.apply(&state);
        prop_assert!(result.is_err());
    }

    #[test]
    fn update_interval_scales_seconds(state in arbitrary_state(), seconds in 1u32..=86_400) {
        let outcome = Command::UpdateInterval { seconds }.apply(&state).unwrap();

        prop_assert_eq!(outcome.state.interval().as_millis(), u64::from(seconds) * 1000);
        prop_assert_eq!(outcome.state.count(), state.count());
        prop_assert_eq!(outcome.state.is_auto_mode(), state.is_auto_mode());
    }
}
