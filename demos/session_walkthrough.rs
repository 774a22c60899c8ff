//! Session Walkthrough
//!
//! Drives one counter session the way a UI would: manual taps, auto mode,
//! an interval change from the settings picker, and teardown.
//!
//! Key concepts:
//! - Observers read snapshots from a `watch` channel
//! - Auto mode runs a single cancellable timer task
//! - Changing the interval restarts the timer from the moment of the change
//!
//! Run with: RUST_LOG=counterplus=debug cargo run --example session_walkthrough

use counterplus::{CounterConfig, CounterStore};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("counterplus=info")),
        )
        .init();

    println!("=== Counter Session Walkthrough ===\n");

    let config = CounterConfig::from_toml_str("interval_secs = 1")?;
    let store = CounterStore::from_config(&config)?;
    let mut snapshots = store.subscribe();

    let watcher = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let state = *snapshots.borrow_and_update();
            match state.status_line() {
                Some(status) => println!("count = {:>3}  ({status})", state.count()),
                None => println!("count = {:>3}", state.count()),
            }
        }
    });

    store.increment();
    store.increment();
    store.decrement();
    store.reset();

    println!("\nStarting auto mode every {}", store.snapshot().interval());
    store.toggle_auto_mode();
    tokio::time::sleep(Duration::from_millis(3500)).await;

    println!("\nPicking {}s from presets {:?}", 2, store.presets());
    store.update_interval(2)?;
    tokio::time::sleep(Duration::from_millis(4500)).await;

    store.toggle_auto_mode();
    let last = store.shutdown();
    watcher.await?;

    println!("\nFinal count: {}", last.count());
    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
