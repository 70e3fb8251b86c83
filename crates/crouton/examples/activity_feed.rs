//! Activity feed demo
//!
//! Drives a toast store from a plain thread loop: a subscriber prints the
//! stack the way a renderer would repaint it, and the loop sleeps until the
//! next dismissal deadline.
//!
//! Run with: `cargo run --example activity_feed`

use crouton::{Position, ToastOptions, ToastRecord, ToastStore};
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let store = ToastStore::new();
    store.set_position(Position::BottomRight);

    let _sub = store.subscribe(|toasts: &[ToastRecord]| {
        println!("-- stack ({}) --", toasts.len());
        for toast in toasts {
            println!("  [{}] {}", toast.kind, toast.message);
        }
    });

    store.info("Sync started", ToastOptions::new().duration("1s"));
    store.success("Profile saved", ToastOptions::new().duration("2s"));
    store.warning(
        "Disk space is low",
        ToastOptions::new()
            .duration("3s")
            .on_remove(|| println!("  (warning dismissed)")),
    );

    while let Some(deadline) = store.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        store.tick();
    }

    println!("feed drained");
}
