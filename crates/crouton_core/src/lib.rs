//! Crouton Core Primitives
//!
//! This crate provides the foundational primitives for the Crouton
//! notification library:
//!
//! - **Observable Stores**: publish/subscribe value containers that push a
//!   snapshot to every listener on subscription and on every change
//! - **Timer Queues**: cancellable one-shot deadlines, drained by an explicit
//!   tick so hosts (and tests) control time
//!
//! # Example
//!
//! ```rust
//! use crouton_core::Store;
//! use std::sync::{Arc, Mutex};
//!
//! let store = Store::new(0i32);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let sub = store.subscribe(move |value| sink.lock().unwrap().push(*value));
//!
//! store.set(1);
//! store.update(|n| n + 1);
//!
//! sub.unsubscribe();
//! store.set(99);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
//! ```

pub mod store;
pub mod timer;

pub use store::{Store, SubscriberId, Subscription};
pub use timer::{TimerId, TimerQueue};
