//! Crouton
//!
//! A headless, reactive toast-notification store:
//!
//! - **Typed inserts**: `info`, `attention`, `success`, `warning`, `error`
//! - **Observable list**: subscribers receive the full toast list on every
//!   change, and a snapshot when they subscribe
//! - **Positioned stacking**: bottom anchors append, top anchors prepend;
//!   order is fixed at insertion time
//! - **Tick-driven auto-dismissal**: cancellable deadlines drained by the
//!   host loop, deterministic under test
//!
//! Rendering is out of scope: any UI layer can subscribe and paint the list
//! however it likes.
//!
//! # Example
//!
//! ```rust
//! use crouton::{Position, ToastOptions, ToastStore};
//!
//! let store = ToastStore::headless();
//! store.set_position(Position::TopRight);
//!
//! let id = store.success("Saved", ToastOptions::new().duration("2s"));
//! assert_eq!(store.toasts()[0].id, id);
//! assert_eq!(store.toasts()[0].duration_ms, 2_000);
//!
//! store.remove_by_id(id);
//! assert!(store.is_empty());
//! ```

pub mod context;
pub mod duration;
pub mod options;
pub mod position;
pub mod record;
pub mod store;

pub use crouton_core::{Store, Subscription};
pub use duration::{parse_shorthand, DurationParseError, DurationSpec};
pub use options::{ToastCallback, ToastDefaults, ToastOptions, DEFAULT_DURATION_MS};
pub use position::{Position, PositionParseError};
pub use record::{ComponentRef, PropMap, ToastComponent, ToastId, ToastKind, ToastRecord};
pub use store::ToastStore;
