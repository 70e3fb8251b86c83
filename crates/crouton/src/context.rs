//! Global toast context singleton
//!
//! `ToastContext` provides process-wide access to a [`ToastStore`] without
//! threading the store through every call site. The owned store remains the
//! primary API; this layer is optional sugar for application code.
//!
//! # Initialization
//!
//! The singleton must be initialized by the app layer before use:
//!
//! ```ignore
//! // At app startup
//! ToastContext::init(ToastStore::new());
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use crouton::context;
//!
//! context::success("Profile saved", ToastOptions::new());
//! context::set_position(Position::TopRight);
//! ```

use crate::options::ToastOptions;
use crate::position::Position;
use crate::record::{ToastId, ToastKind, ToastRecord};
use crate::store::ToastStore;
use crouton_core::Subscription;
use std::sync::OnceLock;

/// Global toast context instance
static TOAST_CONTEXT: OnceLock<ToastContext> = OnceLock::new();

/// Global toast context singleton
pub struct ToastContext {
    store: ToastStore,
}

impl ToastContext {
    /// Initialize the global toast context (call once at app startup)
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn init(store: ToastStore) {
        let context = ToastContext { store };

        if TOAST_CONTEXT.set(context).is_err() {
            panic!("ToastContext::init() called more than once");
        }
    }

    /// Get the global toast context instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ToastContext {
        TOAST_CONTEXT
            .get()
            .expect("ToastContext not initialized. Call ToastContext::init() at app startup.")
    }

    /// Try to get the global toast context (returns None if not initialized)
    pub fn try_get() -> Option<&'static ToastContext> {
        TOAST_CONTEXT.get()
    }

    /// Check if the toast context has been initialized
    pub fn is_initialized() -> bool {
        TOAST_CONTEXT.get().is_some()
    }

    /// Get the global toast store
    pub fn store(&self) -> &ToastStore {
        &self.store
    }
}

// =========================================================================
// Convenience Free Functions
// =========================================================================

/// Get the global toast store
///
/// # Panics
///
/// Panics if `ToastContext::init()` has not been called.
pub fn store() -> &'static ToastStore {
    ToastContext::get().store()
}

/// Insert a toast of the given kind via the global store
pub fn insert(kind: ToastKind, message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().insert(kind, message, options)
}

/// Add an info type toast via the global store
pub fn info(message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().info(message, options)
}

/// Add an attention type toast via the global store
pub fn attention(message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().attention(message, options)
}

/// Add a success type toast via the global store
pub fn success(message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().success(message, options)
}

/// Add a warning type toast via the global store
pub fn warning(message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().warning(message, options)
}

/// Add an error type toast via the global store
pub fn error(message: impl Into<String>, options: ToastOptions) -> ToastId {
    store().error(message, options)
}

/// Remove a toast from the global store by id
pub fn remove_by_id(id: ToastId) {
    store().remove_by_id(id);
}

/// Remove a toast from the global store by index
pub fn remove_by_index(index: usize) {
    store().remove_by_index(index);
}

/// Remove every toast from the global store
pub fn remove_all() {
    store().remove_all();
}

/// Subscribe to the global toast list
#[must_use = "dropping the subscription immediately deregisters the listener"]
pub fn subscribe<F>(listener: F) -> Subscription<Vec<ToastRecord>>
where
    F: Fn(&[ToastRecord]) + Send + Sync + 'static,
{
    store().subscribe(listener)
}

/// Current stack position of the global store
pub fn position() -> Position {
    store().position()
}

/// Move the global stack anchor
pub fn set_position(position: Position) {
    store().set_position(position);
}

/// Fire every auto-dismissal due now on the global store
pub fn tick() -> usize {
    store().tick()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // One test exercises the whole singleton lifecycle: OnceLock state is
    // process-wide, so splitting these assertions across #[test] functions
    // would make them order-dependent.
    #[test]
    fn context_lifecycle() {
        assert!(!ToastContext::is_initialized());
        assert!(ToastContext::try_get().is_none());

        ToastContext::init(ToastStore::headless());
        assert!(ToastContext::is_initialized());

        set_position(Position::TopLeft);
        let id = error("Failed", ToastOptions::new());
        assert_eq!(store().toasts()[0].id, id);

        let second = success("Recovered", ToastOptions::new());
        // Top anchor prepends
        assert_eq!(store().toasts()[0].id, second);

        remove_by_id(id);
        remove_all();
        assert!(store().is_empty());
    }
}
