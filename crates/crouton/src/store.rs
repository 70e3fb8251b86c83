//! The toast store
//!
//! `ToastStore` owns two observable containers (the active toast list and the
//! stack position) plus a queue of pending auto-dismissals. All mutation goes
//! through its operations; subscribers receive the full list on every change.
//!
//! Auto-dismissal is tick-driven: the host loop calls [`ToastStore::tick`]
//! (or schedules a wakeup from [`ToastStore::next_deadline`]), and every due
//! dismissal removes its record and fires the `on_remove` callback. Tests
//! drive time explicitly through [`ToastStore::tick_at`].

use crate::options::{ResolvedOptions, ToastCallback, ToastDefaults, ToastOptions};
use crate::position::Position;
use crate::record::{ToastId, ToastKind, ToastRecord};
use crouton_core::{Store, Subscription, TimerId, TimerQueue};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Payload carried by a pending auto-dismissal
struct Dismissal {
    id: ToastId,
    on_remove: Option<ToastCallback>,
}

/// Pending dismissals, with a reverse index for cancellation on manual
/// removal
#[derive(Default)]
struct DismissQueue {
    timers: TimerQueue<Dismissal>,
    by_toast: FxHashMap<ToastId, TimerId>,
}

/// Reactive store of active toast notifications
pub struct ToastStore {
    toasts: Store<Vec<ToastRecord>>,
    position: Store<Position>,
    dismissals: Mutex<DismissQueue>,
    next_id: AtomicU64,
    defaults: ToastDefaults,
    headless: bool,
}

impl ToastStore {
    /// Create a store for a rendering-capable host
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Create a store that skips `on_mount` callbacks
    ///
    /// Use this where no rendering layer exists, such as tests or server-side
    /// evaluation.
    pub fn headless() -> Self {
        Self::build(true)
    }

    fn build(headless: bool) -> Self {
        Self {
            toasts: Store::new(Vec::new()),
            position: Store::new(Position::default()),
            dismissals: Mutex::new(DismissQueue::default()),
            next_id: AtomicU64::new(1),
            defaults: ToastDefaults::default(),
            headless,
        }
    }

    /// Replace the library-wide defaults for this store
    pub fn with_defaults(mut self, defaults: ToastDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert a toast of the given kind
    ///
    /// Builds the record by merging `options` over the store defaults,
    /// publishes it into the list (appended for bottom positions, prepended
    /// otherwise), and schedules an auto-dismissal unless the toast is
    /// infinite. Returns the new toast's id.
    pub fn insert(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let resolved = options.merged(&self.defaults);
        self.insert_resolved(id, kind, message.into(), resolved);
        id
    }

    fn insert_resolved(&self, id: ToastId, kind: ToastKind, message: String, opts: ResolvedOptions) {
        let ResolvedOptions {
            closable,
            component,
            infinite,
            rich,
            on_mount,
            on_remove,
            duration_ms,
        } = opts;

        let extra = component
            .as_ref()
            .map(|c| c.props().clone())
            .unwrap_or_default();

        let record = ToastRecord {
            id,
            kind,
            message,
            duration_ms: if infinite { 0 } else { duration_ms },
            closable,
            component,
            infinite,
            rich,
            extra,
        };

        if !self.headless {
            if let Some(callback) = &on_mount {
                callback();
            }
        }

        let append = self.position.get().is_bottom();
        tracing::debug!(
            "ToastStore::insert - {} toast {} ({})",
            kind,
            id,
            if append { "append" } else { "prepend" }
        );

        self.toasts.update(|mut toasts| {
            if append {
                toasts.push(record);
            } else {
                toasts.insert(0, record);
            }
            toasts
        });

        if !infinite {
            let mut queue = self.dismissals.lock().unwrap();
            let timer = queue
                .timers
                .schedule(Duration::from_millis(duration_ms), Dismissal { id, on_remove });
            queue.by_toast.insert(id, timer);
        }
    }

    /// Add an info type toast.
    /// Usually indicates information to the user, but isn't important.
    pub fn info(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.insert(ToastKind::Info, message, options)
    }

    /// Add an attention type toast.
    /// Indicate to the user with important information.
    pub fn attention(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.insert(ToastKind::Attention, message, options)
    }

    /// Add a success type toast.
    /// Indicates to the user something good has happened.
    pub fn success(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.insert(ToastKind::Success, message, options)
    }

    /// Add a warning type toast.
    /// Tell the user something may be wrong but isn't critical.
    pub fn warning(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.insert(ToastKind::Warning, message, options)
    }

    /// Add an error type toast.
    /// Alert the user something critical has happened.
    pub fn error(&self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.insert(ToastKind::Error, message, options)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a toast based on its unique id
    ///
    /// A no-op if no such toast is active. Any pending auto-dismissal for the
    /// id is cancelled.
    pub fn remove_by_id(&self, id: ToastId) {
        // Presence check and removal run under one write lock; concurrent
        // removals cannot both observe the toast.
        let removed = self.toasts.update_if(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| toast.id != id);
            toasts.len() != before
        });

        if removed {
            tracing::trace!("ToastStore::remove_by_id - removed toast {}", id);
            self.cancel_dismissal(id);
        }
    }

    /// Remove a toast based on its index in the current list order
    ///
    /// A no-op if the index is out of bounds.
    pub fn remove_by_index(&self, index: usize) {
        // Bounds check and removal run under one write lock, so the index
        // stays valid while it is removed and the cancelled dismissal is the
        // one belonging to the toast actually taken out.
        let mut removed = None;
        self.toasts.update_if(|toasts| {
            if index < toasts.len() {
                removed = Some(toasts.remove(index));
                true
            } else {
                false
            }
        });

        if let Some(record) = removed {
            tracing::trace!(
                "ToastStore::remove_by_index - removed index {index} (toast {})",
                record.id
            );
            self.cancel_dismissal(record.id);
        }
    }

    /// Remove every toast and drop all pending auto-dismissals
    pub fn remove_all(&self) {
        tracing::trace!("ToastStore::remove_all - clearing toast list");
        self.toasts.set(Vec::new());

        let mut queue = self.dismissals.lock().unwrap();
        queue.timers.clear();
        queue.by_toast.clear();
    }

    fn cancel_dismissal(&self, id: ToastId) {
        let mut queue = self.dismissals.lock().unwrap();
        if let Some(timer) = queue.by_toast.remove(&id) {
            queue.timers.cancel(timer);
        }
    }

    // =========================================================================
    // Auto-dismissal
    // =========================================================================

    /// Fire every auto-dismissal due now; returns how many toasts were
    /// dismissed
    pub fn tick(&self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Fire every auto-dismissal due at `now`
    ///
    /// Each dismissal removes its record by id (a no-op if the toast is
    /// already gone) and then invokes its `on_remove` callback.
    pub fn tick_at(&self, now: Instant) -> usize {
        let due = {
            let mut queue = self.dismissals.lock().unwrap();
            let due = queue.timers.tick_at(now);
            for dismissal in &due {
                queue.by_toast.remove(&dismissal.id);
            }
            due
        };

        for dismissal in &due {
            tracing::debug!("ToastStore::tick - auto-dismissing toast {}", dismissal.id);
            self.remove_by_id(dismissal.id);
            if let Some(callback) = &dismissal.on_remove {
                callback();
            }
        }
        due.len()
    }

    /// Deadline of the next pending auto-dismissal, for hosts planning
    /// wakeups
    pub fn next_deadline(&self) -> Option<Instant> {
        self.dismissals.lock().unwrap().timers.next_deadline()
    }

    /// Number of pending auto-dismissals
    pub fn pending_dismissals(&self) -> usize {
        self.dismissals.lock().unwrap().timers.len()
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Subscribe to the toast list
    ///
    /// The listener receives the full current list immediately, then again on
    /// every change.
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription<Vec<ToastRecord>>
    where
        F: Fn(&[ToastRecord]) + Send + Sync + 'static,
    {
        self.toasts.subscribe(move |toasts: &Vec<ToastRecord>| listener(toasts))
    }

    /// Snapshot of the active toast list
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.toasts.get()
    }

    pub fn len(&self) -> usize {
        self.toasts.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.get().is_empty()
    }

    // =========================================================================
    // Position
    // =========================================================================

    /// Current stack position
    pub fn position(&self) -> Position {
        self.position.get()
    }

    /// Move the stack anchor
    ///
    /// Only affects where later inserts land; already-active toasts keep
    /// their order.
    pub fn set_position(&self, position: Position) {
        self.position.set(position);
    }

    /// Observable handle to the position setting
    pub fn position_store(&self) -> Store<Position> {
        self.position.clone()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn insert_assigns_distinct_monotonic_ids() {
        let store = ToastStore::headless();
        let first = store.info("one", ToastOptions::new());
        let second = store.info("two", ToastOptions::new());

        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn bottom_position_appends_top_prepends() {
        let store = ToastStore::headless();

        store.set_position(Position::BottomRight);
        store.info("first", ToastOptions::new());
        store.info("second", ToastOptions::new());
        let messages: Vec<_> = store.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["first", "second"]);

        store.set_position(Position::TopRight);
        store.error("third", ToastOptions::new());
        assert_eq!(store.toasts()[0].message, "third");
        // Earlier toasts are not re-sorted
        assert_eq!(store.toasts()[1].message, "first");
    }

    #[test]
    fn removal_is_idempotent() {
        let store = ToastStore::headless();
        let id = store.warning("going", ToastOptions::new());

        store.remove_by_id(id);
        assert!(store.is_empty());
        // Second removal is a no-op
        store.remove_by_id(id);
        store.remove_by_index(0);
        store.remove_by_index(99);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_by_index_respects_current_order() {
        let store = ToastStore::headless();
        store.set_position(Position::BottomLeft);
        store.info("a", ToastOptions::new());
        store.info("b", ToastOptions::new());
        store.info("c", ToastOptions::new());

        store.remove_by_index(1);
        let messages: Vec<_> = store.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["a", "c"]);
    }

    #[test]
    fn concurrent_index_removals_never_panic() {
        use std::thread;

        for _ in 0..50 {
            let store = Arc::new(ToastStore::headless());
            store.info("a", ToastOptions::new().duration(10_000u64));
            store.info("b", ToastOptions::new().duration(10_000u64));

            // More racing removers than toasts: every thread may pass a
            // stale bounds probe, but the in-lock check lets exactly one
            // remover win per toast and the rest no-op.
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let store = Arc::clone(&store);
                    thread::spawn(move || store.remove_by_index(0))
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert!(store.is_empty());
            // Only timers of actually-removed toasts were cancelled
            assert_eq!(store.pending_dismissals(), 0);
        }
    }

    #[test]
    fn out_of_range_removal_does_not_notify_subscribers() {
        let store = ToastStore::headless();
        store.info("only", ToastOptions::new());

        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notifications);
        let _sub = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        // Initial snapshot only
        assert_eq!(notifications.load(Ordering::SeqCst), 1);

        store.remove_by_index(5);
        store.remove_by_id(ToastId(9_999));

        assert_eq!(notifications.load(Ordering::SeqCst), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_all_clears_list_and_timers() {
        let store = ToastStore::headless();
        store.info("a", ToastOptions::new());
        store.info("b", ToastOptions::new().duration(100u64));

        store.remove_all();
        assert!(store.is_empty());
        assert_eq!(store.pending_dismissals(), 0);

        // Still empty after further removals
        store.remove_by_index(0);
        assert!(store.is_empty());
    }

    #[test]
    fn timed_toast_dismissed_after_deadline() {
        let now = Instant::now();
        let store = ToastStore::headless();
        let id = store.success("Saved", ToastOptions::new().duration(2_000u64));

        assert_eq!(store.toasts()[0].id, id);
        assert_eq!(store.tick_at(now + Duration::from_millis(1_999)), 0);
        assert_eq!(store.len(), 1);

        assert_eq!(store.tick_at(now + Duration::from_millis(2_001)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn infinite_toast_never_auto_dismissed() {
        let now = Instant::now();
        let store = ToastStore::headless();
        store.info("stay", ToastOptions::new().infinite(true));

        assert_eq!(store.pending_dismissals(), 0);
        assert_eq!(store.tick_at(now + Duration::from_secs(3_600)), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.toasts()[0].duration_ms, 0);
    }

    #[test]
    fn manual_removal_cancels_pending_dismissal() {
        let now = Instant::now();
        let store = ToastStore::headless();
        let removed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&removed);

        let id = store.info(
            "brief",
            ToastOptions::new()
                .duration(100u64)
                .on_remove(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );

        store.remove_by_id(id);
        assert_eq!(store.pending_dismissals(), 0);
        assert_eq!(store.tick_at(now + Duration::from_secs(1)), 0);
        // on_remove only fires on auto-dismissal
        assert_eq!(removed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn on_remove_fires_after_auto_dismissal() {
        let now = Instant::now();
        let store = ToastStore::headless();
        let removed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&removed);

        store.info(
            "brief",
            ToastOptions::new()
                .duration(100u64)
                .on_remove(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );

        store.tick_at(now + Duration::from_millis(150));
        assert_eq!(removed.load(Ordering::SeqCst), 1);

        // The dismissal fired exactly once
        store.tick_at(now + Duration::from_secs(10));
        assert_eq!(removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn headless_store_skips_on_mount() {
        let mounted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&mounted);

        let store = ToastStore::headless();
        store.info(
            "quiet",
            ToastOptions::new().on_mount(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert_eq!(mounted.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rendering_store_invokes_on_mount_synchronously() {
        let mounted = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&mounted);

        let store = ToastStore::new();
        store.info(
            "loud",
            ToastOptions::new().on_mount(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert_eq!(mounted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn custom_defaults_apply_to_inserts() {
        let store = ToastStore::headless().with_defaults(ToastDefaults {
            closable: false,
            infinite: false,
            rich: true,
            duration_ms: 750,
        });

        store.info("styled", ToastOptions::new());
        let record = &store.toasts()[0];
        assert!(!record.closable);
        assert!(record.rich);
        assert_eq!(record.duration_ms, 750);
    }

    #[test]
    fn next_deadline_reflects_soonest_dismissal() {
        let store = ToastStore::headless();
        assert!(store.next_deadline().is_none());

        store.info("a", ToastOptions::new().duration(5_000u64));
        store.info("b", ToastOptions::new().duration(1_000u64));

        let soonest = store.next_deadline().unwrap();
        assert!(soonest <= Instant::now() + Duration::from_millis(1_000));
    }
}
