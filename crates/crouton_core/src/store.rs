//! Observable value container
//!
//! `Store<T>` is a publish/subscribe cell: listeners receive the current
//! value synchronously when they subscribe, and the full new value on every
//! `set`/`update`. Handles are cheap to clone and share one underlying cell.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, RwLock, Weak};

new_key_type! {
    /// Key identifying a registered listener
    pub struct SubscriberId;
}

/// Listener callback invoked with a reference to the current value
type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: RwLock<T>,
    listeners: Mutex<SlotMap<SubscriberId, Listener<T>>>,
}

/// Observable value container with snapshot-on-subscribe semantics
pub struct Store<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone> Store<T> {
    /// Create a store holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(initial),
                listeners: Mutex::new(SlotMap::with_key()),
            }),
        }
    }

    /// Get a snapshot of the current value
    pub fn get(&self) -> T {
        self.shared.value.read().unwrap().clone()
    }

    /// Replace the value and notify all listeners
    pub fn set(&self, value: T) {
        *self.shared.value.write().unwrap() = value.clone();
        self.notify(&value);
    }

    /// Transform the value in place and notify all listeners
    pub fn update<F: FnOnce(T) -> T>(&self, f: F) {
        let next = {
            let mut guard = self.shared.value.write().unwrap();
            let next = f(guard.clone());
            *guard = next.clone();
            next
        };
        self.notify(&next);
    }

    /// Conditionally transform the value under a single write lock
    ///
    /// `f` mutates the value directly and reports whether it changed
    /// anything; listeners are notified only when it returns `true`. The
    /// whole check-and-mutate runs atomically, so callers can make
    /// decisions (bounds checks, presence probes) that stay valid while
    /// they mutate.
    pub fn update_if<F: FnOnce(&mut T) -> bool>(&self, f: F) -> bool {
        let next = {
            let mut guard = self.shared.value.write().unwrap();
            if !f(&mut guard) {
                return false;
            }
            guard.clone()
        };
        self.notify(&next);
        true
    }

    /// Register a listener
    ///
    /// The listener is invoked immediately with the current value, then again
    /// after every change. Dropping the returned [`Subscription`] (or calling
    /// [`Subscription::unsubscribe`]) deregisters it.
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener: Listener<T> = Arc::new(listener);

        // Register before the initial snapshot so changes made by the
        // listener itself are not lost.
        let id = self
            .shared
            .listeners
            .lock()
            .unwrap()
            .insert(Arc::clone(&listener));

        let snapshot = self.get();
        listener(&snapshot);

        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    /// Number of live listeners
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.lock().unwrap().len()
    }

    fn notify(&self, value: &T) {
        // Listeners are cloned out so a callback may re-enter the store
        // without deadlocking on the registry lock.
        let listeners: SmallVec<[Listener<T>; 4]> = self
            .shared
            .listeners
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();

        for listener in listeners {
            listener(value);
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Handle tying a listener's lifetime to its registration
pub struct Subscription<T> {
    shared: Weak<Shared<T>>,
    id: SubscriberId,
}

impl<T> Subscription<T> {
    /// Deregister the listener
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    fn remove(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.lock().unwrap().remove(self.id);
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.remove();
    }
}
