//! Per-toast options and library-wide defaults
//!
//! Options follow the builder idiom: every field is optional and explicit
//! settings win over [`ToastDefaults`] when merged at insertion time.
//! Malformed values never error out of an insert; they fall back to the
//! defaults.

use crate::duration::DurationSpec;
use crate::record::ToastComponent;
use std::sync::Arc;

/// Callback invoked on toast lifecycle events
pub type ToastCallback = Arc<dyn Fn() + Send + Sync>;

/// Default duration applied when options omit one or shorthand parsing fails
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Library-wide defaults, settable per store
#[derive(Clone, Debug, PartialEq)]
pub struct ToastDefaults {
    pub closable: bool,
    pub infinite: bool,
    pub rich: bool,
    pub duration_ms: u64,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            closable: true,
            infinite: false,
            rich: false,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Configuration accepted by every insert operation
///
/// # Example
///
/// ```rust
/// use crouton::ToastOptions;
///
/// let opts = ToastOptions::new()
///     .duration("3s")
///     .closable(false)
///     .on_remove(|| println!("gone"));
/// ```
#[derive(Clone, Default)]
pub struct ToastOptions {
    pub(crate) closable: Option<bool>,
    pub(crate) component: Option<ToastComponent>,
    pub(crate) infinite: Option<bool>,
    pub(crate) rich: Option<bool>,
    pub(crate) on_mount: Option<ToastCallback>,
    pub(crate) on_remove: Option<ToastCallback>,
    pub(crate) duration: Option<DurationSpec>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a user-dismiss control
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    /// Render custom content inside the toast
    pub fn component(mut self, component: ToastComponent) -> Self {
        self.component = Some(component);
        self
    }

    /// Never auto-dismiss; the toast stays until removed manually
    pub fn infinite(mut self, infinite: bool) -> Self {
        self.infinite = Some(infinite);
        self
    }

    /// Allow markup in the message
    pub fn rich(mut self, rich: bool) -> Self {
        self.rich = Some(rich);
        self
    }

    /// Invoked synchronously when the toast is inserted (skipped by headless
    /// stores)
    pub fn on_mount<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_mount = Some(Arc::new(callback));
        self
    }

    /// Invoked after the toast is auto-dismissed
    pub fn on_remove<F: Fn() + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.on_remove = Some(Arc::new(callback));
        self
    }

    /// Auto-dismiss delay: raw milliseconds or shorthand like `"3s"`
    pub fn duration(mut self, duration: impl Into<DurationSpec>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Merge over `defaults`; explicit fields win
    pub(crate) fn merged(self, defaults: &ToastDefaults) -> ResolvedOptions {
        let duration_ms = self
            .duration
            .map(|spec| spec.resolve(defaults.duration_ms))
            .unwrap_or(defaults.duration_ms);

        ResolvedOptions {
            closable: self.closable.unwrap_or(defaults.closable),
            component: self.component,
            infinite: self.infinite.unwrap_or(defaults.infinite),
            rich: self.rich.unwrap_or(defaults.rich),
            on_mount: self.on_mount,
            on_remove: self.on_remove,
            duration_ms,
        }
    }
}

/// Options after merging with defaults
pub(crate) struct ResolvedOptions {
    pub closable: bool,
    pub component: Option<ToastComponent>,
    pub infinite: bool,
    pub rich: bool,
    pub on_mount: Option<ToastCallback>,
    pub on_remove: Option<ToastCallback>,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn omitted_fields_take_defaults() {
        let resolved = ToastOptions::new().merged(&ToastDefaults::default());

        assert_eq!(resolved.closable, true);
        assert_eq!(resolved.infinite, false);
        assert_eq!(resolved.rich, false);
        assert_eq!(resolved.duration_ms, DEFAULT_DURATION_MS);
        assert!(resolved.component.is_none());
        assert!(resolved.on_mount.is_none());
        assert!(resolved.on_remove.is_none());
    }

    #[test]
    fn explicit_fields_win() {
        let resolved = ToastOptions::new()
            .closable(false)
            .infinite(true)
            .rich(true)
            .duration(250u64)
            .merged(&ToastDefaults::default());

        assert_eq!(resolved.closable, false);
        assert_eq!(resolved.infinite, true);
        assert_eq!(resolved.rich, true);
        assert_eq!(resolved.duration_ms, 250);
    }

    #[test]
    fn shorthand_duration_resolves_against_store_default() {
        let defaults = ToastDefaults {
            duration_ms: 1_234,
            ..ToastDefaults::default()
        };

        let good = ToastOptions::new().duration("2s").merged(&defaults);
        assert_eq!(good.duration_ms, 2_000);

        let bad = ToastOptions::new().duration("soon").merged(&defaults);
        assert_eq!(bad.duration_ms, 1_234);
    }
}
