//! Toast records and custom-content descriptors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Arbitrary properties attached to a custom toast component
pub type PropMap = Map<String, Value>;

/// Unique identifier of an active toast
///
/// Ids are allocated from a per-store monotonic counter and never reused
/// within a store's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Semantic category of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Information the user may want, but nothing important
    #[default]
    Info,
    /// Important information the user should notice
    Attention,
    /// Something good happened
    Success,
    /// Something may be wrong, but is not critical
    Warning,
    /// Something critical happened
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Attention => "attention",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle naming a renderable component
///
/// The store never interprets the reference; the rendering layer resolves it
/// against whatever registry it keeps.
#[derive(Clone, PartialEq, Eq)]
pub struct ComponentRef(Arc<str>);

impl ComponentRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.name()).finish()
    }
}

/// Custom content rendered inside a toast: a component reference plus the
/// properties handed to it
#[derive(Clone, Debug, PartialEq)]
pub struct ToastComponent {
    reference: ComponentRef,
    props: PropMap,
}

impl ToastComponent {
    pub fn new(reference: ComponentRef) -> Self {
        Self {
            reference,
            props: PropMap::new(),
        }
    }

    /// Attach a property map to the component
    pub fn with_props(mut self, props: PropMap) -> Self {
        self.props = props;
        self
    }

    /// Set a single property
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn reference(&self) -> &ComponentRef {
        &self.reference
    }

    pub fn props(&self) -> &PropMap {
        &self.props
    }
}

/// An active toast as published to subscribers
#[derive(Clone, Debug, PartialEq)]
pub struct ToastRecord {
    /// Unique id within the owning store
    pub id: ToastId,
    pub kind: ToastKind,
    /// Display text
    pub message: String,
    /// Resolved auto-dismiss delay in milliseconds; `0` when infinite
    pub duration_ms: u64,
    /// Whether a user-dismiss control is shown
    pub closable: bool,
    /// Optional custom content
    pub component: Option<ToastComponent>,
    /// No auto-dismiss timer when set
    pub infinite: bool,
    /// Whether `message` may contain markup
    pub rich: bool,
    /// Custom properties carried over from the component descriptor
    pub extra: PropMap,
}
