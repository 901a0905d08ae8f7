//! Opaque animated values.
//!
//! Style trees may carry values that are driven by an animation rather than
//! fixed at authoring time. The flattener never inspects them: any value that
//! exposes the [`AnimatedNode`] listener capability is passed through as-is
//! and accepted wherever a dimension is expected.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_flatstyle::types::{AnimatedNode, AnimatedValue};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! let opacity = AnimatedValue::new(0.0);
//! let seen = Arc::new(AtomicU32::new(0));
//! let counter = seen.clone();
//! opacity.add_listener(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! opacity.set_value(0.5);
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! assert_eq!(opacity.value(), 0.5);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier for a listener registered on an [`AnimatedNode`].
    pub struct ListenerId;
}

/// Callback invoked with the new value whenever an animated node changes.
pub type Listener = Box<dyn Fn(f64) + Send + Sync>;

/// Capability implemented by anything that can drive a style value over time.
pub trait AnimatedNode: fmt::Debug + Send + Sync {
    /// Subscribe to value changes.
    fn add_listener(&self, listener: Listener) -> ListenerId;

    /// Unsubscribe a listener. Returns `false` if it was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;

    /// The node's current value.
    fn value(&self) -> f64;
}

/// Shared reference to an animated node, embeddable in a style tree.
///
/// Two handles are equal only when they point at the same node.
#[derive(Clone)]
pub struct AnimatedHandle(Arc<dyn AnimatedNode>);

impl AnimatedHandle {
    /// Wrap an animated node.
    pub fn new(node: Arc<dyn AnimatedNode>) -> Self {
        Self(node)
    }

    /// Access the underlying node.
    pub fn node(&self) -> &dyn AnimatedNode {
        self.0.as_ref()
    }

    /// The node's current value.
    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

impl fmt::Debug for AnimatedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnimatedHandle").field(&self.0).finish()
    }
}

impl PartialEq for AnimatedHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<N: AnimatedNode + 'static> From<Arc<N>> for AnimatedHandle {
    fn from(node: Arc<N>) -> Self {
        Self(node)
    }
}

struct AnimatedState {
    value: f64,
    listeners: SlotMap<ListenerId, Arc<dyn Fn(f64) + Send + Sync>>,
}

/// A simple observable value implementing [`AnimatedNode`].
pub struct AnimatedValue {
    state: Mutex<AnimatedState>,
}

impl AnimatedValue {
    /// Create a new animated value, ready to be shared.
    pub fn new(initial: f64) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(AnimatedState {
                value: initial,
                listeners: SlotMap::with_key(),
            }),
        })
    }

    /// Create a style handle pointing at this value.
    pub fn handle(self: &Arc<Self>) -> AnimatedHandle {
        AnimatedHandle::from(Arc::clone(self))
    }

    /// Subscribe a closure to value changes.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        AnimatedNode::add_listener(self, Box::new(listener))
    }

    /// Update the value and notify listeners.
    ///
    /// Listeners run after the lock is released, so they may read the value
    /// or register further listeners.
    pub fn set_value(&self, value: f64) {
        let listeners: Vec<_> = {
            let mut state = self.state.lock();
            if state.value == value {
                return;
            }
            state.value = value;
            state.listeners.values().cloned().collect()
        };
        for listener in listeners {
            listener(value);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl AnimatedNode for AnimatedValue {
    fn add_listener(&self, listener: Listener) -> ListenerId {
        self.state.lock().listeners.insert(Arc::from(listener))
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.state.lock().listeners.remove(id).is_some()
    }

    fn value(&self) -> f64 {
        self.state.lock().value
    }
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("AnimatedValue")
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}
