//! Pointer events and handler lists.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::state::{PseudoKey, Transition};

/// Pointer events a node can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointerEvent {
    /// Pointer moved onto the node.
    Enter,
    /// Pointer moved off the node.
    Leave,
    /// Pointer button pressed on the node.
    Down,
    /// Pointer button released on the node.
    Up,
}

/// An application-supplied event callback.
///
/// Two callbacks are equal when they share the same allocation, which keeps
/// structural comparison of trees meaningful after cloning.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(PointerEvent) + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(PointerEvent) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, event: PointerEvent) {
        (self.0)(event)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// One entry of a node's handler list.
#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    /// Application code.
    Callback(Callback),
    /// Pseudo-state change synthesized by the resolver.
    Transition(Transition),
}

/// Ordered handler lists per pointer event.
///
/// Handlers for an event run in list order. Synthesized transitions are kept
/// at the front, ahead of the application handlers they chain to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handlers {
    by_event: BTreeMap<PointerEvent, Vec<Handler>>,
}

impl Handlers {
    /// Create an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an application callback.
    pub fn push(&mut self, event: PointerEvent, callback: Callback) {
        self.by_event
            .entry(event)
            .or_default()
            .push(Handler::Callback(callback));
    }

    /// Attach a synthesized transition ahead of the existing handlers.
    ///
    /// Any transition already attached to `event` for the same pseudo-state
    /// slot is replaced, so resolving a tree repeatedly never stacks
    /// duplicates.
    pub fn attach(&mut self, event: PointerEvent, transition: Transition) {
        let list = self.by_event.entry(event).or_default();
        let key = transition.key().clone();
        list.retain(|handler| !targets(handler, &key));
        list.insert(0, Handler::Transition(transition));
    }

    /// Remove every synthesized transition, keeping application callbacks.
    pub fn clear_transitions(&mut self) {
        for list in self.by_event.values_mut() {
            list.retain(|handler| matches!(handler, Handler::Callback(_)));
        }
        self.by_event.retain(|_, list| !list.is_empty());
    }

    /// Handlers registered for an event.
    pub fn get(&self, event: PointerEvent) -> &[Handler] {
        self.by_event.get(&event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Run the handlers for an event.
    ///
    /// Callbacks are invoked in list order; the transitions found along the
    /// way are returned in the same order for the host to apply.
    pub fn fire(&self, event: PointerEvent) -> Vec<Transition> {
        let mut transitions = vec![];
        for handler in self.get(event) {
            match handler {
                Handler::Callback(callback) => callback.call(event),
                Handler::Transition(transition) => transitions.push(transition.clone()),
            }
        }
        transitions
    }

    /// Total number of handlers across all events.
    pub fn len(&self) -> usize {
        self.by_event.values().map(Vec::len).sum()
    }

    /// Check whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn targets(handler: &Handler, key: &PseudoKey) -> bool {
    matches!(handler, Handler::Transition(t) if t.key() == key)
}
