//! Host integration: rendering against host state and dispatching events.
//!
//! The host owns the [`InteractionState`]. A render pass reads it through
//! [`render`]; pointer events go through [`dispatch`], which turns the
//! transitions carried by an element's handlers into a single update request.
//! The host decides when the requested state takes effect (usually the next
//! render pass).

use crate::logging::targets;
use crate::sheet::StyleSheet;
use crate::state::InteractionState;
use crate::tree::{Element, Node, PointerEvent};

/// The render/update coordinator recess runs under.
pub trait StyleHost {
    /// The committed interaction state read by render passes.
    ///
    /// `None` means the host does not track interaction state, which makes
    /// pseudo-state styling inert.
    fn interaction_state(&self) -> Option<&InteractionState>;

    /// The most recently requested state that has not been committed yet.
    ///
    /// Dispatch builds on this so that several events between two render
    /// passes are not lost.
    fn pending_interaction_state(&self) -> Option<&InteractionState> {
        None
    }

    /// Schedule `next` to become the interaction state.
    fn request_update(&mut self, next: InteractionState);
}

/// What happened when an event was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The element has no synthesized transitions for the event.
    NoTransitions,
    /// The transitions did not change the interaction state.
    Unchanged,
    /// A new interaction state was requested from the host.
    UpdateRequested,
    /// The host has no interaction state; the transitions were dropped.
    Inert,
}

/// Resolve a tree against the host's committed interaction state.
pub fn render<H: StyleHost + ?Sized>(host: &H, node: &Node, sheet: &StyleSheet) -> Node {
    match host.interaction_state() {
        Some(state) => crate::resolve(node, sheet, state),
        None => {
            tracing::trace!(target: targets::HOST, "host has no interaction state, pseudo-states inert");
            crate::resolve(node, sheet, &InteractionState::new())
        }
    }
}

/// Fire an element's handlers for `event` and forward the resulting
/// transitions to the host.
///
/// Application callbacks always run. An update is requested only when the
/// transitions actually change the latest known state, so a second `Enter`
/// on a node that is already hovered, or a `Leave` on one that is not,
/// returns [`DispatchOutcome::Unchanged`] and leaves the host untouched.
/// Re-activating a slot with a different declaration counts as a change.
pub fn dispatch<H: StyleHost + ?Sized>(
    host: &mut H,
    element: &Element,
    event: PointerEvent,
) -> DispatchOutcome {
    let transitions = element.fire(event);
    if transitions.is_empty() {
        return DispatchOutcome::NoTransitions;
    }

    let latest = host
        .pending_interaction_state()
        .or(host.interaction_state());
    let Some(latest) = latest else {
        tracing::debug!(
            target: targets::HOST,
            ?event,
            dropped = transitions.len(),
            "host has no interaction state, dropping transitions"
        );
        return DispatchOutcome::Inert;
    };

    let mut next = latest.clone();
    if !next.apply_all(&transitions) {
        return DispatchOutcome::Unchanged;
    }

    tracing::debug!(
        target: targets::HOST,
        ?event,
        transitions = transitions.len(),
        active = next.len(),
        "requesting interaction state update"
    );
    host.request_update(next);
    DispatchOutcome::UpdateRequested
}

/// An in-memory host.
///
/// Requested states are held as pending until [`LocalHost::commit`] is called,
/// mirroring a runtime that applies state on its next render pass.
#[derive(Debug, Clone)]
pub struct LocalHost {
    state: Option<InteractionState>,
    pending: Option<InteractionState>,
    update_requests: usize,
}

impl LocalHost {
    /// Create a host with an empty interaction state.
    pub fn new() -> Self {
        Self {
            state: Some(InteractionState::new()),
            pending: None,
            update_requests: 0,
        }
    }

    /// Create a host that does not track interaction state.
    pub fn detached() -> Self {
        Self {
            state: None,
            pending: None,
            update_requests: 0,
        }
    }

    /// Apply the pending state. Returns true if there was one.
    pub fn commit(&mut self) -> bool {
        match self.pending.take() {
            Some(next) => {
                self.state = Some(next);
                true
            }
            None => false,
        }
    }

    /// Check whether an update is waiting to be committed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of update requests received so far.
    pub fn update_requests(&self) -> usize {
        self.update_requests
    }
}

impl Default for LocalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleHost for LocalHost {
    fn interaction_state(&self) -> Option<&InteractionState> {
        self.state.as_ref()
    }

    fn pending_interaction_state(&self) -> Option<&InteractionState> {
        self.pending.as_ref()
    }

    fn request_update(&mut self, next: InteractionState) {
        self.update_requests += 1;
        self.pending = Some(next);
    }
}
