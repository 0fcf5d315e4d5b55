//! Node and pseudo-state keys.

use std::fmt;

use crate::declaration::reserved;
use crate::tree::PointerEvent;

/// One step of a [`NodeKey`] path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct KeySegment {
    /// Node kind followed by its class selectors (e.g., `Button.primary`).
    identity: String,
    /// Position among the parent's children.
    index: usize,
}

/// Deterministic identifier of a node position within one styled tree.
///
/// The key is the path of (identity, sibling index) pairs from the styled root
/// down to the node. Resolving the same tree twice yields the same keys, so
/// pseudo-state recorded against a key survives re-resolution.
///
/// ```
/// use recess::state::NodeKey;
///
/// let root = NodeKey::root("List", &["menu"], 0);
/// let item = root.child("Item", &["entry", "first"], 2);
///
/// assert_eq!(root.to_string(), "List.menu_0");
/// assert_eq!(item.to_string(), "List.menu_0_Item.entry.first_2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    path: Vec<KeySegment>,
}

impl NodeKey {
    /// Key of a styled root.
    pub fn root<S: AsRef<str>>(kind: &str, classes: &[S], index: usize) -> Self {
        Self {
            path: vec![KeySegment::new(kind, classes, index)],
        }
    }

    /// Key of a child of this node.
    pub fn child<S: AsRef<str>>(&self, kind: &str, classes: &[S], index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(KeySegment::new(kind, classes, index));
        Self { path }
    }

    /// Key of a node below `parent`, or a root key when there is no parent.
    pub fn under<S: AsRef<str>>(
        parent: Option<&NodeKey>,
        kind: &str,
        classes: &[S],
        index: usize,
    ) -> Self {
        match parent {
            Some(parent) => parent.child(kind, classes, index),
            None => Self::root(kind, classes, index),
        }
    }

    /// Number of segments from the styled root to this node.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Pseudo-state key for this node.
    pub fn pseudo(&self, state: PseudoState) -> PseudoKey {
        PseudoKey {
            node: self.clone(),
            state,
        }
    }
}

impl KeySegment {
    fn new<S: AsRef<str>>(kind: &str, classes: &[S], index: usize) -> Self {
        let mut identity = kind.to_string();
        for class in classes {
            identity.push('.');
            identity.push_str(class.as_ref());
        }
        Self { identity, index }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{}_{}", segment.identity, segment.index)?;
        }
        Ok(())
    }
}

/// Interaction-driven pseudo-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PseudoState {
    /// Pointer is over the node.
    Hover,
    /// Pointer is pressed on the node.
    Active,
}

impl PseudoState {
    /// All pseudo-states, in evaluation order.
    pub const ALL: [PseudoState; 2] = [PseudoState::Hover, PseudoState::Active];

    /// Declaration key holding this state's styles.
    pub fn reserved_key(self) -> &'static str {
        match self {
            Self::Hover => reserved::HOVER,
            Self::Active => reserved::ACTIVE,
        }
    }

    /// Event that turns the state on.
    pub fn activating_event(self) -> PointerEvent {
        match self {
            Self::Hover => PointerEvent::Enter,
            Self::Active => PointerEvent::Down,
        }
    }

    /// Event that turns the state off.
    pub fn deactivating_event(self) -> PointerEvent {
        match self {
            Self::Hover => PointerEvent::Leave,
            Self::Active => PointerEvent::Up,
        }
    }

    /// Name used as the key suffix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for PseudoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node's pseudo-state slot in the interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PseudoKey {
    /// The node the state belongs to.
    pub node: NodeKey,
    /// Which pseudo-state.
    pub state: PseudoState,
}

impl fmt::Display for PseudoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.node, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_CLASSES: [&str; 0] = [];

    #[test]
    fn keys_are_deterministic() {
        let a = NodeKey::root("Box", &["a", "b"], 0).child("Text", &NO_CLASSES, 3);
        let b = NodeKey::root("Box", &["a", "b"], 0).child("Text", &NO_CLASSES, 3);
        assert_eq!(a, b);
        assert_eq!(a.depth(), 2);
    }

    #[test]
    fn sibling_index_distinguishes_keys() {
        let parent = NodeKey::root("List", &NO_CLASSES, 0);
        assert_ne!(
            parent.child("Item", &NO_CLASSES, 0),
            parent.child("Item", &NO_CLASSES, 1)
        );
    }

    #[test]
    fn ancestry_distinguishes_keys() {
        let left = NodeKey::root("Row", &NO_CLASSES, 0).child("Cell", &NO_CLASSES, 0);
        let right = NodeKey::root("Row", &NO_CLASSES, 1).child("Cell", &NO_CLASSES, 0);
        assert_ne!(left, right);
    }

    #[test]
    fn under_without_parent_is_root() {
        assert_eq!(
            NodeKey::under(None, "Box", &NO_CLASSES, 0),
            NodeKey::root("Box", &NO_CLASSES, 0)
        );
    }

    #[test]
    fn pseudo_key_display() {
        let key = NodeKey::root("Button", &["primary"], 0);
        assert_eq!(key.pseudo(PseudoState::Hover).to_string(), "Button.primary_0_hover");
        assert_eq!(key.pseudo(PseudoState::Active).to_string(), "Button.primary_0_active");
    }

    #[test]
    fn pseudo_state_events() {
        assert_eq!(PseudoState::Hover.activating_event(), PointerEvent::Enter);
        assert_eq!(PseudoState::Hover.deactivating_event(), PointerEvent::Leave);
        assert_eq!(PseudoState::Active.activating_event(), PointerEvent::Down);
        assert_eq!(PseudoState::Active.deactivating_event(), PointerEvent::Up);
    }
}
