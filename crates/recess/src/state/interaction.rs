//! The interaction-state store and its transitions.

use std::collections::HashMap;

use super::PseudoKey;
use crate::declaration::Declaration;

/// A requested change to the interaction state.
///
/// Transitions are produced by handlers synthesized during resolution and
/// applied by the host. Resolution itself never writes interaction state.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Record the pseudo-state as active with its declaration.
    Activate {
        key: PseudoKey,
        declaration: Declaration,
    },
    /// Clear the pseudo-state.
    Deactivate { key: PseudoKey },
}

impl Transition {
    /// The pseudo-state slot this transition targets.
    pub fn key(&self) -> &PseudoKey {
        match self {
            Self::Activate { key, .. } | Self::Deactivate { key } => key,
        }
    }
}

/// Active pseudo-states, keyed by node position.
///
/// Entries are added on the activating pointer event and removed on the
/// matching deactivating event; nothing else prunes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    active: HashMap<PseudoKey, Declaration>,
}

impl InteractionState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a pseudo-state is active.
    pub fn is_active(&self, key: &PseudoKey) -> bool {
        self.active.contains_key(key)
    }

    /// The declaration recorded when the pseudo-state was activated.
    pub fn get(&self, key: &PseudoKey) -> Option<&Declaration> {
        self.active.get(key)
    }

    /// Mark a pseudo-state active. Returns true if the state changed.
    pub fn activate(&mut self, key: PseudoKey, declaration: Declaration) -> bool {
        match self.active.insert(key, declaration.clone()) {
            Some(previous) => previous != declaration,
            None => true,
        }
    }

    /// Clear a pseudo-state. Returns true if it was active.
    pub fn deactivate(&mut self, key: &PseudoKey) -> bool {
        self.active.remove(key).is_some()
    }

    /// Apply one transition. Returns true if the state changed.
    pub fn apply(&mut self, transition: &Transition) -> bool {
        match transition {
            Transition::Activate { key, declaration } => {
                self.activate(key.clone(), declaration.clone())
            }
            Transition::Deactivate { key } => self.deactivate(key),
        }
    }

    /// Apply transitions in order. Returns true if any of them changed the state.
    pub fn apply_all<'a, I>(&mut self, transitions: I) -> bool
    where
        I: IntoIterator<Item = &'a Transition>,
    {
        transitions
            .into_iter()
            .fold(false, |changed, transition| self.apply(transition) | changed)
    }

    /// Number of active pseudo-states.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Check whether no pseudo-state is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterate over active pseudo-states.
    pub fn iter(&self) -> impl Iterator<Item = (&PseudoKey, &Declaration)> {
        self.active.iter()
    }

    /// Clear every pseudo-state.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NodeKey, PseudoState};

    fn hover_key() -> PseudoKey {
        NodeKey::root("Button", &["primary"], 0).pseudo(PseudoState::Hover)
    }

    #[test]
    fn activate_and_deactivate() {
        let mut state = InteractionState::new();
        let key = hover_key();
        let hover = Declaration::new().with("opacity", 0.5);

        assert!(state.activate(key.clone(), hover.clone()));
        assert!(state.is_active(&key));
        assert_eq!(state.get(&key), Some(&hover));

        // Same declaration again is not a change
        assert!(!state.activate(key.clone(), hover));

        assert!(state.deactivate(&key));
        assert!(!state.deactivate(&key));
        assert!(state.is_empty());
    }

    #[test]
    fn apply_all_reports_any_change() {
        let mut state = InteractionState::new();
        let key = hover_key();
        let transitions = [
            Transition::Deactivate { key: key.clone() },
            Transition::Activate {
                key: key.clone(),
                declaration: Declaration::new(),
            },
        ];

        assert!(state.apply_all(&transitions));
        assert_eq!(state.len(), 1);
        assert!(!state.apply_all(&transitions[1..]));
    }

    #[test]
    fn hover_and_active_are_separate_slots() {
        let node = NodeKey::root("Button", &["primary"], 0);
        let mut state = InteractionState::new();
        state.activate(node.pseudo(PseudoState::Active), Declaration::new());

        assert!(!state.is_active(&node.pseudo(PseudoState::Hover)));
        assert!(state.is_active(&node.pseudo(PseudoState::Active)));
    }
}
