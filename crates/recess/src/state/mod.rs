//! Interaction state for pseudo-state styling.
//!
//! Every styled node is identified by a [`NodeKey`] derived from its position
//! in the tree. Pseudo-state activity is stored per [`PseudoKey`] in an
//! [`InteractionState`] owned by the host, and changed only through
//! [`Transition`]s returned from event dispatch.

mod interaction;
mod key;

pub use interaction::{InteractionState, Transition};
pub use key::{NodeKey, PseudoKey, PseudoState};
