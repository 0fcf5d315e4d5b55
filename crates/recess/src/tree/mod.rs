//! The component tree consumed by the resolver.
//!
//! This is the small surface recess needs from a retained-mode UI tree: node
//! inspection, clone-with-props and clone-with-children on [`Element`], and
//! pointer handler lists. Rendering, diffing, and event routing stay with the
//! host runtime.

mod event;
mod node;

pub use event::{Callback, Handler, Handlers, PointerEvent};
pub use node::{Element, Node};
