//! SCSS-like styling for declarative component trees.
//!
//! Recess resolves a nested stylesheet into the inline styles of a
//! retained-mode UI tree, once per render pass:
//!
//! - **Selectors**: node kind, `.class`, and compound `.class.other` keys
//! - **Nesting**: selector-keyed records inside a declaration style the
//!   node's children
//! - **Inclusion**: `@includes` merges shared declarations in before the
//!   declaration's own entries
//! - **Pseudo-states**: `:hover` and `:active` driven by pointer events
//! - **Precedence**: kind, then each class, then the compound; inline style
//!   always wins
//!
//! Resolution is pure: it reads an [`InteractionState`](state::InteractionState)
//! and returns a new tree whose pointer handlers carry the
//! [`Transition`](state::Transition)s to apply when they fire.
//!
//! # Example
//!
//! ```
//! use recess::prelude::*;
//! use serde_json::json;
//!
//! let sheet = StyleSheet::from_value(json!({
//!     "Button": {
//!         "padding": 8,
//!         ":hover": { "opacity": 0.8 },
//!     },
//! }))
//! .unwrap();
//! let tree = Node::from(Element::new("Button").child("Save"));
//!
//! let mut host = LocalHost::new();
//! let resolved = render(&host, &tree, &sheet);
//! let button = resolved.as_element().unwrap();
//! assert_eq!(button.inline_style().get("opacity"), None);
//!
//! // The pointer enters: the host commits the new state and renders again
//! dispatch(&mut host, button, PointerEvent::Enter);
//! host.commit();
//!
//! let hovered = render(&host, &tree, &sheet);
//! let style = hovered.as_element().unwrap().inline_style();
//! assert_eq!(style.get("opacity"), Some(&json!(0.8)));
//! ```

pub mod declaration;
pub mod host;
pub mod logging;
pub mod resolve;
pub mod selector;
pub mod sheet;
pub mod state;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use resolve::resolve;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::declaration::{Declaration, Value};
    pub use crate::host::{dispatch, render, DispatchOutcome, LocalHost, StyleHost};
    pub use crate::resolve::{resolve, StyleResolver};
    pub use crate::selector::SelectorKey;
    pub use crate::sheet::StyleSheet;
    pub use crate::state::{InteractionState, NodeKey, PseudoKey, PseudoState, Transition};
    pub use crate::tree::{Callback, Element, Handler, Handlers, Node, PointerEvent};
}
