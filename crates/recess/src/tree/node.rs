//! Node descriptions.

use std::collections::BTreeMap;

use super::{Callback, Handlers, PointerEvent};
use crate::declaration::{Declaration, Value};
use crate::state::Transition;

/// A child slot in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A styled element.
    Element(Element),
    /// Opaque text content.
    Text(String),
    /// Any other child content (placeholders, conditionally absent nodes).
    Empty,
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns true for element nodes.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Borrow the element, if this is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Borrow the text, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An element description.
///
/// Elements are values: the resolver never mutates one in place, it builds a
/// new element through the `with_*` methods.
///
/// ```
/// use recess::declaration::Declaration;
/// use recess::tree::{Element, Node};
///
/// let card = Element::new("Card")
///     .class("elevated wide")
///     .style(Declaration::new().with("width", 320))
///     .child(Element::new("Title").child("Hello"))
///     .child("body text");
///
/// assert_eq!(card.classes(), vec!["elevated", "wide"]);
/// assert_eq!(card.children().len(), 2);
/// assert!(matches!(card.children()[1], Node::Text(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    kind: String,
    class: Option<String>,
    style: Declaration,
    handlers: Handlers,
    attributes: BTreeMap<String, Value>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Set the space-separated class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the inline style.
    pub fn style(mut self, style: Declaration) -> Self {
        self.style = style;
        self
    }

    /// Set an opaque attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Register an application callback for a pointer event.
    pub fn on<F>(mut self, event: PointerEvent, f: F) -> Self
    where
        F: Fn(PointerEvent) + Send + Sync + 'static,
    {
        self.handlers.push(event, Callback::new(f));
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children_from<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// The element kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The raw class list, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Class tokens in declared order.
    ///
    /// Tokens are separated by whitespace. A dot also separates tokens, so
    /// `class("a.b")` carries classes `a` and `b`, matching how `.a.b` reads in
    /// a sheet.
    pub fn classes(&self) -> Vec<&str> {
        self.class
            .as_deref()
            .map(|c| {
                c.split(|ch: char| ch.is_whitespace() || ch == '.')
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The inline style.
    pub fn inline_style(&self) -> &Declaration {
        &self.style
    }

    /// The pointer handlers.
    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// An opaque attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Replace the inline style.
    pub fn with_style(mut self, style: Declaration) -> Self {
        self.style = style;
        self
    }

    /// Replace the handlers.
    pub fn with_handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Find a descendant element by child positions.
    ///
    /// An empty path returns this element.
    pub fn descendant(&self, path: &[usize]) -> Option<&Element> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children.get(index)?.as_element()?.descendant(rest),
        }
    }

    /// Run this element's handlers for an event.
    pub fn fire(&self, event: PointerEvent) -> Vec<Transition> {
        self.handlers.fire(event)
    }
}
