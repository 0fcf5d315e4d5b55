//! The recursive style resolver.

use std::collections::BTreeMap;

use crate::declaration::Declaration;
use crate::logging::targets;
use crate::selector::SelectorKey;
use crate::sheet::StyleSheet;
use crate::state::{InteractionState, NodeKey, PseudoState, Transition};
use crate::tree::{Element, Node};

/// Resolves stylesheet declarations into a tree's inline styles.
///
/// For every element the resolver:
/// 1. Matches the candidate selectors (kind, each class, the class compound)
///    against the sheet, expanding `@includes` of each match
/// 2. Overlays `:hover` / `:active` declarations whose state is active
/// 3. Deep-merges the matches in candidate order into the aggregate style
/// 4. Overlays the element's own inline style, which always wins
/// 5. Attaches pseudo-state transitions to the pointer handlers
/// 6. Resolves the children against the element's style, if the aggregate
///    is non-empty
///
/// The resolver only reads interaction state. Pointer handlers carry
/// [`Transition`]s that the host applies when the events fire.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    state: &'a InteractionState,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver reading the given interaction state.
    pub fn new(state: &'a InteractionState) -> Self {
        Self { state }
    }

    /// Resolve a styled root.
    pub fn resolve(&self, node: &Node, sheet: &StyleSheet) -> Node {
        self.resolve_at(node, sheet, None, 0)
    }

    /// Resolve a node at a known tree position.
    ///
    /// Text and empty nodes are returned unchanged.
    pub fn resolve_at(
        &self,
        node: &Node,
        sheet: &StyleSheet,
        parent: Option<&NodeKey>,
        index: usize,
    ) -> Node {
        match node {
            Node::Element(element) => {
                Node::Element(self.resolve_element(element, sheet, parent, index))
            }
            other => other.clone(),
        }
    }

    /// Resolve an element at a known tree position.
    pub fn resolve_element(
        &self,
        element: &Element,
        sheet: &StyleSheet,
        parent: Option<&NodeKey>,
        index: usize,
    ) -> Element {
        let classes = element.classes();
        let key = NodeKey::under(parent, element.kind(), &classes, index);

        let matched = matched_rules(sheet, element.kind(), &classes);
        let matched_count = matched.len();

        let mut aggregate = Declaration::new();
        let mut pseudo: BTreeMap<PseudoState, Declaration> = BTreeMap::new();

        for (_, mut declaration) in matched {
            let overlays: Vec<(PseudoState, Declaration)> = PseudoState::ALL
                .into_iter()
                .filter_map(|state| declaration.pseudo(state).map(|d| (state, d)))
                .collect();

            for (state, overlay) in overlays {
                if self.state.is_active(&key.pseudo(state)) {
                    declaration.extend(&overlay);
                }
                pseudo.entry(state).or_default().merge(&overlay);
            }

            aggregate.merge(&declaration);
        }

        // Transitions from an earlier pass may name a slot the node no longer has.
        let mut handlers = element.handlers().clone();
        handlers.clear_transitions();
        for (state, declaration) in pseudo {
            let slot = key.pseudo(state);
            handlers.attach(
                state.activating_event(),
                Transition::Activate {
                    key: slot.clone(),
                    declaration,
                },
            );
            handlers.attach(state.deactivating_event(), Transition::Deactivate { key: slot });
        }

        let mut style = aggregate.clone();
        style.extend(element.inline_style());

        tracing::trace!(
            target: targets::RESOLVE,
            node = %key,
            matched = matched_count,
            properties = style.len(),
            "resolved node"
        );

        let mut resolved = element.clone().with_handlers(handlers);

        if aggregate.is_empty() {
            tracing::trace!(target: targets::RESOLVE, node = %key, "no sheet styles, children left as given");
        } else {
            let child_sheet = StyleSheet::from_declaration(&style);
            let children: Vec<Node> = element
                .children()
                .iter()
                .enumerate()
                .filter_map(|(i, child)| match child {
                    Node::Element(child) => Some(Node::Element(
                        self.resolve_element(child, &child_sheet, Some(&key), i),
                    )),
                    Node::Text(text) => Some(Node::Text(text.clone())),
                    Node::Empty => None,
                })
                .collect();

            if !children.is_empty() {
                resolved = resolved.with_children(children);
            }
        }

        resolved.with_style(style)
    }
}

/// Resolve a tree against a sheet and the current interaction state.
///
/// ```
/// use recess::prelude::*;
/// use serde_json::json;
///
/// let sheet = StyleSheet::from_value(json!({
///     "Box": { "color": "red" },
///     ".a": { "color": "blue" },
/// }))
/// .unwrap();
///
/// let tree = Node::from(Element::new("Box").class("a"));
/// let resolved = resolve(&tree, &sheet, &InteractionState::new());
///
/// let style = resolved.as_element().unwrap().inline_style();
/// assert_eq!(style.get("color"), Some(&json!("blue")));
/// ```
pub fn resolve(node: &Node, sheet: &StyleSheet, state: &InteractionState) -> Node {
    StyleResolver::new(state).resolve(node, sheet)
}

/// Matching declarations in merge order, with `@includes` expanded.
fn matched_rules(sheet: &StyleSheet, kind: &str, classes: &[&str]) -> Vec<(SelectorKey, Declaration)> {
    SelectorKey::candidates(kind, classes)
        .into_iter()
        .filter_map(|selector| {
            let declaration = sheet.get(&selector)?.expand_includes();
            Some((selector, declaration))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Handler, PointerEvent};
    use serde_json::{json, Value};

    fn sheet(value: Value) -> StyleSheet {
        StyleSheet::from_value(value).unwrap()
    }

    fn style_of(node: &Node) -> &Declaration {
        node.as_element().unwrap().inline_style()
    }

    #[test]
    fn matched_rules_follow_candidate_order() {
        let sheet = sheet(json!({
            ".a.b": { "w": 3 },
            ".b": { "w": 2 },
            "Box": { "w": 0 },
            ".a": { "w": 1 },
        }));

        let order: Vec<String> = matched_rules(&sheet, "Box", &["a", "b"])
            .iter()
            .map(|(selector, _)| selector.to_string())
            .collect();
        assert_eq!(order, ["Box", ".a", ".b", ".a.b"]);
    }

    #[test]
    fn text_nodes_pass_through() {
        let state = InteractionState::new();
        let node = Node::text("hello");
        assert_eq!(resolve(&node, &sheet(json!({ "Box": { "a": 1 } })), &state), node);
    }

    #[test]
    fn aggregate_deep_merges_matches() {
        let sheet = sheet(json!({
            "Box": { "border": { "width": 1, "color": "gray" } },
            ".a": { "border": { "color": "red" } },
        }));
        let node = Node::from(Element::new("Box").class("a"));
        let resolved = resolve(&node, &sheet, &InteractionState::new());

        assert_eq!(
            style_of(&resolved).get("border"),
            Some(&json!({ "width": 1, "color": "red" }))
        );
    }

    #[test]
    fn inline_style_overlays_shallowly() {
        let sheet = sheet(json!({ "Box": { "border": { "width": 1, "color": "gray" } } }));
        let inline = Declaration::from_value(json!({ "border": { "color": "red" } })).unwrap();
        let node = Node::from(Element::new("Box").style(inline));
        let resolved = resolve(&node, &sheet, &InteractionState::new());

        assert_eq!(style_of(&resolved).get("border"), Some(&json!({ "color": "red" })));
    }

    #[test]
    fn hover_attaches_one_transition_pair_per_node() {
        let sheet = sheet(json!({
            "Box": { ":hover": { "color": "red" } },
            ".a": { ":hover": { "opacity": 0.5 } },
        }));
        let node = Node::from(Element::new("Box").class("a"));
        let resolved = resolve(&node, &sheet, &InteractionState::new());
        let handlers = resolved.as_element().unwrap().handlers();

        let enter = handlers.get(PointerEvent::Enter);
        assert_eq!(enter.len(), 1);
        match &enter[0] {
            Handler::Transition(Transition::Activate { key, declaration }) => {
                assert_eq!(key.to_string(), "Box.a_0_hover");
                assert_eq!(
                    declaration,
                    &Declaration::from_value(json!({ "color": "red", "opacity": 0.5 })).unwrap()
                );
            }
            other => panic!("unexpected handler: {:?}", other),
        }
        assert_eq!(handlers.get(PointerEvent::Leave).len(), 1);
        assert!(handlers.get(PointerEvent::Down).is_empty());
    }

    #[test]
    fn active_hover_overlays_each_declarations_own_pseudo() {
        let sheet = sheet(json!({
            "Box": { "color": "black", ":hover": { "color": "red" } },
            ".a": { "opacity": 1, ":hover": { "opacity": 0.5 } },
        }));
        let node = Node::from(Element::new("Box").class("a"));

        let mut state = InteractionState::new();
        state.activate(
            NodeKey::root("Box", &["a"], 0).pseudo(PseudoState::Hover),
            Declaration::new(),
        );
        let resolved = resolve(&node, &sheet, &state);

        assert_eq!(style_of(&resolved).get("color"), Some(&json!("red")));
        assert_eq!(style_of(&resolved).get("opacity"), Some(&json!(0.5)));
    }

    #[test]
    fn children_use_the_parents_style_as_sheet() {
        let sheet = sheet(json!({
            "List": {
                "gap": 4,
                "Item": { "padding": 2 },
            },
            "Item": { "padding": 99 },
        }));
        let tree = Node::from(Element::new("List").child(Element::new("Item")));
        let resolved = resolve(&tree, &sheet, &InteractionState::new());

        let item = resolved.as_element().unwrap().descendant(&[0]).unwrap();
        assert_eq!(item.inline_style().get("padding"), Some(&json!(2)));
    }

    #[test]
    fn empty_children_are_dropped_when_rewritten() {
        let sheet = sheet(json!({ "Box": { "color": "red" } }));
        let tree = Node::from(
            Element::new("Box")
                .child(Node::Empty)
                .child("text")
                .child(Element::new("Leaf")),
        );
        let resolved = resolve(&tree, &sheet, &InteractionState::new());
        let children = resolved.as_element().unwrap().children();

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].as_text(), Some("text"));
        assert!(children[1].is_element());
    }

    #[test]
    fn only_empty_children_are_kept_as_given() {
        let sheet = sheet(json!({ "Box": { "color": "red" } }));
        let tree = Node::from(Element::new("Box").child(Node::Empty));
        let resolved = resolve(&tree, &sheet, &InteractionState::new());

        assert_eq!(resolved.as_element().unwrap().children(), &[Node::Empty]);
    }
}
