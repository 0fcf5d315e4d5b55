//! Style declarations.
//!
//! A [`Declaration`] is the value side of a stylesheet entry: a record of
//! property names to JSON-like values. Besides ordinary properties it may carry
//! the reserved entries listed in [`reserved`], and records keyed by selectors
//! that style the node's children.

mod merge;

use serde::{Deserialize, Serialize};
use serde_json::Map;

pub use serde_json::Value;

use crate::state::PseudoState;

/// Reserved declaration keys.
pub mod reserved {
    /// Declarations merged in before the declaration's own entries.
    pub const INCLUDES: &str = "@includes";
    /// Declaration applied while the pointer is over the node.
    pub const HOVER: &str = ":hover";
    /// Declaration applied while the pointer is pressed on the node.
    pub const ACTIVE: &str = ":active";

    /// Returns true for keys that can never name a selector.
    pub fn is_reserved(key: &str) -> bool {
        key.starts_with('@') || key.starts_with(':')
    }
}

/// A record of style properties.
///
/// # Example
///
/// ```
/// use recess::declaration::Declaration;
///
/// let base = Declaration::new().with("color", "red").with("margin", 4);
/// let mut style = Declaration::new().with("color", "blue");
/// style.merge(&base);
///
/// assert_eq!(style.get("color").and_then(|v| v.as_str()), Some("red"));
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declaration(Map<String, Value>);

impl Declaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a declaration from a JSON value.
    ///
    /// Returns `None` if the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Add a property, builder style.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property, returning the previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(property.into(), value.into())
    }

    /// Remove a property.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.0.remove(property)
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.get(property)
    }

    /// Check whether a property is present.
    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Get a record-valued property as a declaration.
    pub fn record(&self, property: &str) -> Option<Declaration> {
        match self.0.get(property) {
            Some(Value::Object(map)) => Some(Self(map.clone())),
            _ => None,
        }
    }

    /// Get the pseudo-state declaration (`:hover` / `:active`), if present.
    pub fn pseudo(&self, state: PseudoState) -> Option<Declaration> {
        self.record(state.reserved_key())
    }

    /// Number of properties, reserved entries included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the declaration has no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Declaration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Declaration> for Value {
    fn from(declaration: Declaration) -> Self {
        declaration.into_value()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Declaration {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Declaration {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decl(value: Value) -> Declaration {
        Declaration::from_value(value).unwrap()
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Declaration::from_value(json!("red")).is_none());
        assert!(Declaration::from_value(json!([1, 2])).is_none());
        assert!(Declaration::from_value(json!({})).unwrap().is_empty());
    }

    #[test]
    fn pseudo_reads_reserved_records() {
        let style = decl(json!({
            "color": "red",
            ":hover": { "opacity": 0.5 },
            ":active": "not a record",
        }));

        assert_eq!(
            style.pseudo(PseudoState::Hover),
            Some(decl(json!({ "opacity": 0.5 })))
        );
        assert_eq!(style.pseudo(PseudoState::Active), None);
    }

    #[test]
    fn reserved_keys() {
        assert!(reserved::is_reserved(reserved::INCLUDES));
        assert!(reserved::is_reserved(reserved::HOVER));
        assert!(reserved::is_reserved(":focus"));
        assert!(!reserved::is_reserved(".item"));
        assert!(!reserved::is_reserved("Box"));
    }

    #[test]
    fn serializes_transparently() {
        let style = Declaration::new().with("color", "red");
        assert_eq!(serde_json::to_value(&style).unwrap(), json!({ "color": "red" }));

        let parsed: Declaration = serde_json::from_str(r#"{"margin": 2}"#).unwrap();
        assert_eq!(parsed.get("margin"), Some(&json!(2)));
    }
}
