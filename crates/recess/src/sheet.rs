//! Stylesheets: selector keys mapped to declarations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::declaration::{Declaration, Value};
use crate::logging::targets;
use crate::selector::SelectorKey;
use crate::{Error, Result};

/// A read-only mapping from selector to declaration.
///
/// Sheets are usually written as nested records, in code or in a JSON or TOML
/// file:
///
/// ```toml
/// [Button]
/// padding = 8
///
/// [Button.":hover"]
/// opacity = 0.8
///
/// [".toolbar"]
/// height = 32
///
/// [".toolbar".Button]
/// padding = 4
/// ```
///
/// Records keyed by a selector inside a declaration (like `Button` under
/// `.toolbar`) style that node's children; see
/// [`StyleSheet::from_declaration`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: HashMap<SelectorKey, Declaration>,
    source_path: Option<PathBuf>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the sheet that styles a node's children.
    ///
    /// Every entry whose key parses as a selector and whose value is a record
    /// becomes a rule. Ordinary properties and reserved entries are ignored.
    pub fn from_declaration(declaration: &Declaration) -> Self {
        let rules = declaration
            .iter()
            .filter_map(|(key, value)| {
                let selector = SelectorKey::parse(key)?;
                match value {
                    Value::Object(map) => Some((selector, Declaration::from(map.clone()))),
                    _ => None,
                }
            })
            .collect();

        Self {
            rules,
            source_path: None,
        }
    }

    /// Build a sheet from a JSON value whose root is an object.
    pub fn from_value(value: Value) -> Result<Self> {
        let found = value_kind(&value);
        match Declaration::from_value(value) {
            Some(declaration) => Ok(Self::from_declaration(&declaration)),
            None => Err(Error::NotATable { found }),
        }
    }

    /// Parse a stylesheet from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let sheet = Self::from_value(value)?;
        tracing::debug!(target: targets::SHEET, rules = sheet.len(), "parsed JSON stylesheet");
        Ok(sheet)
    }

    /// Parse a stylesheet from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        // A TOML document is always a table at the root.
        let value: Value = toml::from_str(text)?;
        let sheet = Self::from_value(value)?;
        tracing::debug!(target: targets::SHEET, rules = sheet.len(), "parsed TOML stylesheet");
        Ok(sheet)
    }

    /// Load a stylesheet from a `.json` or `.toml` file.
    ///
    /// The source path is kept on the sheet.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut sheet = match extension.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => return Err(Error::unsupported_format(path)),
        };

        tracing::debug!(
            target: targets::SHEET,
            path = %path.display(),
            rules = sheet.len(),
            "loaded stylesheet"
        );
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Insert a rule, replacing any rule with the same selector.
    pub fn insert(&mut self, selector: SelectorKey, declaration: Declaration) -> Option<Declaration> {
        self.rules.insert(selector, declaration)
    }

    /// Add a rule from selector text.
    pub fn add_rule(&mut self, selector: &str, declaration: Declaration) -> Result<()> {
        let key = SelectorKey::parse(selector).ok_or_else(|| {
            Error::invalid_selector(selector, "expected a kind, a .class, or a .compound.class")
        })?;
        self.rules.insert(key, declaration);
        Ok(())
    }

    /// Add a rule, builder style.
    pub fn rule(mut self, selector: SelectorKey, declaration: Declaration) -> Self {
        self.rules.insert(selector, declaration);
        self
    }

    /// Look up the declaration for a selector.
    pub fn get(&self, selector: &SelectorKey) -> Option<&Declaration> {
        self.rules.get(selector)
    }

    /// The file this sheet was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&SelectorKey, &Declaration)> {
        self.rules.iter()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
