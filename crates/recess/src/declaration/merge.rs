//! Merge rules for declarations.

use serde_json::{Map, Value};

use super::{reserved, Declaration};
use crate::logging::targets;

impl Declaration {
    /// Deep-merge `other` onto this declaration.
    ///
    /// Nested records merge key by key; every other value, arrays included,
    /// replaces the existing one wholesale.
    pub fn merge(&mut self, other: &Declaration) {
        merge_maps(&mut self.0, &other.0);
    }

    /// Shallow-overlay `other` onto this declaration.
    ///
    /// Top-level entries of `other` replace existing entries, records included.
    pub fn extend(&mut self, other: &Declaration) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// The declarations listed under `@includes`, in order.
    ///
    /// Entries that are not records are skipped, and an `@includes` value that
    /// is not a list contributes nothing.
    pub fn includes(&self) -> Vec<Declaration> {
        let Some(value) = self.0.get(reserved::INCLUDES) else {
            return vec![];
        };
        let Value::Array(items) = value else {
            tracing::trace!(target: targets::RESOLVE, "ignoring @includes that is not a list");
            return vec![];
        };

        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(Declaration(map.clone())),
                _ => {
                    tracing::trace!(target: targets::RESOLVE, "skipping non-record @includes entry");
                    None
                }
            })
            .collect()
    }

    /// Expand `@includes` into a flat declaration.
    ///
    /// Included declarations are expanded themselves, then merged in listed
    /// order so that later inclusions override earlier ones. The declaration's
    /// own entries are merged last and win over everything included. The
    /// result never contains `@includes`.
    pub fn expand_includes(&self) -> Declaration {
        if !self.contains(reserved::INCLUDES) {
            return self.clone();
        }

        let mut expanded = Declaration::new();
        for included in self.includes() {
            expanded.merge(&included.expand_includes());
        }

        let mut own = self.clone();
        own.remove(reserved::INCLUDES);
        expanded.merge(&own);
        expanded
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_maps(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
