//! Selector key definitions and candidate computation.

use std::fmt;

use crate::declaration::reserved;

/// Identifies a stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorKey {
    /// Matches nodes of the given kind (e.g., `Button`).
    Kind(String),
    /// Matches nodes carrying all of these classes. One class is a plain class
    /// selector (`.a`), more than one a compound selector (`.a.b`). Order is
    /// significant: `.a.b` and `.b.a` are different keys.
    Classes(Vec<String>),
}

impl SelectorKey {
    /// Create a kind selector.
    pub fn kind(name: impl Into<String>) -> Self {
        Self::Kind(name.into())
    }

    /// Create a single-class selector.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Classes(vec![name.into()])
    }

    /// Create a compound class selector.
    pub fn compound<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Classes(classes.into_iter().map(Into::into).collect())
    }

    /// Parse selector text.
    ///
    /// Returns `None` for text that cannot address a node: empty text,
    /// reserved keys (`@includes`, `:hover`, ...), and type-qualified forms
    /// such as `Box.a`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || reserved::is_reserved(text) {
            return None;
        }

        if let Some(rest) = text.strip_prefix('.') {
            let classes: Vec<String> = rest
                .split('.')
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            if classes.is_empty() || classes.iter().any(|c| c.contains(char::is_whitespace)) {
                return None;
            }
            return Some(Self::Classes(classes));
        }

        if text.contains('.') || text.contains(char::is_whitespace) {
            return None;
        }
        Some(Self::Kind(text.to_string()))
    }

    /// Compute the candidate keys for a node, in merge order.
    ///
    /// The kind comes first, then one class selector per class in declared
    /// order, then, with two or more classes, the compound of all of them.
    /// Later candidates override earlier ones when their declarations merge.
    pub fn candidates<S: AsRef<str>>(kind: &str, classes: &[S]) -> Vec<SelectorKey> {
        let mut keys = Vec::with_capacity(classes.len() + 2);
        keys.push(Self::kind(kind));
        keys.extend(classes.iter().map(|c| Self::class(c.as_ref())));
        if classes.len() > 1 {
            keys.push(Self::compound(classes.iter().map(|c| c.as_ref())));
        }
        keys
    }

    /// Returns true for selectors combining more than one class.
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Classes(classes) if classes.len() > 1)
    }
}

impl fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(name) => write!(f, "{}", name),
            Self::Classes(classes) => {
                for class in classes {
                    write!(f, ".{}", class)?;
                }
                Ok(())
            }
        }
    }
}
