use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed form of a validation path key
///
/// Entries travel as dash-joined strings (`base`, `base-<i>`,
/// `base-<i>-<j>`); the renumbering pass parses them into this type so
/// positional arithmetic never happens on raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PathKey {
    /// Top-level field, no positional component
    Field { name: String },
    /// Element of a single-level repeated collection
    Element { base: String, index: usize },
    /// Element of a two-level repeated collection
    Nested {
        base: String,
        outer: usize,
        inner: usize,
    },
}

impl PathKey {
    pub fn field(name: impl Into<String>) -> Self {
        PathKey::Field { name: name.into() }
    }

    pub fn element(base: impl Into<String>, index: usize) -> Self {
        PathKey::Element {
            base: base.into(),
            index,
        }
    }

    pub fn nested(base: impl Into<String>, outer: usize, inner: usize) -> Self {
        PathKey::Nested {
            base: base.into(),
            outer,
            inner,
        }
    }

    /// Parse a dash-joined key
    ///
    /// At most the two trailing `-<integer>` components are positional;
    /// anything else is the base name. A key with no trailing integers
    /// is a plain field key.
    pub fn parse(key: &str) -> Self {
        let segments: Vec<&str> = key.split('-').collect();
        let numeric_tail: Vec<usize> = segments
            .iter()
            .rev()
            .take(2)
            .map_while(|segment| segment.parse::<usize>().ok())
            .collect();

        match numeric_tail.len() {
            2 if segments.len() > 2 => {
                let base = segments[..segments.len() - 2].join("-");
                // reversed during collection: [inner, outer]
                PathKey::nested(base, numeric_tail[1], numeric_tail[0])
            }
            1 if segments.len() > 1 => {
                let base = segments[..segments.len() - 1].join("-");
                PathKey::element(base, numeric_tail[0])
            }
            _ => PathKey::field(key),
        }
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Field { name } => write!(f, "{name}"),
            PathKey::Element { base, index } => write!(f, "{base}-{index}"),
            PathKey::Nested { base, outer, inner } => write!(f, "{base}-{outer}-{inner}"),
        }
    }
}
