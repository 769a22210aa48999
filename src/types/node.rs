//! Canonical node identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// An opaque, canonical node label.
///
/// Every identifier is stored as text. Integers canonicalize to their decimal
/// form, so `NodeId::from(3)` and `NodeId::from("3")` name the same node.
/// Ordering is lexicographic on the text (`"10" < "2"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from anything convertible into one.
    pub fn new(id: impl Into<NodeId>) -> Self {
        id.into()
    }

    /// The canonical text of this identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning its canonical text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers work in tabular renderings
        f.pad(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<char> for NodeId {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

macro_rules! node_id_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NodeId {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

node_id_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
