//! Path lengths that may be unbounded.

use std::fmt;

use serde::Serialize;

use super::Weight;

/// Accumulated path weight.
///
/// Twice the width of [`Weight`]: a walk of fewer than 2^64 edges, each at
/// most 2^63 in magnitude, cannot overflow it.
pub type PathLength = i128;

/// A shortest-path length: finite, or infinite when no path exists.
///
/// Variant order matters: the derived `Ord` puts every `Finite` value below
/// `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Distance {
    /// A reachable target at this total weight.
    Finite(PathLength),
    /// No path.
    Infinite,
}

impl Distance {
    /// Zero-length path.
    pub const ZERO: Distance = Distance::Finite(0);

    /// Whether a path exists.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(self) -> Option<PathLength> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Extend a path by one edge. Infinity absorbs.
    pub fn plus(self, weight: Weight) -> Distance {
        match self {
            Self::Finite(d) => Self::Finite(d + PathLength::from(weight)),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Concatenate two path lengths. Infinity absorbs.
    pub fn join(self, other: Distance) -> Distance {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a + b),
            _ => Self::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(w: Weight) -> Self {
        Self::Finite(w.into())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}
