//! Containment — outcome of a point-in-polygon check.

use serde::{Deserialize, Serialize};

/// Whether a coordinate lies within a stored polygon's area.
///
/// Boundary points count as inside: the store evaluates the check with a
/// covers-style predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Containment {
    Inside,
    Outside,
}

impl Containment {
    /// Map the raw predicate result returned by the store.
    #[must_use]
    pub const fn from_covers(covers: bool) -> Self {
        if covers { Self::Inside } else { Self::Outside }
    }
}
