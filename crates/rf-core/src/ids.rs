//! Opaque fleet-entity identifier.
//!
//! Entity ids are part of the surface handed to the rendering layer (marker
//! keys), so they stay strings rather than bare indices.  The `car-<n>`
//! spelling is the convention the renderer expects.

use std::fmt;

/// Opaque identifier for one fleet entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    /// The `car-<n>` id used for batch-generated fleet entities.
    pub fn indexed(n: usize) -> Self {
        EntityId(format!("car-{n}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
