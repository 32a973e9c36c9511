//! `NodeId` / `ElementId`: strong, zero-cost handles for mesh entities
//!
//! Mesh files identify nodes and elements by plain integers drawn from two
//! independent numbering spaces. Wrapping each space in its own
//! `repr(transparent)` newtype keeps a node id from ever being used where an
//! element id is expected, at no runtime cost.
//!
//! Both types order by their raw value. The propagation algorithms rely on
//! that ordering for every tie-break, so `Ord` here is part of the contract.

use std::fmt;

/// Identifier of a mesh node (vertex).
///
/// # Memory layout
/// `repr(transparent)` over `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(u64);

/// Identifier of a mesh element (cell).
///
/// # Memory layout
/// `repr(transparent)` over `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct ElementId(u64);

impl NodeId {
    /// Wraps a raw node number.
    ///
    /// ```rust
    /// # use mesh_field_fill::topology::point::NodeId;
    /// let n = NodeId::new(12);
    /// assert_eq!(n.get(), 12);
    /// ```
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Returns the raw node number.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl ElementId {
    /// Wraps a raw element number.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ElementId(raw)
    }

    /// Returns the raw element number.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.0).finish()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        NodeId(raw)
    }
}

impl From<u64> for ElementId {
    fn from(raw: u64) -> Self {
        ElementId(raw)
    }
}
