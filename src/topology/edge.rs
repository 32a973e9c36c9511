//! Canonical undirected mesh edges.

use std::fmt;

use crate::topology::point::NodeId;

/// Unordered pair of node ids, stored smaller id first.
///
/// Two triangles that traverse a shared edge in opposite winding produce the
/// same `Edge`, which is what makes it usable as an adjacency key.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Edge {
    lo: NodeId,
    hi: NodeId,
}

impl Edge {
    /// Canonicalises `(a, b)` so that `Edge::new(a, b) == Edge::new(b, a)`.
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge { lo: a, hi: b }
        } else {
            Edge { lo: b, hi: a }
        }
    }

    /// Smaller endpoint.
    #[inline]
    pub fn lo(self) -> NodeId {
        self.lo
    }

    /// Larger endpoint.
    #[inline]
    pub fn hi(self) -> NodeId {
        self.hi
    }

    /// Both endpoints, smaller first.
    #[inline]
    pub fn nodes(self) -> [NodeId; 2] {
        [self.lo, self.hi]
    }

    #[inline]
    pub fn contains(self, n: NodeId) -> bool {
        self.lo == n || self.hi == n
    }

    /// Number of endpoints shared with `other` (0, 1 or 2).
    pub fn shared_node_count(self, other: Edge) -> usize {
        self.nodes().iter().filter(|&&n| other.contains(n)).count()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// The three edges of a triangle in declaration order:
/// `(n0, n1)`, `(n1, n2)`, `(n2, n0)`.
#[inline]
pub fn triangle_edges(nodes: [NodeId; 3]) -> [Edge; 3] {
    [
        Edge::new(nodes[0], nodes[1]),
        Edge::new(nodes[1], nodes[2]),
        Edge::new(nodes[2], nodes[0]),
    ]
}
