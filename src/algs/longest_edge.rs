//! Grouping of valid triangles by their longest edge.
//!
//! Two valid triangles whose longest edges coincide form an *OA candidate
//! pair*: they are the two halves of a quad split along that shared
//! diagonal. Groups of any other size carry no pairing information: a lone
//! triangle has no partner, and more than two can only arise on a
//! non-manifold edge.

use itertools::Itertools;

use crate::data::field::ElementField;
use crate::topology::edge::Edge;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::point::ElementId;

/// Two valid triangles sharing the same longest edge, smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OaPair {
    pub first: ElementId,
    pub second: ElementId,
    pub diagonal: Edge,
}

/// OA candidate pairs of one pass, ordered by ascending `first`.
#[derive(Debug, Clone, Default)]
pub struct LongestEdgeIndex {
    pairs: Vec<OaPair>,
}

impl LongestEdgeIndex {
    /// Group the currently valid triangles of `field` by longest edge.
    pub fn build(topology: &MeshTopology, field: &ElementField) -> Self {
        let groups = topology
            .triangles()
            .filter(|tri| field.is_valid(tri.id))
            .map(|tri| (tri.longest_edge, tri.id))
            .into_group_map();

        // triangles() is ascending, so every group is ascending too
        let mut pairs: Vec<OaPair> = groups
            .into_iter()
            // only a manifold diagonal links a pair
            .filter(|(diagonal, _)| topology.adjacency().cardinality(*diagonal) == 2)
            .filter_map(|(diagonal, ids)| match ids.as_slice() {
                &[first, second] => Some(OaPair {
                    first,
                    second,
                    diagonal,
                }),
                _ => None,
            })
            .collect();
        pairs.sort_unstable_by_key(|p| p.first);
        LongestEdgeIndex { pairs }
    }

    /// Pairs in visiting order.
    pub fn pairs(&self) -> &[OaPair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` if no pair was formed.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
