//! Edge → element adjacency.
//!
//! Built once from the usable triangles of a mesh and never mutated again.
//! Element lists are filled in ascending element id, so a two-element edge
//! always lists its smaller element first.

use hashbrown::HashMap;

use crate::topology::edge::Edge;
use crate::topology::point::ElementId;

/// Mapping from canonical edge to the elements that declare it.
#[derive(Clone, Debug, Default)]
pub struct EdgeAdjacency {
    incident: HashMap<Edge, Vec<ElementId>>,
}

impl EdgeAdjacency {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with room for `edges` distinct edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            incident: HashMap::with_capacity(edges),
        }
    }

    /// Register `element` as one of the cells bounded by `edge`.
    pub fn insert(&mut self, edge: Edge, element: ElementId) {
        self.incident.entry(edge).or_default().push(element);
    }

    /// Elements declaring `edge`, in insertion order. Empty for unknown edges.
    #[inline]
    pub fn incident(&self, edge: Edge) -> &[ElementId] {
        self.incident.get(&edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of elements declaring `edge`.
    #[inline]
    pub fn cardinality(&self, edge: Edge) -> usize {
        self.incident(edge).len()
    }

    /// The element across `edge` from `element`.
    ///
    /// Only a manifold interior edge (exactly two incident elements, one of
    /// them `element`) yields a neighbour; boundary and non-manifold edges
    /// yield `None`.
    pub fn opposite(&self, edge: Edge, element: ElementId) -> Option<ElementId> {
        match self.incident(edge) {
            [a, b] if *a == element => Some(*b),
            [a, b] if *b == element => Some(*a),
            _ => None,
        }
    }

    /// Edges shared by more than two elements, sorted by edge.
    pub fn non_manifold_edges(&self) -> Vec<(Edge, usize)> {
        let mut out: Vec<(Edge, usize)> = self
            .incident
            .iter()
            .filter(|(_, elems)| elems.len() > 2)
            .map(|(&edge, elems)| (edge, elems.len()))
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    /// `true` if no edge was registered.
    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }
}
