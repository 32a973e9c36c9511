//! Immutable triangle topology derived from a [`SurfaceMesh`].
//!
//! Every element with exactly three distinct, resolvable node ids becomes a
//! [`Triangle`]; its three canonical edges are registered in an
//! [`EdgeAdjacency`] and its longest edge is computed once, since geometry
//! never changes after construction. Every other element is recorded with an
//! [`ExclusionReason`] and takes no further part in adjacency or geometry.

use std::collections::BTreeMap;

use crate::geometry::metrics::longest_edge_index;
use crate::mesh_error::MeshFillError;
use crate::topology::adjacency::EdgeAdjacency;
use crate::topology::edge::{Edge, triangle_edges};
use crate::topology::point::{ElementId, NodeId};
use crate::topology::surface_mesh::SurfaceMesh;
use crate::topology::validation::{NonManifoldHandling, validate_non_manifold};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Options for building a [`MeshTopology`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TopologyOptions {
    /// How to report edges shared by more than two elements.
    pub non_manifold: NonManifoldHandling,
}

/// Why an element was left out of the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The element does not declare exactly three nodes.
    WrongNodeCount(usize),
    /// The element references a node that was never declared.
    UnresolvedNode(NodeId),
    /// The element lists the same node more than once.
    RepeatedNode(NodeId),
}

/// A usable triangular element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub id: ElementId,
    pub nodes: [NodeId; 3],
    /// Canonical edges in declaration order `(n0,n1)`, `(n1,n2)`, `(n2,n0)`.
    pub edges: [Edge; 3],
    /// Longest of `edges`, first one on ties.
    pub longest_edge: Edge,
}

impl Triangle {
    fn from_vertices(id: ElementId, nodes: [NodeId; 3], vertices: &[[f64; 3]; 3]) -> Self {
        let edges = triangle_edges(nodes);
        let longest_edge = edges[longest_edge_index(vertices)];
        Triangle {
            id,
            nodes,
            edges,
            longest_edge,
        }
    }

    #[inline]
    pub fn has_node(&self, n: NodeId) -> bool {
        self.nodes.contains(&n)
    }

    /// The edge shared with `other`, if the two triangles have exactly two
    /// nodes in common.
    pub fn common_edge(&self, other: &Triangle) -> Option<Edge> {
        let mut shared = self.nodes.iter().copied().filter(|&n| other.has_node(n));
        match (shared.next(), shared.next(), shared.next()) {
            (Some(a), Some(b), None) => Some(Edge::new(a, b)),
            _ => None,
        }
    }
}

/// Triangles, exclusions and edge adjacency of a surface mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
    triangles: BTreeMap<ElementId, Triangle>,
    excluded: BTreeMap<ElementId, ExclusionReason>,
    adjacency: EdgeAdjacency,
    non_manifold_edges: usize,
}

impl MeshTopology {
    /// Build with default options.
    pub fn build(mesh: &SurfaceMesh) -> Result<Self, MeshFillError> {
        Self::build_with(mesh, &TopologyOptions::default())
    }

    /// Classify every element and register the edges of usable triangles.
    pub fn build_with(mesh: &SurfaceMesh, options: &TopologyOptions) -> Result<Self, MeshFillError> {
        let elements: Vec<(ElementId, &[NodeId])> = mesh.elements().collect();

        #[cfg(feature = "rayon")]
        let classified: Vec<(ElementId, Result<Triangle, ExclusionReason>)> = elements
            .par_iter()
            .map(|&(id, nodes)| (id, classify(mesh, id, nodes)))
            .collect();
        #[cfg(not(feature = "rayon"))]
        let classified: Vec<(ElementId, Result<Triangle, ExclusionReason>)> = elements
            .iter()
            .map(|&(id, nodes)| (id, classify(mesh, id, nodes)))
            .collect();

        let mut triangles = BTreeMap::new();
        let mut excluded = BTreeMap::new();
        let mut adjacency = EdgeAdjacency::with_capacity(elements.len() * 3 / 2);

        // ascending id keeps every incident list sorted
        for (id, outcome) in classified {
            match outcome {
                Ok(tri) => {
                    for edge in tri.edges {
                        adjacency.insert(edge, id);
                    }
                    triangles.insert(id, tri);
                }
                Err(reason) => {
                    log::trace!("excluding element {id}: {reason:?}");
                    excluded.insert(id, reason);
                }
            }
        }

        if !excluded.is_empty() {
            log::warn!(
                "{} of {} elements excluded from topology (not a resolvable 3-node triangle)",
                excluded.len(),
                mesh.element_count()
            );
        }
        let non_manifold_edges = validate_non_manifold(&adjacency, options.non_manifold)?;

        Ok(MeshTopology {
            triangles,
            excluded,
            adjacency,
            non_manifold_edges,
        })
    }

    #[inline]
    pub fn triangle(&self, id: ElementId) -> Option<&Triangle> {
        self.triangles.get(&id)
    }

    #[inline]
    pub fn is_triangle(&self, id: ElementId) -> bool {
        self.triangles.contains_key(&id)
    }

    /// Usable triangles in ascending id.
    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.triangles.values()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn exclusion(&self, id: ElementId) -> Option<ExclusionReason> {
        self.excluded.get(&id).copied()
    }

    /// Excluded elements in ascending id.
    pub fn excluded(&self) -> impl Iterator<Item = (ElementId, ExclusionReason)> + '_ {
        self.excluded.iter().map(|(&id, &reason)| (id, reason))
    }

    #[inline]
    pub fn adjacency(&self) -> &EdgeAdjacency {
        &self.adjacency
    }

    /// Non-manifold edges found at build time (0 when detection was ignored).
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges
    }

    /// Triangle across `edge` from `element`, through a manifold edge only.
    #[inline]
    pub fn neighbor_across(&self, element: ElementId, edge: Edge) -> Option<ElementId> {
        self.adjacency.opposite(edge, element)
    }
}

fn classify(
    mesh: &SurfaceMesh,
    id: ElementId,
    nodes: &[NodeId],
) -> Result<Triangle, ExclusionReason> {
    let nodes: [NodeId; 3] = nodes
        .try_into()
        .map_err(|_| ExclusionReason::WrongNodeCount(nodes.len()))?;
    if nodes[0] == nodes[1] || nodes[0] == nodes[2] {
        return Err(ExclusionReason::RepeatedNode(nodes[0]));
    }
    if nodes[1] == nodes[2] {
        return Err(ExclusionReason::RepeatedNode(nodes[1]));
    }
    let mut vertices = [[0.0; 3]; 3];
    for (slot, &n) in vertices.iter_mut().zip(nodes.iter()) {
        *slot = mesh.node(n).ok_or(ExclusionReason::UnresolvedNode(n))?;
    }
    Ok(Triangle::from_vertices(id, nodes, &vertices))
}
