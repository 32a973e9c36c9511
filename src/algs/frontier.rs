//! Detection of valid elements bordering the missing region.

use std::collections::BTreeSet;

use crate::data::field::ElementField;
use crate::topology::mesh_topology::MeshTopology;
use crate::topology::point::ElementId;

/// Valid triangles with at least one manifold edge whose opposite element is
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    elements: BTreeSet<ElementId>,
}

impl Frontier {
    /// Collect the frontier of `field` over the usable triangles.
    pub fn detect(topology: &MeshTopology, field: &ElementField) -> Self {
        let elements = topology
            .triangles()
            .filter(|tri| field.is_valid(tri.id))
            .filter(|tri| {
                tri.edges.iter().any(|&edge| {
                    topology
                        .neighbor_across(tri.id, edge)
                        .is_some_and(|other| field.is_missing(other))
                })
            })
            .map(|tri| tri.id)
            .collect();
        Frontier { elements }
    }

    /// `true` if `id` borders a missing element.
    #[inline]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains(&id)
    }

    /// Frontier elements in ascending id.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().copied()
    }

    /// Number of frontier elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if no valid element borders a missing one.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::field::FieldValue;
    use crate::topology::point::NodeId;
    use crate::topology::surface_mesh::SurfaceMesh;

    fn n(i: u64) -> NodeId {
        NodeId::new(i)
    }

    fn el(i: u64) -> ElementId {
        ElementId::new(i)
    }

    // strip of three triangles 1-2-3 plus a triangle glued by a 3-way edge
    fn strip() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        for (id, x, y) in [(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 0.0, 1.0), (4, 1.0, 1.0), (5, 2.0, 0.0)] {
            mesh.try_add_node(n(id), [x, y, 0.0]).unwrap();
        }
        mesh.try_add_node(n(6), [1.0, 0.5, 1.0]).unwrap();
        mesh.try_add_node(n(7), [1.0, 0.5, -1.0]).unwrap();
        mesh.try_add_element(el(1), vec![n(1), n(2), n(3)]).unwrap();
        mesh.try_add_element(el(2), vec![n(2), n(4), n(3)]).unwrap();
        mesh.try_add_element(el(3), vec![n(2), n(5), n(4)]).unwrap();
        // (2,4) carries elements 2, 3, 4 and 5 -> non-manifold
        mesh.try_add_element(el(4), vec![n(2), n(4), n(6)]).unwrap();
        mesh.try_add_element(el(5), vec![n(4), n(2), n(7)]).unwrap();
        mesh
    }

    #[test]
    fn frontier_follows_manifold_edges_only() {
        let mesh = strip();
        let topo = MeshTopology::build(&mesh).unwrap();
        let v = FieldValue::new(1.0, 1.0);
        let field = ElementField::from_results(mesh.element_ids(), [(el(1), v), (el(3), v)]);

        let frontier = Frontier::detect(&topo, &field);
        // 1 touches missing 2 across (2,3); 3 only reaches 2 across non-manifold (2,4)
        assert_eq!(frontier.iter().collect::<Vec<_>>(), vec![el(1)]);
        assert!(!frontier.contains(el(3)));
    }

    #[test]
    fn no_missing_means_no_frontier() {
        let mesh = strip();
        let topo = MeshTopology::build(&mesh).unwrap();
        let v = FieldValue::new(1.0, 1.0);
        let field =
            ElementField::from_results(mesh.element_ids(), mesh.element_ids().map(|id| (id, v)));
        assert!(Frontier::detect(&topo, &field).is_empty());
    }
}
