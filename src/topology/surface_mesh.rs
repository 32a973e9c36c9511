//! Raw surface mesh as delivered by an ingestion collaborator.
//!
//! A `SurfaceMesh` holds node coordinates and element connectivity exactly as
//! declared, with no validation beyond id uniqueness. Elements of any node
//! count are accepted so they can be enumerated again at export time; only
//! [`MeshTopology`](crate::topology::mesh_topology::MeshTopology) decides
//! which of them are usable triangles.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::mesh_error::MeshFillError;
use crate::topology::point::{ElementId, NodeId};

/// Node coordinates and element connectivity, keyed by ascending id.
#[derive(Clone, Debug, Default)]
pub struct SurfaceMesh {
    nodes: BTreeMap<NodeId, [f64; 3]>,
    elements: BTreeMap<ElementId, Vec<NodeId>>,
}

impl SurfaceMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Fails if `id` was already declared.
    pub fn try_add_node(&mut self, id: NodeId, coords: [f64; 3]) -> Result<(), MeshFillError> {
        match self.nodes.entry(id) {
            Entry::Occupied(_) => Err(MeshFillError::DuplicateNode(id)),
            Entry::Vacant(slot) => {
                slot.insert(coords);
                Ok(())
            }
        }
    }

    /// Declare an element with its ordered node ids. Fails if `id` was
    /// already declared.
    pub fn try_add_element(
        &mut self,
        id: ElementId,
        nodes: impl Into<Vec<NodeId>>,
    ) -> Result<(), MeshFillError> {
        match self.elements.entry(id) {
            Entry::Occupied(_) => Err(MeshFillError::DuplicateElement(id)),
            Entry::Vacant(slot) => {
                slot.insert(nodes.into());
                Ok(())
            }
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<[f64; 3]> {
        self.nodes.get(&id).copied()
    }

    #[inline]
    pub fn element(&self, id: ElementId) -> Option<&[NodeId]> {
        self.elements.get(&id).map(Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// All element ids, ascending. Includes elements that will later be
    /// excluded from topology.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, [f64; 3])> + '_ {
        self.nodes.iter().map(|(&id, &xyz)| (id, xyz))
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &[NodeId])> + '_ {
        self.elements.iter().map(|(&id, nodes)| (id, nodes.as_slice()))
    }
}
