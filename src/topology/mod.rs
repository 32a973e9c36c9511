//! Top-level module for mesh topology abstractions.
//!
//! This module provides the types used to describe a triangulated surface
//! mesh and its derived connectivity:
//! - Node and element identifiers
//! - Canonical edges and the edge → element adjacency table
//! - The raw `SurfaceMesh` and the immutable `MeshTopology` built from it
//!
//! Most users build a `SurfaceMesh` (directly or through `io::inp`) and hand
//! it to `MeshTopology::build`.

pub mod adjacency;
pub mod edge;
pub mod mesh_topology;
pub mod point;
pub mod surface_mesh;
pub mod validation;

pub use adjacency::EdgeAdjacency;
pub use edge::Edge;
pub use mesh_topology::{ExclusionReason, MeshTopology, TopologyOptions, Triangle};
pub use point::{ElementId, NodeId};
pub use surface_mesh::SurfaceMesh;
pub use validation::NonManifoldHandling;
