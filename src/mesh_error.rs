//! MeshFillError: Unified error type for mesh-field-fill public APIs
//!
//! Graceful exclusions (malformed elements, non-manifold edges, quads that
//! cannot be resolved) are not errors; they are recorded on the topology and
//! reported through `log`. This type only covers failures the caller must see.

use thiserror::Error;

use crate::topology::edge::Edge;
use crate::topology::point::{ElementId, NodeId};

/// Unified error type for mesh-field-fill operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshFillError {
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
    /// Mesh input could not be parsed (ids, coordinates, connectivity).
    #[error("mesh parse error: {0}")]
    MeshIoParse(String),
    /// A result row carried an element id but unreadable values.
    #[error("result parse error: {0}")]
    ResultParse(String),
    /// The same node id was declared twice.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),
    /// The same element id was declared twice.
    #[error("duplicate element id `{0}`")]
    DuplicateElement(ElementId),
    /// Field access for an element that is not part of the mesh.
    #[error("element `{0}` is not part of the mesh")]
    UnknownElement(ElementId),
    /// Raised only when non-manifold edges are configured as fatal.
    #[error("non-manifold edge {edge} shared by {incident} elements")]
    NonManifoldEdge { edge: Edge, incident: usize },
}

impl From<std::io::Error> for MeshFillError {
    fn from(err: std::io::Error) -> Self {
        MeshFillError::Io(err.to_string())
    }
}
