//! Topology validation helpers.

use crate::mesh_error::MeshFillError;
use crate::topology::adjacency::EdgeAdjacency;

/// Behavior for non-manifold detection.
///
/// Non-manifold edges are never traversed by propagation regardless of this
/// setting; it only decides how loudly they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum NonManifoldHandling {
    /// Skip non-manifold detection.
    Ignore,
    /// Log a warning on non-manifold edges.
    #[default]
    Warn,
    /// Return an error on the first non-manifold edge.
    Error,
}

/// Detect edges shared by more than two elements.
///
/// Returns the number of non-manifold edges found (0 under `Ignore`).
pub fn validate_non_manifold(
    adjacency: &EdgeAdjacency,
    handling: NonManifoldHandling,
) -> Result<usize, MeshFillError> {
    if handling == NonManifoldHandling::Ignore {
        return Ok(0);
    }

    let offenders = adjacency.non_manifold_edges();
    for &(edge, incident) in &offenders {
        match handling {
            NonManifoldHandling::Warn => {
                log::warn!(
                    "Non-manifold edge detected: edge={edge} incident_elements={incident}"
                );
            }
            NonManifoldHandling::Error => {
                return Err(MeshFillError::NonManifoldEdge { edge, incident });
            }
            NonManifoldHandling::Ignore => {}
        }
    }
    Ok(offenders.len())
}
