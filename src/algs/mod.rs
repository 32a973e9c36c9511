//! Re-export public algorithms.

pub mod frontier;
pub mod longest_edge;
pub mod propagation;
pub mod quad_resolver;

pub use frontier::Frontier;
pub use longest_edge::{LongestEdgeIndex, OaPair};
pub use propagation::{PropagationConfig, PropagationDriver, PropagationReport, fill_missing};
pub use quad_resolver::{Assignment, DiagonalRelation, QuadCase, QuadResolver};
