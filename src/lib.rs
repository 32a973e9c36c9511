#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-field-fill
//!
//! mesh-field-fill fills gaps in a per-element scalar-pair field (for example
//! temperature and heat-transfer coefficient mapped from a CFD run onto a
//! structural surface mesh) using mesh topology only. Values are copied
//! verbatim from known elements into neighbouring unknown ones through local
//! quad patterns; nothing is ever interpolated or averaged.
//!
//! ## Features
//! - Triangle topology with canonical edges and edge → element adjacency
//! - Graceful exclusion of malformed elements and non-manifold edges
//! - Longest-edge pairing, frontier detection and quad resolution iterated to
//!   a fixpoint
//! - `.inp` mesh reader, `*FILM` / CSV result reader, `*FILM` and
//!   post-processor CSV writers
//! - Optional `rayon` feature for parallel per-triangle geometry
//!
//! ## Determinism
//!
//! Every enumeration is in ascending element id, triangle edges are visited in
//! declaration order `(n0,n1)`, `(n1,n2)`, `(n2,n0)`, and the first passing
//! candidate wins. Identical inputs give identical fields, with or without
//! `rayon`.
//!
//! ## Usage
//! ```rust
//! use mesh_field_fill::prelude::*;
//!
//! let mut mesh = SurfaceMesh::new();
//! for (id, x, y) in [(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 1.0, 1.0), (4, 0.0, 1.0)] {
//!     mesh.try_add_node(NodeId::new(id), [x, y, 0.0])?;
//! }
//! let n = NodeId::new;
//! mesh.try_add_element(ElementId::new(1), vec![n(1), n(2), n(3)])?;
//! mesh.try_add_element(ElementId::new(2), vec![n(1), n(3), n(4)])?;
//!
//! let topology = MeshTopology::build(&mesh)?;
//! let mut field = ElementField::from_results(
//!     mesh.element_ids(),
//!     [(ElementId::new(1), FieldValue::new(10.0, 1.0e5))],
//! );
//! let report = PropagationDriver::new(&topology).run(&mut field);
//! assert_eq!(report.total_assigned(), 0);
//! # Ok::<(), mesh_field_fill::mesh_error::MeshFillError>(())
//! ```

pub mod algs;
pub mod data;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::frontier::Frontier;
    pub use crate::algs::longest_edge::{LongestEdgeIndex, OaPair};
    pub use crate::algs::propagation::{
        PassSummary, PropagationConfig, PropagationDriver, PropagationReport, fill_missing,
    };
    pub use crate::algs::quad_resolver::{Assignment, DiagonalRelation, QuadCase, QuadResolver};
    pub use crate::data::field::{ElementField, ElementState, FieldAverage, FieldValue};
    pub use crate::io::{
        FieldWriter, FilmExportOptions, FilmReader, FilmWriter, InpReader, JptCsvWriter,
        MeshReader, ResultReader, read_element_ids,
    };
    pub use crate::mesh_error::MeshFillError;
    pub use crate::topology::{
        Edge, EdgeAdjacency, ElementId, ExclusionReason, MeshTopology, NodeId,
        NonManifoldHandling, SurfaceMesh, TopologyOptions, Triangle,
    };
}
