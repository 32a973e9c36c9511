//! Fixpoint driver for quad-based propagation.
//!
//! Each pass rebuilds the [`LongestEdgeIndex`] and [`Frontier`] from the live
//! field, runs the [`QuadResolver`] once, and stops after the first pass
//! that assigns nothing. Every productive pass removes at least two elements
//! from the finite missing set, so the loop always terminates; an element
//! filled in pass `k` can act as `A` or `O` from pass `k + 1` on.

use crate::algs::frontier::Frontier;
use crate::algs::longest_edge::LongestEdgeIndex;
use crate::algs::quad_resolver::{Assignment, QuadResolver};
use crate::data::field::{ElementField, FieldValue};
use crate::mesh_error::MeshFillError;
use crate::topology::mesh_topology::{MeshTopology, TopologyOptions};
use crate::topology::point::ElementId;
use crate::topology::surface_mesh::SurfaceMesh;

/// Configuration for a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Options used when the driver builds the topology itself.
    pub topology: TopologyOptions,
    /// Keep every [`Assignment`] in the report.
    pub record_assignments: bool,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            topology: TopologyOptions::default(),
            record_assignments: true,
        }
    }
}

/// Counters for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// 1-based pass number.
    pub pass: usize,
    pub oa_pairs: usize,
    pub frontier: usize,
    pub assigned: usize,
    /// Missing elements left after the pass, malformed ones included.
    pub missing_after: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropagationReport {
    /// Every pass, including the final unproductive one.
    pub passes: Vec<PassSummary>,
    /// Assignments in commit order (empty unless recorded).
    pub assignments: Vec<Assignment>,
    pub residual_missing: usize,
}

impl PropagationReport {
    pub fn total_assigned(&self) -> usize {
        self.passes.iter().map(|p| p.assigned).sum()
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

/// Repeats quad resolution to a fixpoint.
#[derive(Debug, Clone, Copy)]
pub struct PropagationDriver<'a> {
    topology: &'a MeshTopology,
    config: PropagationConfig,
}

impl<'a> PropagationDriver<'a> {
    pub fn new(topology: &'a MeshTopology) -> Self {
        Self::with_config(topology, PropagationConfig::default())
    }

    pub fn with_config(topology: &'a MeshTopology, config: PropagationConfig) -> Self {
        Self { topology, config }
    }

    /// Run one pass and return its assignments.
    pub fn step(&self, field: &mut ElementField, pass: usize) -> (PassSummary, Vec<Assignment>) {
        let index = LongestEdgeIndex::build(self.topology, field);
        let frontier = Frontier::detect(self.topology, field);
        let assignments = QuadResolver::new(self.topology).resolve(field, &index, &frontier, pass);
        let summary = PassSummary {
            pass,
            oa_pairs: index.len(),
            frontier: frontier.len(),
            assigned: assignments.len(),
            missing_after: field.missing_count(),
        };
        log::debug!(
            "pass {pass}: {} OA pairs, {} frontier elements, {} assigned, {} missing",
            summary.oa_pairs,
            summary.frontier,
            summary.assigned,
            summary.missing_after
        );
        (summary, assignments)
    }

    /// Propagate until a pass assigns nothing.
    pub fn run(&self, field: &mut ElementField) -> PropagationReport {
        let mut report = PropagationReport::default();
        let mut pass = 0;
        loop {
            pass += 1;
            let (summary, assignments) = self.step(field, pass);
            report.passes.push(summary);
            if self.config.record_assignments {
                report.assignments.extend(assignments);
            }
            if summary.assigned == 0 {
                break;
            }
        }
        report.residual_missing = field.missing_count();
        log::info!(
            "propagation reached fixpoint after {} passes: {} assigned, {} still missing",
            report.pass_count(),
            report.total_assigned(),
            report.residual_missing
        );
        report
    }
}

/// Build the topology of `mesh`, seed a field from `results` and propagate.
pub fn fill_missing<I>(
    mesh: &SurfaceMesh,
    results: I,
    config: PropagationConfig,
) -> Result<(ElementField, PropagationReport), MeshFillError>
where
    I: IntoIterator<Item = (ElementId, FieldValue)>,
{
    let topology = MeshTopology::build_with(mesh, &config.topology)?;
    let mut field = ElementField::from_results(mesh.element_ids(), results);
    let report = PropagationDriver::with_config(&topology, config).run(&mut field);
    Ok((field, report))
}
