//! Quad-based value transfer from a valid OA pair to a missing BC pair.
//!
//! For an OA pair whose `A` half borders the missing region, the resolver
//! looks for two missing triangles `B` and `C` that
//! - `B` shares an edge with `A`,
//! - `B` and `C` share `B`'s longest edge, and that edge is also `C`'s
//!   longest edge.
//!
//! `{B, C}` is then the neighbouring quad split along its own diagonal, and
//! the two values of `{A, O}` are copied across according to how the two
//! diagonals meet:
//!
//! | diagonals share | case     | B gets | C gets |
//! |-----------------|----------|--------|--------|
//! | one node        | Corner   | A      | O      |
//! | otherwise       | Parallel | O      | A      |
//!
//! # Determinism
//! Pairs are visited by ascending smaller id, B candidates follow `A`'s edge
//! declaration order, and the first candidate that passes wins. Elements
//! claimed by an earlier pair of the same pass are no longer missing for the
//! rest of that pass. All decisions read the partition as it stood at the
//! start of the pass; the assignments are committed together at the end.

use hashbrown::HashSet;

use crate::algs::frontier::Frontier;
use crate::algs::longest_edge::{LongestEdgeIndex, OaPair};
use crate::data::field::{ElementField, FieldValue};
use crate::topology::edge::Edge;
use crate::topology::mesh_topology::{MeshTopology, Triangle};
use crate::topology::point::ElementId;

/// How the OA diagonal and the BC diagonal meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalRelation {
    /// No node in common.
    Disjoint,
    /// Exactly one node in common.
    Corner,
    /// Both nodes in common. Unreachable on a manifold mesh (the edge would
    /// carry four elements); kept so the fallback to `Parallel` is explicit.
    Coincident,
}

impl DiagonalRelation {
    /// Compare the two diagonals by shared node count.
    pub fn classify(oa_diagonal: Edge, bc_diagonal: Edge) -> Self {
        match oa_diagonal.shared_node_count(bc_diagonal) {
            0 => DiagonalRelation::Disjoint,
            1 => DiagonalRelation::Corner,
            _ => DiagonalRelation::Coincident,
        }
    }

    /// Copy rule selected by this relation.
    pub fn case(self) -> QuadCase {
        match self {
            DiagonalRelation::Corner => QuadCase::Corner,
            DiagonalRelation::Disjoint | DiagonalRelation::Coincident => QuadCase::Parallel,
        }
    }
}

/// Copy rule for a resolved quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadCase {
    /// `B <- O`, `C <- A`.
    Parallel,
    /// `B <- A`, `C <- O`.
    Corner,
}

/// The four triangles of a resolved transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub a: ElementId,
    pub o: ElementId,
    pub b: ElementId,
    pub c: ElementId,
    pub oa_diagonal: Edge,
    pub bc_diagonal: Edge,
    pub relation: DiagonalRelation,
}

impl Quad {
    /// `(target, source)` for B then C.
    pub fn transfers(&self) -> [(ElementId, ElementId); 2] {
        match self.relation.case() {
            QuadCase::Corner => [(self.b, self.a), (self.c, self.o)],
            QuadCase::Parallel => [(self.b, self.o), (self.c, self.a)],
        }
    }
}

/// One value copy performed by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub pass: usize,
    pub target: ElementId,
    pub source: ElementId,
    pub value: FieldValue,
    pub relation: DiagonalRelation,
}

/// Resolves quads over an immutable topology.
#[derive(Debug, Clone, Copy)]
pub struct QuadResolver<'a> {
    topology: &'a MeshTopology,
}

impl<'a> QuadResolver<'a> {
    /// Resolver over `topology`.
    pub fn new(topology: &'a MeshTopology) -> Self {
        Self { topology }
    }

    /// Run one pass over every pair of `index` and commit the result.
    ///
    /// `index` and `frontier` must have been derived from `field` as it is
    /// now. Returns the assignments made, two per resolved quad.
    pub fn resolve(
        &self,
        field: &mut ElementField,
        index: &LongestEdgeIndex,
        frontier: &Frontier,
        pass: usize,
    ) -> Vec<Assignment> {
        let planned = self.plan(field, index, frontier, pass);
        commit(field, planned)
    }

    /// Decide a pass without touching `field`.
    pub fn plan(
        &self,
        field: &ElementField,
        index: &LongestEdgeIndex,
        frontier: &Frontier,
        pass: usize,
    ) -> Vec<Assignment> {
        let mut claimed: HashSet<ElementId> = HashSet::new();
        let mut out = Vec::new();

        for pair in index.pairs() {
            let Some((a, o)) = orient(pair, field, frontier) else {
                continue;
            };
            let Some(quad) = self.find_quad(a, o, field, &claimed) else {
                log::trace!("pass {pass}: no BC quad for A={a} O={o}");
                continue;
            };
            if quad.relation == DiagonalRelation::Coincident {
                log::debug!(
                    "pass {pass}: coincident diagonals for A={a} O={o}, falling back to parallel copy"
                );
            }
            for (target, source) in quad.transfers() {
                let Some(value) = field.value(source) else {
                    continue;
                };
                claimed.insert(target);
                out.push(Assignment {
                    pass,
                    target,
                    source,
                    value,
                    relation: quad.relation,
                });
            }
        }
        out
    }

    /// Find the first BC quad next to `a`, or `None` if no candidate passes.
    pub fn find_quad(
        &self,
        a: ElementId,
        o: ElementId,
        field: &ElementField,
        claimed: &HashSet<ElementId>,
    ) -> Option<Quad> {
        let tri_a = self.topology.triangle(a)?;
        let tri_o = self.topology.triangle(o)?;
        let Some(oa_diagonal) = tri_a.common_edge(tri_o) else {
            log::trace!("A={a} and O={o} do not share exactly one edge");
            return None;
        };
        let open = |id: ElementId| field.is_missing(id) && !claimed.contains(&id);

        let candidates = tri_a
            .edges
            .iter()
            .filter_map(|&edge| self.topology.neighbor_across(a, edge))
            .filter(|&b| open(b))
            .filter_map(|b| self.topology.triangle(b));

        for tri_b in candidates {
            let Some(tri_c) = self.partner(tri_b) else {
                continue;
            };
            if !open(tri_c.id) {
                log::trace!("B={} rejected: partner {} is not open", tri_b.id, tri_c.id);
                continue;
            }
            let Some(bc_diagonal) = tri_b.common_edge(tri_c) else {
                continue;
            };
            return Some(Quad {
                a,
                o,
                b: tri_b.id,
                c: tri_c.id,
                oa_diagonal,
                bc_diagonal,
                relation: DiagonalRelation::classify(oa_diagonal, bc_diagonal),
            });
        }
        None
    }

    /// The triangle across `tri`'s longest edge, if that edge is its longest
    /// edge too.
    fn partner(&self, tri: &Triangle) -> Option<&'a Triangle> {
        let le = tri.longest_edge;
        let other = self.topology.neighbor_across(tri.id, le)?;
        let tri_c = self.topology.triangle(other)?;
        if tri_c.longest_edge != le {
            log::trace!(
                "B={} rejected: {} has longest edge {} not {le}",
                tri.id,
                tri_c.id,
                tri_c.longest_edge
            );
            return None;
        }
        Some(tri_c)
    }
}

/// Apply planned assignments, keeping only those that filled a missing
/// element.
fn commit(field: &mut ElementField, planned: Vec<Assignment>) -> Vec<Assignment> {
    planned
        .into_iter()
        .filter(|a| match field.try_fill(a.target, a.value) {
            Ok(true) => true,
            Ok(false) => {
                log::warn!("pass {}: target {} already valid, skipping", a.pass, a.target);
                false
            }
            Err(err) => {
                log::warn!("pass {}: cannot fill {}: {err}", a.pass, a.target);
                false
            }
        })
        .collect()
}

/// Pick which half of a pair borders the missing region.
fn orient(pair: &OaPair, field: &ElementField, frontier: &Frontier) -> Option<(ElementId, ElementId)> {
    let (e1, e2) = (pair.first, pair.second);
    if frontier.contains(e1) && field.is_valid(e2) {
        Some((e1, e2))
    } else if frontier.contains(e2) && field.is_valid(e1) {
        Some((e2, e1))
    } else {
        None
    }
}
