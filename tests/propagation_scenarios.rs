mod common;

use common::{Diagonal, el, grid, grid_with, n, square_elements, two_squares};
use mesh_field_fill::prelude::*;

const A_VALUE: FieldValue = FieldValue {
    first: 10.0,
    second: 1.0e5,
};
const O_VALUE: FieldValue = FieldValue {
    first: 20.0,
    second: 2.0e5,
};

fn seeded(mesh: &SurfaceMesh) -> ElementField {
    ElementField::from_results(mesh.element_ids(), [(el(10), A_VALUE), (el(11), O_VALUE)])
}

#[test]
fn parallel_diagonals_copy_across() {
    let mesh = two_squares(false);
    let topo = MeshTopology::build(&mesh).unwrap();
    let mut field = seeded(&mesh);
    let report = PropagationDriver::new(&topo).run(&mut field);

    // B <- O, C <- A
    assert_eq!(field.value(el(12)), Some(O_VALUE));
    assert_eq!(field.value(el(13)), Some(A_VALUE));
    assert_eq!(report.total_assigned(), 2);
    assert_eq!(report.pass_count(), 2);
    assert!(report
        .assignments
        .iter()
        .all(|a| a.relation == DiagonalRelation::Disjoint && a.pass == 1));
}

#[test]
fn corner_diagonals_swap_sources() {
    let mesh = two_squares(true);
    let topo = MeshTopology::build(&mesh).unwrap();
    let mut field = seeded(&mesh);
    let report = PropagationDriver::new(&topo).run(&mut field);

    // B <- A, C <- O
    assert_eq!(field.value(el(12)), Some(A_VALUE));
    assert_eq!(field.value(el(13)), Some(O_VALUE));
    let pairs: Vec<_> = report
        .assignments
        .iter()
        .map(|a| (a.target, a.source, a.relation))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (el(12), el(10), DiagonalRelation::Corner),
            (el(13), el(11), DiagonalRelation::Corner),
        ]
    );
}

#[test]
fn values_are_copied_bit_exact() {
    let mesh = two_squares(false);
    let odd = FieldValue::new(0.1 + 0.2, 1.0e5 / 3.0);
    let (field, _) = fill_missing(
        &mesh,
        [(el(10), odd), (el(11), odd)],
        PropagationConfig::default(),
    )
    .unwrap();
    for id in [12, 13] {
        let v = field.value(el(id)).unwrap();
        assert_eq!(v.first.to_bits(), odd.first.to_bits());
        assert_eq!(v.second.to_bits(), odd.second.to_bits());
    }
}

#[test]
fn centred_square_has_no_pairs() {
    let mut mesh = SurfaceMesh::new();
    for (id, x, y) in [
        (1, 0.0, 0.0),
        (2, 1.0, 0.0),
        (3, 1.0, 1.0),
        (4, 0.0, 1.0),
        (5, 0.5, 0.5),
    ] {
        mesh.try_add_node(n(id), [x, y, 0.0]).unwrap();
    }
    for (id, a, b) in [(1, 1, 2), (2, 2, 3), (3, 3, 4), (4, 4, 1)] {
        mesh.try_add_element(el(id), vec![n(a), n(b), n(5)]).unwrap();
    }
    let topo = MeshTopology::build(&mesh).unwrap();
    let mut field = ElementField::from_results(mesh.element_ids(), [(el(1), A_VALUE)]);
    assert!(LongestEdgeIndex::build(&topo, &field).is_empty());

    let report = PropagationDriver::new(&topo).run(&mut field);
    assert_eq!(report.pass_count(), 1);
    assert_eq!(report.total_assigned(), 0);
    assert_eq!(field.missing_count(), 3);
}

#[test]
fn lone_missing_element_stays_missing() {
    let mesh = grid(2, 1);
    let values: Vec<_> = [1, 2, 4].into_iter().map(|i| (el(i), A_VALUE)).collect();
    let (field, report) = fill_missing(&mesh, values, PropagationConfig::default()).unwrap();
    assert_eq!(report.total_assigned(), 0);
    assert_eq!(field.missing_ids().collect::<Vec<_>>(), vec![el(3)]);
}

#[test]
fn malformed_element_keeps_its_status() {
    let mut mesh = two_squares(false);
    mesh.try_add_element(el(99), vec![n(1), n(2), n(3), n(4)])
        .unwrap();
    mesh.try_add_element(el(98), vec![n(1), n(2), n(5), n(4)])
        .unwrap();
    let topo = MeshTopology::build(&mesh).unwrap();
    assert_eq!(topo.exclusion(el(99)), Some(ExclusionReason::WrongNodeCount(4)));

    let mut field = ElementField::from_results(
        mesh.element_ids(),
        [(el(10), A_VALUE), (el(11), O_VALUE), (el(98), A_VALUE)],
    );
    let report = PropagationDriver::new(&topo).run(&mut field);

    assert_eq!(report.total_assigned(), 2);
    assert!(field.is_missing(el(99)));
    assert_eq!(field.value(el(98)), Some(A_VALUE));
    assert_eq!(report.residual_missing, 1);
    assert!(report
        .assignments
        .iter()
        .all(|a| ![el(98), el(99)].contains(&a.target) && ![el(98), el(99)].contains(&a.source)));
}

fn with_fin(mesh: &mut SurfaceMesh) {
    // third element on edge (2, 6)
    mesh.try_add_node(n(7), [1.5, 0.5, 1.0]).unwrap();
    mesh.try_add_element(el(14), vec![n(2), n(6), n(7)]).unwrap();
}

#[test]
fn non_manifold_edge_blocks_the_quad() {
    let mut mesh = two_squares(false);
    with_fin(&mut mesh);
    let topo = MeshTopology::build(&mesh).unwrap();
    assert_eq!(topo.non_manifold_edge_count(), 1);
    assert_eq!(topo.neighbor_across(el(12), Edge::new(n(2), n(6))), None);

    let mut field = seeded(&mesh);
    let report = PropagationDriver::new(&topo).run(&mut field);
    assert_eq!(report.total_assigned(), 0);
    assert_eq!(field.missing_count(), 3);
}

#[test]
fn non_manifold_edge_can_be_fatal() {
    let mut mesh = two_squares(false);
    with_fin(&mut mesh);
    let config = PropagationConfig {
        topology: TopologyOptions {
            non_manifold: NonManifoldHandling::Error,
        },
        ..Default::default()
    };
    let err = fill_missing(&mesh, Vec::new(), config).unwrap_err();
    assert_eq!(
        err,
        MeshFillError::NonManifoldEdge {
            edge: Edge::new(n(2), n(6)),
            incident: 3,
        }
    );
}

#[test]
fn partner_with_other_longest_edge_is_rejected() {
    let mut mesh = SurfaceMesh::new();
    for (id, x, y) in [
        (1, 0.0, 0.0),
        (2, 1.0, 0.0),
        (3, 5.0, 0.0),
        (4, 0.0, 1.0),
        (5, 1.0, 1.0),
        (6, 2.0, 1.0),
    ] {
        mesh.try_add_node(n(id), [x, y, 0.0]).unwrap();
    }
    mesh.try_add_element(el(10), vec![n(1), n(2), n(5)]).unwrap();
    mesh.try_add_element(el(11), vec![n(1), n(5), n(4)]).unwrap();
    mesh.try_add_element(el(12), vec![n(2), n(6), n(5)]).unwrap();
    mesh.try_add_element(el(13), vec![n(2), n(3), n(6)]).unwrap();

    let topo = MeshTopology::build(&mesh).unwrap();
    assert_eq!(topo.triangle(el(12)).unwrap().longest_edge, Edge::new(n(2), n(6)));
    assert_ne!(topo.triangle(el(13)).unwrap().longest_edge, Edge::new(n(2), n(6)));

    let mut field = seeded(&mesh);
    let report = PropagationDriver::new(&topo).run(&mut field);
    assert_eq!(report.total_assigned(), 0);
    assert!(field.is_missing(el(12)) && field.is_missing(el(13)));
}

#[test]
fn first_pair_claims_a_contested_quad() {
    // squares 0 and 2 known, square 1 reachable from both
    let mesh = grid(3, 1);
    let left = FieldValue::new(1.0, 10.0);
    let right = FieldValue::new(3.0, 30.0);
    let (l0, u0) = square_elements(0);
    let (l1, u1) = square_elements(1);
    let (l2, u2) = square_elements(2);
    let (field, report) = fill_missing(
        &mesh,
        [(l0, left), (u0, left), (l2, right), (u2, right)],
        PropagationConfig::default(),
    )
    .unwrap();

    let assigned: Vec<usize> = report.passes.iter().map(|p| p.assigned).collect();
    assert_eq!(assigned, vec![2, 0]);
    assert_eq!(field.value(l1), Some(left));
    assert_eq!(field.value(u1), Some(left));
    assert!(report.assignments.iter().all(|a| a.source == l0 || a.source == u0));
}

#[test]
fn grid_fills_layer_by_layer() {
    let mesh = grid_with(3, 3, |s| {
        if s % 2 == 0 {
            Diagonal::Rising
        } else {
            Diagonal::Falling
        }
    });
    let (l0, u0) = square_elements(0);
    let (field, report) = fill_missing(
        &mesh,
        [(l0, A_VALUE), (u0, O_VALUE)],
        PropagationConfig::default(),
    )
    .unwrap();

    assert!(report.total_assigned() > 0);
    assert_eq!(report.passes.last().map(|p| p.assigned), Some(0));
    for summary in &report.passes {
        assert_eq!(summary.assigned % 2, 0);
    }
    // every value present came from one of the two seeds
    for (_, v) in field.valid() {
        assert!(v == A_VALUE || v == O_VALUE);
    }
    assert_eq!(field.valid_count() + report.residual_missing, 18);
}

#[test]
fn larger_id_can_border_the_missing_region() {
    // same geometry as the parallel case, but A carries the larger id
    let mut mesh = SurfaceMesh::new();
    for (id, x, y) in [
        (1, 0.0, 0.0),
        (2, 1.0, 0.0),
        (3, 2.0, 0.0),
        (4, 0.0, 1.0),
        (5, 1.0, 1.0),
        (6, 2.0, 1.0),
    ] {
        mesh.try_add_node(n(id), [x, y, 0.0]).unwrap();
    }
    mesh.try_add_element(el(11), vec![n(1), n(2), n(5)]).unwrap();
    mesh.try_add_element(el(10), vec![n(1), n(5), n(4)]).unwrap();
    mesh.try_add_element(el(12), vec![n(2), n(6), n(5)]).unwrap();
    mesh.try_add_element(el(13), vec![n(2), n(3), n(6)]).unwrap();

    let topo = MeshTopology::build(&mesh).unwrap();
    let mut field = ElementField::from_results(
        mesh.element_ids(),
        [(el(11), A_VALUE), (el(10), O_VALUE)],
    );
    let frontier = Frontier::detect(&topo, &field);
    assert_eq!(frontier.iter().collect::<Vec<_>>(), vec![el(11)]);

    let report = PropagationDriver::new(&topo).run(&mut field);
    // B <- O, C <- A with A = 11
    assert_eq!(field.value(el(12)), Some(O_VALUE));
    assert_eq!(field.value(el(13)), Some(A_VALUE));
    let pairs: Vec<_> = report.assignments.iter().map(|a| (a.target, a.source)).collect();
    assert_eq!(pairs, vec![(el(12), el(10)), (el(13), el(11))]);
}
