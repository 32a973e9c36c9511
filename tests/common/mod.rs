#![allow(dead_code)]
use mesh_field_fill::prelude::*;

pub fn n(i: u64) -> NodeId {
    NodeId::new(i)
}

pub fn el(i: u64) -> ElementId {
    ElementId::new(i)
}

/// Which diagonal splits a unit square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// lower-left to upper-right: `[bl, br, tr]`, `[bl, tr, tl]`
    Rising,
    /// lower-right to upper-left: `[bl, br, tl]`, `[br, tr, tl]`
    Falling,
}

/// Node at grid position `(i, j)` of a grid `nx` squares wide.
pub fn grid_node(nx: u64, i: u64, j: u64) -> NodeId {
    n(j * (nx + 1) + i + 1)
}

/// The two elements of square `s`: `2s + 1` (lower) and `2s + 2` (upper).
pub fn square_elements(s: u64) -> (ElementId, ElementId) {
    (el(2 * s + 1), el(2 * s + 2))
}

/// `nx` x `ny` unit squares, square `s = j * nx + i` split by `diagonal(s)`.
pub fn grid_with(nx: u64, ny: u64, diagonal: impl Fn(u64) -> Diagonal) -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    for j in 0..=ny {
        for i in 0..=nx {
            mesh.try_add_node(grid_node(nx, i, j), [i as f64, j as f64, 0.0])
                .unwrap();
        }
    }
    for j in 0..ny {
        for i in 0..nx {
            let s = j * nx + i;
            let bl = grid_node(nx, i, j);
            let br = grid_node(nx, i + 1, j);
            let tl = grid_node(nx, i, j + 1);
            let tr = grid_node(nx, i + 1, j + 1);
            let (lower, upper) = square_elements(s);
            let (l, u) = match diagonal(s) {
                Diagonal::Rising => (vec![bl, br, tr], vec![bl, tr, tl]),
                Diagonal::Falling => (vec![bl, br, tl], vec![br, tr, tl]),
            };
            mesh.try_add_element(lower, l).unwrap();
            mesh.try_add_element(upper, u).unwrap();
        }
    }
    mesh
}

pub fn grid(nx: u64, ny: u64) -> SurfaceMesh {
    grid_with(nx, ny, |_| Diagonal::Rising)
}

/// Two unit squares side by side. `A = 10`, `O = 11` form the left square;
/// `B = 12`, `C = 13` the right one. `corner` chooses a right-hand diagonal
/// sharing node 5 with the left one; otherwise the diagonals are disjoint.
pub fn two_squares(corner: bool) -> SurfaceMesh {
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
    mesh.try_add_element(el(10), vec![n(1), n(2), n(5)]).unwrap();
    mesh.try_add_element(el(11), vec![n(1), n(5), n(4)]).unwrap();
    if corner {
        mesh.try_add_element(el(12), vec![n(2), n(3), n(5)]).unwrap();
        mesh.try_add_element(el(13), vec![n(5), n(3), n(6)]).unwrap();
    } else {
        mesh.try_add_element(el(12), vec![n(2), n(6), n(5)]).unwrap();
        mesh.try_add_element(el(13), vec![n(2), n(3), n(6)]).unwrap();
    }
    mesh
}
