//! Edge-length metrics for triangles.
//!
//! # Vertex ordering
//! A triangle `[v0, v1, v2]` has its edges enumerated as `(v0, v1)`,
//! `(v1, v2)`, `(v2, v0)`. Every tie between equal lengths is resolved in
//! favour of the earliest edge in that order, so the longest edge of a cell is
//! a pure function of its declared connectivity and coordinates.

/// Euclidean distance between two points.
#[inline]
pub fn edge_length(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(a, b))
}

/// Lengths of the three triangle edges in declaration order.
pub fn triangle_edge_lengths(vertices: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        edge_length(vertices[0], vertices[1]),
        edge_length(vertices[1], vertices[2]),
        edge_length(vertices[2], vertices[0]),
    ]
}

/// Index (0, 1 or 2) of the longest triangle edge.
///
/// Ties keep the first edge encountered. A `NaN` length never wins a
/// comparison, so a triangle with one unusable coordinate still reports a
/// deterministic index.
pub fn longest_edge_index(vertices: &[[f64; 3]; 3]) -> usize {
    let lengths = triangle_edge_lengths(vertices);
    let mut best = 0;
    for (i, &len) in lengths.iter().enumerate().skip(1) {
        if len > lengths[best] {
            best = i;
        }
    }
    best
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
