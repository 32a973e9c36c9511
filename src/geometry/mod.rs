//! Geometry utilities for mesh-field-fill.
//!
//! Only edge lengths are ever needed: the propagation is topological and
//! uses geometry solely to pick each triangle's longest edge.

pub mod metrics;
