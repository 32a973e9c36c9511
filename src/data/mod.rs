//! Data module: per-element field values and their valid/missing state.

pub mod field;

pub use field::{ElementField, ElementState, FieldAverage, FieldValue};
