//! Mesh and result I/O helpers.
//!
//! This module provides trait-based readers and writers for the file formats
//! around the propagation core: Abaqus-style `.inp` meshes, CFD mapping
//! result rows (`*FILM` cards or CSV) and post-processor CSV tables. None of
//! them influence propagation; they only convert between files and
//! [`SurfaceMesh`] / [`ElementField`].

pub mod film;
pub mod inp;
pub mod jpt;

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::data::field::{ElementField, FieldValue};
use crate::mesh_error::MeshFillError;
use crate::topology::point::ElementId;
use crate::topology::surface_mesh::SurfaceMesh;

pub use film::{FilmExportOptions, FilmReader, FilmWriter, read_element_ids};
pub use inp::InpReader;
pub use jpt::JptCsvWriter;

/// Trait for readers that produce node coordinates and element connectivity.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<SurfaceMesh, MeshFillError>;
}

/// Trait for readers of partial per-element results.
pub trait ResultReader {
    /// Parse `element id -> value` rows. Absent ids are missing elements.
    fn read<R: Read>(&self, reader: R) -> Result<BTreeMap<ElementId, FieldValue>, MeshFillError>;
}

/// Trait for writers that export a field over every element of a mesh.
pub trait FieldWriter {
    /// Write one record per mesh element, ascending id, using a `NaN`
    /// sentinel for elements that are still missing.
    fn write<W: Write>(
        &self,
        writer: W,
        mesh: &SurfaceMesh,
        field: &ElementField,
    ) -> Result<(), MeshFillError>;
}

/// Split a data line on commas, trimming fields and dropping a trailing empty
/// field left by a terminating comma.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::split_fields;

    #[test]
    fn split_trims_and_drops_trailing_comma() {
        assert_eq!(split_fields(" 1, 2 ,3,"), vec!["1", "2", "3"]);
        assert_eq!(split_fields("7"), vec!["7"]);
        assert_eq!(split_fields("a,,b"), vec!["a", "", "b"]);
    }
}
