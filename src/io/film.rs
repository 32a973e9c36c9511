//! CFD mapping results: `*FILM` cards and equivalent CSV rows.
//!
//! A result row is `id, tag, first, second[, ...]`, where `tag` is the face
//! label of a film card (`FPOS`, `SPOS`, ...) or any placeholder column in a
//! CSV export. Extra trailing columns are ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufRead, BufReader, Read, Write};

use crate::data::field::{ElementField, FieldValue};
use crate::io::{FieldWriter, ResultReader, split_fields};
use crate::mesh_error::MeshFillError;
use crate::topology::point::ElementId;
use crate::topology::surface_mesh::SurfaceMesh;

/// Reader for film cards and mapping CSV files.
///
/// Keyword and comment lines (`*`, `$`, `#`), rows with fewer than four
/// fields and rows whose first field is not an integer (headers) are
/// skipped. A row with an integer id but unreadable values is an error.
/// Rows whose values are `NaN` are read as missing. A later row for the same
/// id replaces an earlier one.
#[derive(Debug, Default, Clone)]
pub struct FilmReader;

impl ResultReader for FilmReader {
    fn read<R: Read>(&self, reader: R) -> Result<BTreeMap<ElementId, FieldValue>, MeshFillError> {
        let mut out = BTreeMap::new();
        let mut skipped = 0usize;
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(['*', '$', '#']) {
                continue;
            }
            let fields = split_fields(trimmed);
            if fields.len() < 4 {
                skipped += 1;
                continue;
            }
            let Ok(raw_id) = fields[0].parse::<u64>() else {
                log::trace!("line {line_no}: skipping non-data row");
                skipped += 1;
                continue;
            };
            let parse = |raw: &str| {
                raw.parse::<f64>().map_err(|_| {
                    MeshFillError::ResultParse(format!(
                        "line {line_no}: invalid value {raw:?} for element {raw_id}"
                    ))
                })
            };
            let value = FieldValue::new(parse(fields[2])?, parse(fields[3])?);
            if value.first.is_nan() || value.second.is_nan() {
                continue;
            }
            out.insert(ElementId::new(raw_id), value);
        }
        log::debug!("read {} result rows ({skipped} rows skipped)", out.len());
        Ok(out)
    }
}

/// Read an element id list: the first field of every non-keyword line.
///
/// Fields may be separated by commas or whitespace; lines whose first field
/// is not an integer are skipped.
pub fn read_element_ids<R: Read>(reader: R) -> Result<BTreeSet<ElementId>, MeshFillError> {
    let mut ids = BTreeSet::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('*') {
            continue;
        }
        let first = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .next()
            .unwrap_or("");
        if let Ok(raw) = first.parse::<u64>() {
            ids.insert(ElementId::new(raw));
        }
    }
    Ok(ids)
}

/// Options for `*FILM` export.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilmExportOptions {
    /// Digits after the decimal point.
    pub precision: usize,
    /// Face label written in the second column.
    pub face_tag: String,
}

impl Default for FilmExportOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            face_tag: "FPOS".to_string(),
        }
    }
}

/// Writer for a `*FILM` card covering every mesh element.
#[derive(Debug, Default, Clone)]
pub struct FilmWriter {
    pub options: FilmExportOptions,
}

impl FilmWriter {
    pub fn new(options: FilmExportOptions) -> Self {
        Self { options }
    }

    fn format_value(&self, v: f64) -> String {
        if v.is_nan() {
            "NaN".to_string()
        } else {
            format!("{v:.prec$}", prec = self.options.precision)
        }
    }
}

impl FieldWriter for FilmWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        mesh: &SurfaceMesh,
        field: &ElementField,
    ) -> Result<(), MeshFillError> {
        writeln!(writer, "*FILM")?;
        for id in mesh.element_ids() {
            let v = field.value_or_nan(id);
            writeln!(
                writer,
                "{id},{},{},{}",
                self.options.face_tag,
                self.format_value(v.first),
                self.format_value(v.second)
            )?;
        }
        Ok(())
    }
}
