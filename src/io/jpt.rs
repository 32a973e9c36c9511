//! Post-processor "user result" CSV export.
//!
//! The table starts with six `$` metadata rows and a column header, then
//! carries one row per element: id, both field values, and the remaining
//! unused result columns written as `0`.

use std::io::Write;

use crate::data::field::ElementField;
use crate::io::FieldWriter;
use crate::mesh_error::MeshFillError;
use crate::topology::surface_mesh::SurfaceMesh;

const COLUMNS: [&str; 15] = [
    "ENTITY_ID",
    "Temperature(s)",
    "bb(s)",
    "cc(s)",
    "dd(s)",
    "ee(s)",
    "ff(s)",
    "g(ss)",
    "h(s)",
    "i(s)",
    "j(s)",
    "k(s)",
    "l(s)",
    "m(s)",
    "n(s)",
];

/// Writer for the post-processor result table.
#[derive(Debug, Clone)]
pub struct JptCsvWriter {
    pub title: String,
    pub subcase: String,
}

impl Default for JptCsvWriter {
    fn default() -> Self {
        Self {
            title: "Static Analysis".to_string(),
            subcase: "Subcase1".to_string(),
        }
    }
}

impl JptCsvWriter {
    fn write_meta<W: Write>(writer: &mut W, text: &str) -> std::io::Result<()> {
        // metadata rows are padded to the table width
        writeln!(writer, "{text}{}", ",".repeat(COLUMNS.len() - 1))
    }
}

impl FieldWriter for JptCsvWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        mesh: &SurfaceMesh,
        field: &ElementField,
    ) -> Result<(), MeshFillError> {
        Self::write_meta(&mut writer, "$JPT-Post user's result adding")?;
        Self::write_meta(&mut writer, &format!("$TITTLE = {}", self.title))?;
        Self::write_meta(&mut writer, &format!("$SUBCASE = {}", self.subcase))?;
        Self::write_meta(&mut writer, "$BINDING = element")?;
        Self::write_meta(&mut writer, "$COLUMN_INFO = ENTITY_ID")?;
        // a single quoted cell listing the result columns
        writeln!(writer, "\"$RESULT_TYPE = {}\"", COLUMNS[1..].join(", "))?;
        writeln!(writer, "{}", COLUMNS.join(","))?;

        let zeros = ",0".repeat(COLUMNS.len() - 3);
        for id in mesh.element_ids() {
            let v = field.value_or_nan(id);
            writeln!(writer, "{id},{:?},{:?}{zeros}", v.first, v.second)?;
        }
        Ok(())
    }
}
