//! Abaqus-style `.inp` mesh reader.
//!
//! # Supported format
//! - `*NODE` blocks: `id, x, y[, z]` (`z` defaults to 0).
//! - `*ELEMENT` blocks: `id, n1, n2, ...`; a line ending in a comma continues
//!   on the next line.
//! - Keywords are case-insensitive and may carry parameters
//!   (`*ELEMENT, TYPE=S3, ELSET=SKIN`).
//!
//! # Limitations
//! - Every other keyword ends the current block and its data is ignored.
//! - `*INCLUDE` is not followed.
//! - Element types are not interpreted: the node count alone decides later
//!   whether an element is a usable triangle.

use std::io::Read;

use crate::io::{MeshReader, split_fields};
use crate::mesh_error::MeshFillError;
use crate::topology::point::{ElementId, NodeId};
use crate::topology::surface_mesh::SurfaceMesh;

/// `.inp` reader for node and element blocks.
#[derive(Debug, Default, Clone)]
pub struct InpReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Nodes,
    Elements,
    Other,
}

impl InpReader {
    fn keyword_block(line: &str) -> Block {
        let name = line.split(',').next().unwrap_or("").trim().to_ascii_uppercase();
        match name.as_str() {
            "*NODE" => Block::Nodes,
            "*ELEMENT" => Block::Elements,
            _ => Block::Other,
        }
    }

    fn parse_id(raw: &str, what: &str, line_no: usize) -> Result<u64, MeshFillError> {
        raw.parse::<u64>().map_err(|_| {
            MeshFillError::MeshIoParse(format!("line {line_no}: invalid {what} id: {raw:?}"))
        })
    }

    fn parse_coord(raw: &str, line_no: usize) -> Result<f64, MeshFillError> {
        raw.parse::<f64>().map_err(|_| {
            MeshFillError::MeshIoParse(format!("line {line_no}: invalid coordinate: {raw:?}"))
        })
    }

    fn parse_node(
        mesh: &mut SurfaceMesh,
        fields: &[&str],
        line_no: usize,
    ) -> Result<(), MeshFillError> {
        if !(3..=4).contains(&fields.len()) {
            return Err(MeshFillError::MeshIoParse(format!(
                "line {line_no}: expected `id, x, y[, z]`, found {} fields",
                fields.len()
            )));
        }
        let id = NodeId::new(Self::parse_id(fields[0], "node", line_no)?);
        let mut xyz = [0.0; 3];
        for (slot, raw) in xyz.iter_mut().zip(&fields[1..]) {
            *slot = Self::parse_coord(raw, line_no)?;
        }
        mesh.try_add_node(id, xyz)
    }

    fn parse_element(
        mesh: &mut SurfaceMesh,
        fields: &[String],
        line_no: usize,
    ) -> Result<(), MeshFillError> {
        let (id, conn) = fields.split_first().ok_or_else(|| {
            MeshFillError::MeshIoParse(format!("line {line_no}: empty element record"))
        })?;
        if conn.is_empty() {
            return Err(MeshFillError::MeshIoParse(format!(
                "line {line_no}: element {id} has no nodes"
            )));
        }
        let id = ElementId::new(Self::parse_id(id, "element", line_no)?);
        let nodes = conn
            .iter()
            .map(|raw| Self::parse_id(raw, "node", line_no).map(NodeId::new))
            .collect::<Result<Vec<_>, _>>()?;
        mesh.try_add_element(id, nodes)
    }
}

impl MeshReader for InpReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<SurfaceMesh, MeshFillError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;

        let mut mesh = SurfaceMesh::new();
        let mut block = Block::Other;
        // element record spread over continuation lines: (first line, fields)
        let mut pending: Option<(usize, Vec<String>)> = None;

        for (idx, raw_line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with("**") {
                continue;
            }
            if line.starts_with('*') {
                if let Some((start, fields)) = pending.take() {
                    Self::parse_element(&mut mesh, &fields, start)?;
                }
                block = Self::keyword_block(line);
                continue;
            }
            match block {
                Block::Nodes => Self::parse_node(&mut mesh, &split_fields(line), line_no)?,
                Block::Elements => {
                    let (start, fields) = pending.get_or_insert_with(|| (line_no, Vec::new()));
                    fields.extend(split_fields(line).into_iter().map(str::to_owned));
                    if !line.ends_with(',') {
                        let start = *start;
                        let fields = std::mem::take(fields);
                        pending = None;
                        Self::parse_element(&mut mesh, &fields, start)?;
                    }
                }
                Block::Other => {}
            }
        }
        if let Some((start, fields)) = pending.take() {
            Self::parse_element(&mut mesh, &fields, start)?;
        }

        log::debug!(
            "read .inp mesh: {} nodes, {} elements",
            mesh.node_count(),
            mesh.element_count()
        );
        Ok(mesh)
    }
}
