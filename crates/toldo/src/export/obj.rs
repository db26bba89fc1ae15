//! Wavefront OBJ export.

use crate::error::{Result, ToldoError};
use toldo_ir::{ExportGeometry, Face};

/// Whether a face can be written: at least three indices, all in range.
pub(crate) fn writable(face: &Face, vertex_count: usize) -> bool {
    face.len() >= 3 && face.iter().all(|&i| i < vertex_count)
}

/// Encode geometry as OBJ text with one flat normal per face.
///
/// Faces that reference missing vertices or have fewer than three indices
/// are skipped.
pub fn to_obj(geometry: &ExportGeometry, name: &str) -> Result<String> {
    let vertex_count = geometry.vertices.len();
    let faces: Vec<(usize, &Face)> = geometry
        .faces
        .iter()
        .enumerate()
        .filter(|(_, f)| writable(f, vertex_count))
        .collect();
    if faces.is_empty() {
        return Err(ToldoError::EmptyGeometry);
    }

    let mut out = String::new();
    out.push_str("# toldo OBJ export\n");
    out.push_str(&format!("o {name}\n"));

    for v in &geometry.vertices {
        out.push_str(&format!("v {} {} {}\n", v[0], v[1], v[2]));
    }

    for (i, face) in &faces {
        let n = geometry
            .normals
            .get(*i)
            .copied()
            .unwrap_or_else(|| toldo_geom::face_normal(&geometry.vertices, face));
        out.push_str(&format!("vn {} {} {}\n", n[0], n[1], n[2]));
    }

    for (k, (_, face)) in faces.iter().enumerate() {
        out.push('f');
        for idx in face.iter() {
            out.push_str(&format!(" {}//{}", idx + 1, k + 1));
        }
        out.push('\n');
    }

    Ok(out)
}
