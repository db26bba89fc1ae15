//! Binary STL export.

use super::obj::writable;
use crate::error::{Result, ToldoError};
use toldo_ir::ExportGeometry;

const HEADER: &[u8; 80] =
    b"toldo STL export                                                                ";

/// Encode geometry as binary STL.
///
/// Polygons are fan-triangulated from their first vertex; every triangle
/// carries its face's normal.
pub fn to_stl_bytes(geometry: &ExportGeometry) -> Result<Vec<u8>> {
    let vertex_count = geometry.vertices.len();
    let mut triangles: Vec<([f64; 3], [usize; 3])> = Vec::new();
    for (i, face) in geometry.faces.iter().enumerate() {
        if !writable(face, vertex_count) {
            continue;
        }
        let normal = geometry
            .normals
            .get(i)
            .copied()
            .unwrap_or_else(|| toldo_geom::face_normal(&geometry.vertices, face));
        for k in 1..face.len() - 1 {
            triangles.push((normal, [face[0], face[k], face[k + 1]]));
        }
    }
    if triangles.is_empty() {
        return Err(ToldoError::EmptyGeometry);
    }

    let mut data = Vec::with_capacity(84 + triangles.len() * 50);
    data.extend_from_slice(HEADER);
    data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for (normal, idx) in &triangles {
        for c in normal {
            data.extend_from_slice(&(*c as f32).to_le_bytes());
        }
        for &i in idx {
            for c in geometry.vertices[i] {
                data.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(data)
}
