//! Per-face normal computation.
//!
//! One flat normal per face, taken from the first three vertices with the
//! right-hand rule. No per-vertex averaging.

use crate::math::{to_point, to_triple, DEGENERATE_NORM};
use toldo_ir::{Face, Vertex};

/// Normal emitted for faces that do not span a plane.
pub const DEFAULT_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

/// Unit normal of a single face.
///
/// Faces with fewer than three indices, indices outside `vertices`, or
/// collinear leading vertices get [`DEFAULT_NORMAL`].
pub fn face_normal(vertices: &[Vertex], face: &[usize]) -> [f64; 3] {
    let [i0, i1, i2] = match face {
        [a, b, c, ..] => [*a, *b, *c],
        _ => return DEFAULT_NORMAL,
    };
    let (Some(v0), Some(v1), Some(v2)) = (vertices.get(i0), vertices.get(i1), vertices.get(i2))
    else {
        tracing::trace!(?face, "face references a missing vertex");
        return DEFAULT_NORMAL;
    };

    let p0 = to_point(v0);
    let e1 = to_point(v1) - p0;
    let e2 = to_point(v2) - p0;

    match e1.cross(&e2).try_normalize(DEGENERATE_NORM) {
        Some(n) => to_triple(&n),
        None => {
            tracing::trace!(?face, "degenerate face, using default normal");
            DEFAULT_NORMAL
        }
    }
}

/// Normals for every face, in face order.
pub fn calculate_normals(vertices: &[Vertex], faces: &[Face]) -> Vec<[f64; 3]> {
    faces.iter().map(|f| face_normal(vertices, f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_square() -> Vec<Vertex> {
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn ccw_square_points_up() {
        let n = face_normal(&unit_square(), &[0, 1, 2, 3]);
        assert_eq!(n, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn cw_square_points_down() {
        let n = face_normal(&unit_square(), &[0, 3, 2, 1]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn normals_are_unit_length() {
        let verts = vec![[0.0, 0.0, 0.0], [3.0, 0.0, 1.0], [0.5, 2.0, 4.0]];
        let n = face_normal(&verts, &[0, 1, 2]);
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert_abs_diff_eq!(len, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_vertices_get_default() {
        let verts = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        assert_eq!(face_normal(&verts, &[0, 1, 2]), DEFAULT_NORMAL);
    }

    #[test]
    fn short_faces_get_default() {
        let verts = unit_square();
        assert_eq!(face_normal(&verts, &[0, 1]), DEFAULT_NORMAL);
        assert_eq!(face_normal(&verts, &[]), DEFAULT_NORMAL);
    }

    #[test]
    fn out_of_range_index_gets_default() {
        assert_eq!(face_normal(&unit_square(), &[0, 1, 9]), DEFAULT_NORMAL);
    }

    #[test]
    fn one_normal_per_face() {
        let faces = vec![vec![0, 1, 2, 3], vec![0, 1], vec![3, 2, 1]];
        let normals = calculate_normals(&unit_square(), &faces);
        assert_eq!(normals.len(), faces.len());
        assert_eq!(normals[1], DEFAULT_NORMAL);
        assert_eq!(normals[2], [0.0, 0.0, -1.0]);
    }
}
