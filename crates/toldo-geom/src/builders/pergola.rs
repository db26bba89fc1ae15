//! Pergola.

use super::{flags, Shape};
use toldo_ir::{LatticePost, Segment, Structure};

/// Distance between rafters along the length.
pub const RAFTER_SPACING: f64 = 0.5;

/// Post cross-section `[x, y]`.
pub const POST_SECTION: [f64; 2] = [0.1, 0.1];

/// Pergola: an open lattice with no roof mesh. All geometry is carried by
/// the structure: corner posts, four perimeter beams at full height and
/// rafters across the width every [`RAFTER_SPACING`] along the length.
///
/// The rafter count is `length / RAFTER_SPACING + 1` with no cap of its own;
/// request validation bounds `length` before it gets here.
pub fn pergola(width: f64, length: f64, height: f64) -> Shape {
    let posts = [[0.0, 0.0], [width, 0.0], [width, length], [0.0, length]]
        .into_iter()
        .map(|[x, y]| LatticePost {
            position: [x, y, 0.0],
            height,
            cross_section: POST_SECTION,
        })
        .collect();

    let main_beams = vec![
        [[0.0, 0.0, height], [width, 0.0, height]],
        [[0.0, length, height], [width, length, height]],
        [[0.0, 0.0, height], [0.0, length, height]],
        [[width, 0.0, height], [width, length, height]],
    ];

    // Saturating cast: a negative or NaN length yields a single candidate.
    let candidates = ((length / RAFTER_SPACING).floor() as usize).saturating_add(1);
    let rafters: Vec<Segment> = (0..candidates)
        .map(|i| i as f64 * RAFTER_SPACING)
        .filter(|&y| y <= length)
        .map(|y| [[0.0, y, height], [width, y, height]])
        .collect();

    tracing::trace!(rafters = rafters.len(), "pergola lattice");

    Shape {
        vertices: Vec::new(),
        faces: Vec::new(),
        features: flags(&[
            ("open_roof", true),
            ("climbing_support", true),
            ("partial_shade", true),
        ]),
        structure: Structure::Pergola {
            posts,
            main_beams,
            rafters,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(shape: &Shape) -> (&[LatticePost], &[Segment], &[Segment]) {
        match &shape.structure {
            Structure::Pergola {
                posts,
                main_beams,
                rafters,
            } => (posts, main_beams, rafters),
            other => panic!("unexpected structure {other:?}"),
        }
    }

    #[test]
    fn rafters_every_half_meter() {
        let shape = pergola(3.0, 2.0, 2.5);
        let (_, _, rafters) = parts(&shape);
        assert_eq!(rafters.len(), 5);
        assert!(rafters.iter().all(|r| r[0][1] <= 2.0));
        assert_eq!(rafters[4][0][1], 2.0);
    }

    #[test]
    fn rafters_clipped_to_length() {
        let shape = pergola(3.0, 2.3, 2.5);
        let (_, _, rafters) = parts(&shape);
        // 0.0, 0.5, 1.0, 1.5, 2.0
        assert_eq!(rafters.len(), 5);
        assert!(rafters.iter().all(|r| r[0][1] <= 2.3));
    }

    #[test]
    fn posts_and_beams() {
        let shape = pergola(4.0, 3.0, 2.7);
        let (posts, beams, _) = parts(&shape);
        assert_eq!(posts.len(), 4);
        assert!(posts.iter().all(|p| p.cross_section == [0.1, 0.1]));
        assert_eq!(beams.len(), 4);
        assert!(beams.iter().flatten().all(|p| p[2] == 2.7));
    }

    #[test]
    fn open_lattice_features() {
        let shape = pergola(4.0, 3.0, 2.7);
        assert_eq!(
            shape.features,
            flags(&[
                ("open_roof", true),
                ("climbing_support", true),
                ("partial_shade", true),
            ])
        );
    }

    #[test]
    fn no_roof_mesh() {
        let shape = pergola(4.0, 3.0, 2.7);
        assert!(shape.vertices.is_empty());
        assert!(shape.faces.is_empty());
    }
}
