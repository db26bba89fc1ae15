//! Polycarbonate cover.

use super::{flags, sloped_box, Shape, TOP_FACE};
use crate::math::slope_drop;
use toldo_ir::{Segment, Structure};

/// Material tag reported for the roofing sheet.
pub const COVER_MATERIAL: &str = "polycarbonate";

/// Intermediate beams placed under the sheet.
const BEAM_COUNT: usize = 2;

/// Polycarbonate cover: only the sloped roof sheet, carried by up to two
/// transverse beams.
///
/// Beams are spaced `min(width, length) / 3` apart from the front edge and
/// follow the roof down the slope. A beam that would land at or beyond the
/// back edge is omitted.
pub fn polycarbonate_cover(width: f64, length: f64, height: f64, angle: f64) -> Shape {
    let spacing = width.min(length) / 3.0;
    let support_beams: Vec<Segment> = (1..=BEAM_COUNT)
        .map(|i| i as f64 * spacing)
        .filter(|&y| y < length)
        .map(|y| {
            let z = height - slope_drop(y, angle);
            [[0.0, y, z], [width, y, z]]
        })
        .collect();

    Shape {
        vertices: sloped_box(width, length, height, angle),
        faces: vec![TOP_FACE.to_vec()],
        features: flags(&[
            ("transparent", true),
            ("uv_protection", true),
            ("thermal_insulation", true),
        ]),
        structure: Structure::PolycarbonateCover {
            support_beams,
            material_type: COVER_MATERIAL.to_string(),
        },
    }
}
