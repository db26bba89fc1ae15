//! Ridge tent.

use super::{flags, Shape};
use toldo_ir::Structure;

/// Eave height as a fraction of the ridge height.
pub const EAVE_RATIO: f64 = 0.6;

/// Ridge tent: a gabled prism with the ridge at full height running from
/// `y = 0` to `y = length` at mid-width, and eaves at `0.6 * height`.
///
/// ```text
///           8 ______________ 9        ridge (x = width/2)
///          /\               /\
///        4/__\5 ........  7/__\6      eaves
///        |    |          |    |
///        0----1  ......  3----2       ground
/// ```
///
/// Each gable end is split into a wall quad and a triangle under the ridge;
/// the two roof slopes are quads. All faces wind outward.
pub fn tent(width: f64, length: f64, height: f64) -> Shape {
    let eave = height * EAVE_RATIO;
    let mid = width / 2.0;

    let vertices = vec![
        [0.0, 0.0, 0.0],
        [width, 0.0, 0.0],
        [width, length, 0.0],
        [0.0, length, 0.0],
        [0.0, 0.0, eave],
        [width, 0.0, eave],
        [width, length, eave],
        [0.0, length, eave],
        [mid, 0.0, height],
        [mid, length, height],
    ];

    let faces = vec![
        vec![0, 1, 5, 4], // front wall
        vec![4, 5, 8],    // front gable
        vec![2, 3, 7, 6], // back wall
        vec![6, 7, 9],    // back gable
        vec![4, 8, 9, 7], // left slope
        vec![5, 6, 9, 8], // right slope
    ];

    Shape {
        vertices,
        faces,
        features: flags(&[
            ("portable", true),
            ("weather_resistant", true),
            ("quick_setup", true),
        ]),
        structure: Structure::None {},
    }
}
