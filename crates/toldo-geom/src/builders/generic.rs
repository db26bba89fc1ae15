//! Fallback for unrecognized product types.

use super::{sloped_box, Shape, TOP_FACE};
use toldo_ir::{Features, Structure};

/// A flat-roofed box showing only its top face, with no features or
/// auxiliary structure.
pub fn generic_structure(width: f64, length: f64, height: f64) -> Shape {
    Shape {
        vertices: sloped_box(width, length, height, 0.0),
        faces: vec![TOP_FACE.to_vec()],
        features: Features::new(),
        structure: Structure::None {},
    }
}
