//! Math helpers shared by the builders.
//!
//! Thin wrappers around nalgebra plus the two numeric conventions the
//! generator relies on: roof-slope drop and centimeter rounding.

use nalgebra::Vector3;
use toldo_ir::Vertex;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Cross products at or below this norm are treated as degenerate.
pub const DEGENERATE_NORM: f64 = 1e-12;

/// Convert an IR vertex to a nalgebra point.
pub fn to_point(v: &Vertex) -> Point3 {
    Point3::new(v[0], v[1], v[2])
}

/// Convert a nalgebra vector back to an IR triple.
pub fn to_triple(v: &Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

/// Height lost at distance `y` from the front edge for a roof sloped at
/// `angle_deg` degrees.
pub fn slope_drop(y: f64, angle_deg: f64) -> f64 {
    y * angle_deg.to_radians().tan()
}

/// Round to two decimal places (one centimeter), ties to even.
///
/// Applied only where values leave the generator (measurements and
/// prices), never to intermediate results.
pub fn round_to_centimeter(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flat_roof_has_no_drop() {
        assert_eq!(slope_drop(4.0, 0.0), 0.0);
    }

    #[test]
    fn forty_five_degrees_drops_one_for_one() {
        assert_abs_diff_eq!(slope_drop(3.0, 45.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rounding_to_centimeter() {
        assert_eq!(round_to_centimeter(12.345_6), 12.35);
        assert_eq!(round_to_centimeter(5.0), 5.0);
        assert_eq!(round_to_centimeter(0.004), 0.0);
        assert_eq!(round_to_centimeter(-1.236), -1.24);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_to_centimeter(0.125), 0.12);
        assert_eq!(round_to_centimeter(4.125), 4.12);
        assert_eq!(round_to_centimeter(0.375), 0.38);
        assert_eq!(round_to_centimeter(-0.125), -0.12);
    }

    #[test]
    fn point_conversion_roundtrip() {
        let p = to_point(&[1.0, 2.0, 3.0]);
        assert_eq!(to_triple(&p.coords), [1.0, 2.0, 3.0]);
    }
}
