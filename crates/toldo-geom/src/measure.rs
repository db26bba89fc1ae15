//! Measurement derivation.

use crate::math::round_to_centimeter;
use toldo_ir::{Dimensions, Measurements};

/// Derive footprint and roof measurements from the input dimensions.
///
/// A sloped roof is longer than its footprint by `1 / cos(angle)`, which is
/// what `real_area` reflects. Derived values are rounded to the centimeter;
/// the inputs are echoed unchanged.
pub fn calculate_measurements(dimensions: &Dimensions) -> Measurements {
    let Dimensions {
        width,
        length,
        height,
        angle,
    } = *dimensions;

    let area = width * length;
    let perimeter = 2.0 * (width + length);
    let real_area = if angle > 0.0 {
        let real_length = length / angle.to_radians().cos();
        width * real_length
    } else {
        area
    };

    Measurements {
        area: round_to_centimeter(area),
        real_area: round_to_centimeter(real_area),
        perimeter: round_to_centimeter(perimeter),
        width,
        length,
        height,
        angle,
        diagonal: round_to_centimeter((width * width + length * length).sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn area_and_perimeter() {
        for (w, l) in [(3.0, 4.0), (2.5, 7.25), (0.3, 11.0), (12.0, 1.75)] {
            let m = calculate_measurements(&Dimensions::new(w, l));
            assert_eq!(m.area, round_to_centimeter(w * l));
            assert_eq!(m.perimeter, round_to_centimeter(2.0 * (w + l)));
        }
    }

    #[test]
    fn flat_roof_real_area_matches_area() {
        let m = calculate_measurements(&Dimensions::new(3.7, 4.2));
        assert_eq!(m.real_area, m.area);
    }

    #[test]
    fn sloped_roof_increases_real_area() {
        for angle in [5.0, 15.0, 30.0, 60.0] {
            let m = calculate_measurements(&Dimensions::new(3.0, 4.0).with_angle(angle));
            assert!(
                m.real_area > m.area,
                "angle {angle}: real_area {} <= area {}",
                m.real_area,
                m.area
            );
        }
    }

    #[test]
    fn thirty_degree_roof() {
        let m = calculate_measurements(&Dimensions::new(3.0, 4.0).with_angle(30.0));
        // 3 * 4 / cos(30°) = 13.856...
        assert_eq!(m.real_area, 13.86);
        assert_eq!(m.area, 12.0);
    }

    #[test]
    fn diagonal() {
        let m = calculate_measurements(&Dimensions::new(3.0, 4.0));
        assert_eq!(m.diagonal, 5.0);

        let m = calculate_measurements(&Dimensions::new(2.0, 7.0));
        assert_abs_diff_eq!(m.diagonal, (4.0f64 + 49.0).sqrt(), epsilon = 0.005);
    }

    #[test]
    fn tied_area_rounds_to_even() {
        // 0.5 * 0.25 = 0.125 exactly
        let m = calculate_measurements(&Dimensions::new(0.5, 0.25));
        assert_eq!(m.area, 0.12);
        assert_eq!(m.perimeter, 1.5);
    }

    #[test]
    fn inputs_are_echoed() {
        let dims = Dimensions::new(3.333, 4.444).with_height(2.75).with_angle(12.5);
        let m = calculate_measurements(&dims);
        assert_eq!(m.width, 3.333);
        assert_eq!(m.length, 4.444);
        assert_eq!(m.height, 2.75);
        assert_eq!(m.angle, 12.5);
    }
}
