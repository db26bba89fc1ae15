//! Dimension and area callouts for the 3D view.

use toldo_ir::{Measurements, QuotationLine};

/// How far dimension lines are pushed away from the structure.
pub const LINE_OFFSET: f64 = 0.5;

/// How far the area label floats above the ground.
pub const AREA_LIFT: f64 = 0.1;

/// Format a length for display, e.g. `3.00m`.
pub fn format_length(meters: f64) -> String {
    format!("{meters:.2}m")
}

/// Format an area for display, e.g. `Área: 12.00m²`.
pub fn format_area(square_meters: f64) -> String {
    format!("Área: {square_meters:.2}m²")
}

/// The fixed set of four callouts: width along x, length along y, height
/// along z, and the footprint area at its center.
pub fn generate_quotation_lines(m: &Measurements) -> Vec<QuotationLine> {
    vec![
        QuotationLine::Dimension {
            label: format_length(m.width),
            start: [0.0, 0.0, 0.0],
            end: [m.width, 0.0, 0.0],
            offset: [0.0, -LINE_OFFSET, 0.0],
        },
        QuotationLine::Dimension {
            label: format_length(m.length),
            start: [0.0, 0.0, 0.0],
            end: [0.0, m.length, 0.0],
            offset: [-LINE_OFFSET, 0.0, 0.0],
        },
        QuotationLine::Dimension {
            label: format_length(m.height),
            start: [0.0, 0.0, 0.0],
            end: [0.0, 0.0, m.height],
            offset: [-LINE_OFFSET, -LINE_OFFSET, 0.0],
        },
        QuotationLine::Area {
            label: format_area(m.area),
            position: [m.width / 2.0, m.length / 2.0, 0.0],
            offset: [0.0, 0.0, AREA_LIFT],
        },
    ]
}
