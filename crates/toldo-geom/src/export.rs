//! Assembly of the renderer-facing export.

use crate::annotate::generate_quotation_lines;
use crate::normals::calculate_normals;
use std::time::{SystemTime, UNIX_EPOCH};
use toldo_ir::{ExportGeometry, GeometryDocument, Metadata, RenderableExport, EXPORT_VERSION};

/// Source of the `generated_at` stamp.
pub trait Clock {
    /// Current time as a display string.
    fn now(&self) -> String;
}

/// Wall clock, formatted as RFC 3339 UTC with second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format_rfc3339(secs)
    }
}

/// Clock that always reports the same stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    /// Create a clock frozen at `stamp`.
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// Format seconds since the Unix epoch as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_rfc3339(unix_secs: u64) -> String {
    let days = unix_secs / 86_400;
    let rem = unix_secs % 86_400;
    let (year, month, day) = civil_from_days(days as i64);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian `(year, month, day)`.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Reshape a document for a client-side renderer.
///
/// Vertices and faces are copied into `geometry` next to one normal per
/// face; materials, measurements and features pass through unchanged; the
/// four quotation lines and the metadata block are attached.
pub fn export_to_threejs(doc: &GeometryDocument, clock: &dyn Clock) -> RenderableExport {
    let normals = calculate_normals(&doc.vertices, &doc.faces);

    RenderableExport {
        geometry: ExportGeometry {
            vertices: doc.vertices.clone(),
            faces: doc.faces.clone(),
            normals,
        },
        materials: doc.materials.clone(),
        measurements: doc.measurements,
        quotation_lines: generate_quotation_lines(&doc.measurements),
        features: doc.features.clone(),
        metadata: Metadata {
            product_type: doc.product_type.clone(),
            generated_at: clock.now(),
            version: EXPORT_VERSION.to_string(),
        },
        quote_info: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toldo_ir::GENERIC_TYPE;

    #[test]
    fn epoch_formats() {
        assert_eq!(format_rfc3339(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_rfc3339(951_782_400), "2000-02-29T00:00:00Z");
        assert_eq!(format_rfc3339(1_700_000_000), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn system_clock_is_rfc3339() {
        let stamp = SystemClock.now();
        assert_eq!(stamp.len(), 20);
        assert!(stamp.ends_with('Z'));
    }

    #[test]
    fn malformed_document_exports_empty_collections() {
        let doc = GeometryDocument::from_json("{}").unwrap();
        let export = export_to_threejs(&doc, &FixedClock::new("t0"));
        assert!(export.geometry.vertices.is_empty());
        assert!(export.geometry.faces.is_empty());
        assert!(export.geometry.normals.is_empty());
        assert!(export.materials.is_empty());
        assert!(export.features.is_empty());
        assert_eq!(export.quotation_lines.len(), 4);
        assert_eq!(export.metadata.product_type, GENERIC_TYPE);
        assert_eq!(export.metadata.generated_at, "t0");
        assert_eq!(export.metadata.version, "1.0");
    }
}
