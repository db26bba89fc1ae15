//! Incoming visualization requests and stored quotes.
//!
//! Requests arrive as loosely typed JSON: dimension values may be numbers or
//! numeric strings. This module is the validator that stands between that
//! input and the generator, which assumes positive `width` and `length`.

use crate::error::{Result, ToldoError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use toldo_ir::{Dimensions, MaterialSelection, QuoteInfo, DEFAULT_HEIGHT};

/// Largest accepted width, length or height, in meters.
///
/// Pergola rafters are generated every half meter along the length, so the
/// element count grows with it.
pub const MAX_DIMENSION: f64 = 1000.0;

/// Raw dimension fields as received.
pub type RawDimensions = Map<String, Value>;

fn default_complexity() -> f64 {
    1.0
}

/// A request to visualize (or price) a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationRequest {
    /// Product type name.
    pub product_type: String,
    /// Unvalidated dimension fields.
    pub dimensions: RawDimensions,
    /// Material selection, passed through to the geometry.
    #[serde(default)]
    pub materials: MaterialSelection,
    /// Accessory selection, used for pricing only.
    #[serde(default)]
    pub accessories: MaterialSelection,
    /// Multiplier applied to the final price.
    #[serde(default = "default_complexity")]
    pub complexity_factor: f64,
}

impl VisualizationRequest {
    /// Request for already-typed dimensions with no materials.
    pub fn new(product_type: impl Into<String>, dimensions: &Dimensions) -> Self {
        let mut raw = RawDimensions::new();
        raw.insert("width".into(), dimensions.width.into());
        raw.insert("length".into(), dimensions.length.into());
        raw.insert("height".into(), dimensions.height.into());
        raw.insert("angle".into(), dimensions.angle.into());
        Self {
            product_type: product_type.into(),
            dimensions: raw,
            materials: MaterialSelection::new(),
            accessories: MaterialSelection::new(),
            complexity_factor: default_complexity(),
        }
    }

    /// Parse a JSON request body.
    ///
    /// `product_type` and `dimensions` are required and reported as
    /// [`ToldoError::MissingField`] when absent.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        for field in ["product_type", "dimensions"] {
            if value.get(field).is_none() {
                return Err(ToldoError::MissingField(field.to_string()));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Validate and coerce the dimension fields.
    pub fn dimensions(&self) -> Result<Dimensions> {
        validate_dimensions(&self.dimensions)
    }
}

/// Validate raw dimensions and coerce them to [`Dimensions`].
///
/// `width` and `length` must be present, numeric and strictly positive.
/// `height` defaults to 2.5 and `angle` to 0 when absent or null. Width,
/// length and height are capped at [`MAX_DIMENSION`].
pub fn validate_dimensions(raw: &RawDimensions) -> Result<Dimensions> {
    let mut required = [0.0; 2];
    for (slot, field) in required.iter_mut().zip(["width", "length"]) {
        let value = raw
            .get(field)
            .ok_or_else(|| ToldoError::MissingField(field.to_string()))?;
        let number = coerce(field, value)?;
        if number <= 0.0 {
            return Err(ToldoError::NonPositive(field.to_string()));
        }
        *slot = number;
    }

    let optional = |field: &str, default: f64| -> Result<f64> {
        match raw.get(field) {
            None | Some(Value::Null) => Ok(default),
            Some(v) => coerce(field, v),
        }
    };

    let height = optional("height", DEFAULT_HEIGHT)?;

    for (field, value) in [("width", required[0]), ("length", required[1]), ("height", height)] {
        if value > MAX_DIMENSION {
            return Err(ToldoError::TooLarge(field.to_string()));
        }
    }

    Ok(Dimensions {
        width: required[0],
        length: required[1],
        height,
        angle: optional("angle", 0.0)?,
    })
}

/// Read a finite number from a JSON number or numeric string.
fn coerce(field: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| ToldoError::InvalidNumber(field.to_string()))
}

/// A quote as stored by the quoting backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote id.
    pub id: u64,
    /// Product type name (often a legacy id).
    pub product_type: String,
    /// Stored dimension fields.
    #[serde(default)]
    pub dimensions: RawDimensions,
    /// Stored material selection.
    #[serde(default)]
    pub materials: MaterialSelection,
    /// Quoted total.
    #[serde(default)]
    pub total_price: f64,
    /// Workflow status.
    #[serde(default)]
    pub status: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl QuoteRecord {
    /// Visualization request built from the stored fields.
    pub fn to_request(&self) -> VisualizationRequest {
        VisualizationRequest {
            product_type: self.product_type.clone(),
            dimensions: self.dimensions.clone(),
            materials: self.materials.clone(),
            accessories: MaterialSelection::new(),
            complexity_factor: default_complexity(),
        }
    }

    /// Summary attached to the quote's visualization.
    pub fn info(&self) -> QuoteInfo {
        QuoteInfo {
            id: self.id,
            total_price: self.total_price,
            status: self.status.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawDimensions {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let dims = validate_dimensions(&raw(json!({
            "width": "3.5", "length": 4, "height": " 2.8 ", "angle": "15"
        })))
        .unwrap();
        assert_eq!(dims, Dimensions::new(3.5, 4.0).with_height(2.8).with_angle(15.0));
    }

    #[test]
    fn optional_fields_default() {
        let dims = validate_dimensions(&raw(json!({"width": 3, "length": 4, "angle": null}))).unwrap();
        assert_eq!(dims.height, 2.5);
        assert_eq!(dims.angle, 0.0);
    }

    #[test]
    fn missing_width() {
        let err = validate_dimensions(&raw(json!({"length": 4}))).unwrap_err();
        assert!(matches!(err, ToldoError::MissingField(f) if f == "width"));
    }

    #[test]
    fn non_numeric_length() {
        let err = validate_dimensions(&raw(json!({"width": 3, "length": "four"}))).unwrap_err();
        assert!(matches!(err, ToldoError::InvalidNumber(f) if f == "length"));

        let err = validate_dimensions(&raw(json!({"width": true, "length": 4}))).unwrap_err();
        assert!(matches!(err, ToldoError::InvalidNumber(f) if f == "width"));

        let err = validate_dimensions(&raw(json!({"width": "NaN", "length": 4}))).unwrap_err();
        assert!(matches!(err, ToldoError::InvalidNumber(f) if f == "width"));
    }

    #[test]
    fn non_positive_footprint() {
        let err = validate_dimensions(&raw(json!({"width": 0, "length": 4}))).unwrap_err();
        assert!(matches!(err, ToldoError::NonPositive(f) if f == "width"));

        let err = validate_dimensions(&raw(json!({"width": 3, "length": -1}))).unwrap_err();
        assert!(matches!(err, ToldoError::NonPositive(f) if f == "length"));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let err = validate_dimensions(&raw(json!({"width": 3, "length": 1e15}))).unwrap_err();
        assert!(matches!(err, ToldoError::TooLarge(f) if f == "length"));

        let err =
            validate_dimensions(&raw(json!({"width": 3, "length": 4, "height": "5000"}))).unwrap_err();
        assert!(matches!(err, ToldoError::TooLarge(f) if f == "height"));

        let dims = validate_dimensions(&raw(json!({"width": MAX_DIMENSION, "length": 4}))).unwrap();
        assert_eq!(dims.width, MAX_DIMENSION);
    }

    #[test]
    fn invalid_height_is_reported() {
        let err =
            validate_dimensions(&raw(json!({"width": 3, "length": 4, "height": "tall"}))).unwrap_err();
        assert!(matches!(err, ToldoError::InvalidNumber(f) if f == "height"));
    }

    #[test]
    fn request_requires_product_type_and_dimensions() {
        let err = VisualizationRequest::from_json(r#"{"dimensions": {}}"#).unwrap_err();
        assert!(matches!(err, ToldoError::MissingField(f) if f == "product_type"));

        let err = VisualizationRequest::from_json(r#"{"product_type": "tent"}"#).unwrap_err();
        assert!(matches!(err, ToldoError::MissingField(f) if f == "dimensions"));
    }

    #[test]
    fn request_defaults() {
        let req = VisualizationRequest::from_json(
            r#"{"product_type": "tent", "dimensions": {"width": 3, "length": 3}}"#,
        )
        .unwrap();
        assert!(req.materials.is_empty());
        assert!(req.accessories.is_empty());
        assert_eq!(req.complexity_factor, 1.0);
    }

    #[test]
    fn typed_request_roundtrips_dimensions() {
        let dims = Dimensions::new(3.0, 4.0).with_angle(10.0);
        let req = VisualizationRequest::new("pergola", &dims);
        assert_eq!(req.dimensions().unwrap(), dims);
    }

    #[test]
    fn quote_to_request() {
        let quote: QuoteRecord = serde_json::from_value(json!({
            "id": 42,
            "product_type": "toldo_fixo",
            "dimensions": {"width": "5", "length": "3"},
            "materials": {"lona_premium": true},
            "total_price": 1980.0,
            "status": "approved",
            "created_at": "2024-03-01T12:00:00"
        }))
        .unwrap();

        let req = quote.to_request();
        assert_eq!(req.product_type, "toldo_fixo");
        assert_eq!(req.dimensions().unwrap(), Dimensions::new(5.0, 3.0));
        assert_eq!(req.materials.len(), 1);

        let info = quote.info();
        assert_eq!(info.id, 42);
        assert_eq!(info.status, "approved");
    }
}
