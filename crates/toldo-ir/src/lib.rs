#![warn(missing_docs)]

//! Geometry document model for the toldo visualizer.
//!
//! This crate defines the data that flows between the geometry generator
//! and its consumers: the input [`Dimensions`] and [`MaterialSelection`],
//! the generated [`GeometryDocument`], and the renderer-facing
//! [`RenderableExport`].
//!
//! The model is purely declarative. Building geometry is handled by
//! `toldo-geom`; this crate only knows how to hold and (de)serialize it.
//! All coordinates are meters, in a local frame with the origin at one base
//! corner, `x` along the width, `y` along the length and `z` up.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A vertex position `[x, y, z]` in meters.
pub type Vertex = [f64; 3];

/// A planar polygon given as indices into the vertex list (3 or 4 entries).
pub type Face = Vec<usize>;

/// A straight structural member from one point to another.
pub type Segment = [Vertex; 2];

/// Default structure height in meters when none is supplied.
pub const DEFAULT_HEIGHT: f64 = 2.5;

/// Product type recorded when a document does not carry one.
pub const GENERIC_TYPE: &str = "generic";

/// Version string attached to every export.
pub const EXPORT_VERSION: &str = "1.0";

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn generic_type() -> String {
    GENERIC_TYPE.to_string()
}

// =============================================================================
// Inputs
// =============================================================================

/// Footprint, height and roof slope of a structure.
///
/// Missing fields deserialize to `0`, except `height` which defaults to
/// [`DEFAULT_HEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the x axis.
    #[serde(default)]
    pub width: f64,
    /// Extent along the y axis.
    #[serde(default)]
    pub length: f64,
    /// Height of the front edge.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Roof slope in degrees.
    #[serde(default)]
    pub angle: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 0.0,
            length: 0.0,
            height: DEFAULT_HEIGHT,
            angle: 0.0,
        }
    }
}

impl Dimensions {
    /// Footprint with the default height and a flat roof.
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            width,
            length,
            ..Self::default()
        }
    }

    /// Replace the height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Replace the roof slope (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// Value attached to a material or accessory key.
///
/// Numbers keep their JSON representation so the selection can be echoed
/// back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialValue {
    /// Selected / not selected.
    Flag(bool),
    /// A quantity.
    Number(serde_json::Number),
    /// A color, finish or catalog id.
    Text(String),
}

impl MaterialValue {
    /// Whether this entry counts as chosen: `true`, a non-zero number or a
    /// non-empty string.
    pub fn is_selected(&self) -> bool {
        match self {
            MaterialValue::Flag(b) => *b,
            MaterialValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            MaterialValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for MaterialValue {
    fn from(b: bool) -> Self {
        MaterialValue::Flag(b)
    }
}

impl From<&str> for MaterialValue {
    fn from(s: &str) -> Self {
        MaterialValue::Text(s.to_string())
    }
}

/// Open, string-keyed material and accessory selection.
///
/// The generator never interprets this map; it is carried through to the
/// output unchanged.
pub type MaterialSelection = BTreeMap<String, MaterialValue>;

// =============================================================================
// Generated geometry
// =============================================================================

/// Quantities derived from [`Dimensions`].
///
/// `area`, `real_area`, `perimeter` and `diagonal` are rounded to the
/// centimeter; the input dimensions are echoed as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Footprint area (`width * length`).
    pub area: f64,
    /// Roof surface area, accounting for slope.
    pub real_area: f64,
    /// Footprint perimeter.
    pub perimeter: f64,
    /// Input width.
    pub width: f64,
    /// Input length.
    pub length: f64,
    /// Input height.
    pub height: f64,
    /// Input slope in degrees.
    pub angle: f64,
    /// Footprint diagonal.
    pub diagonal: f64,
}

/// A product capability flag or range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Feature {
    /// Capability present or absent.
    Flag(bool),
    /// Closed numeric range `[min, max]`.
    Range([f64; 2]),
}

/// Feature map keyed by capability name.
pub type Features = BTreeMap<String, Feature>;

/// Round aluminum support post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportPost {
    /// Base of the post.
    pub position: Vertex,
    /// Post height.
    pub height: f64,
    /// Post diameter.
    pub diameter: f64,
    /// Material tag.
    pub material: String,
}

/// Square timber/aluminum post of a pergola.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticePost {
    /// Base of the post.
    pub position: Vertex,
    /// Post height.
    pub height: f64,
    /// Cross-section `[x, y]`.
    pub cross_section: [f64; 2],
}

/// Housing of a retractable awning's fabric roll and motor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cassette {
    /// Center of the housing.
    pub position: Vertex,
    /// Box size `[x, y, z]`.
    pub dimensions: [f64; 3],
}

/// Product-specific structural elements that accompany the mesh.
///
/// Untagged: the variant's fields sit directly on the document
/// (`support_structure`, `rails`, `cassette`, ...) and the variant is
/// recognized by which of them are present. Variants with more required
/// fields are listed first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Structure {
    /// Retractable awning: posts, side rails and the cassette.
    RetractableAwning {
        /// Corner and mid-span posts.
        support_structure: Vec<SupportPost>,
        /// Left and right guide rails.
        rails: Vec<Segment>,
        /// Front cassette box.
        cassette: Cassette,
    },
    /// Fixed awning: support posts only.
    FixedAwning {
        /// Corner and mid-span posts.
        support_structure: Vec<SupportPost>,
    },
    /// Polycarbonate cover: intermediate beams under the sheet.
    PolycarbonateCover {
        /// Transverse support beams.
        support_beams: Vec<Segment>,
        /// Roofing material tag.
        material_type: String,
    },
    /// Pergola: posts, perimeter beams and rafters.
    Pergola {
        /// One post per corner.
        posts: Vec<LatticePost>,
        /// Perimeter beams at full height.
        main_beams: Vec<Segment>,
        /// Transverse rafters.
        rafters: Vec<Segment>,
    },
    /// No auxiliary elements.
    None {},
}

impl Default for Structure {
    fn default() -> Self {
        Structure::None {}
    }
}

/// Output of the geometry generator.
///
/// Every collection defaults to empty when deserializing, so a partially
/// populated document is still exportable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDocument {
    /// Product type string as supplied by the caller.
    #[serde(rename = "type", default = "generic_type")]
    pub product_type: String,
    /// Mesh vertices.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    /// Mesh faces.
    #[serde(default)]
    pub faces: Vec<Face>,
    /// Material selection, passed through verbatim.
    #[serde(default)]
    pub materials: MaterialSelection,
    /// Derived measurements.
    #[serde(default)]
    pub measurements: Measurements,
    /// Product capability flags.
    #[serde(default)]
    pub features: Features,
    /// Auxiliary structural elements, flattened into the document.
    #[serde(flatten)]
    pub structure: Structure,
}

impl Default for GeometryDocument {
    fn default() -> Self {
        Self {
            product_type: generic_type(),
            vertices: Vec::new(),
            faces: Vec::new(),
            materials: MaterialSelection::new(),
            measurements: Measurements::default(),
            features: Features::new(),
            structure: Structure::default(),
        }
    }
}

impl GeometryDocument {
    /// Serialize to a pretty JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// =============================================================================
// Renderer export
// =============================================================================

/// Dimension or area callout drawn over the 3D view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuotationLine {
    /// Linear dimension from `start` to `end`.
    Dimension {
        /// Display text, e.g. `"3.00m"`.
        label: String,
        /// Start of the measured edge.
        start: Vertex,
        /// End of the measured edge.
        end: Vertex,
        /// Displacement applied when drawing the line.
        offset: Vertex,
    },
    /// Area label anchored at a point.
    Area {
        /// Display text, e.g. `"Área: 12.00m²"`.
        label: String,
        /// Anchor point.
        position: Vertex,
        /// Displacement applied when drawing the label.
        offset: Vertex,
    },
}

/// Mesh buffers in the shape a client renderer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportGeometry {
    /// Vertex positions.
    pub vertices: Vec<Vertex>,
    /// Face index lists.
    pub faces: Vec<Face>,
    /// One unit normal per face.
    pub normals: Vec<[f64; 3]>,
}

/// Provenance of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Product type of the source document.
    #[serde(rename = "type")]
    pub product_type: String,
    /// Timestamp supplied by the exporting clock.
    pub generated_at: String,
    /// Export format version.
    pub version: String,
}

/// Summary of the quote a visualization was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Quote id.
    pub id: u64,
    /// Quoted total.
    pub total_price: f64,
    /// Workflow status (`pending`, `approved`, ...).
    pub status: String,
    /// Creation time, if recorded.
    pub created_at: Option<String>,
}

/// A [`GeometryDocument`] reshaped for a client-side renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableExport {
    /// Vertices, faces and normals.
    pub geometry: ExportGeometry,
    /// Material selection, passed through verbatim.
    pub materials: MaterialSelection,
    /// Derived measurements.
    pub measurements: Measurements,
    /// Dimension and area callouts.
    pub quotation_lines: Vec<QuotationLine>,
    /// Product capability flags.
    pub features: Features,
    /// Provenance.
    pub metadata: Metadata,
    /// Originating quote, when rendered from a stored quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_info: Option<QuoteInfo>,
}

impl RenderableExport {
    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
