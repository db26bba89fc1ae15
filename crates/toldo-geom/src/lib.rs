#![warn(missing_docs)]

//! Parametric 3D geometry for awnings, covers, pergolas and tents.
//!
//! Given a product type, its [`Dimensions`] and a [`MaterialSelection`],
//! [`generate`] builds a vertex/face mesh, product-specific structural
//! elements, derived measurements and capability flags.
//! [`export_to_threejs`] then reshapes the result for a client renderer,
//! adding per-face normals and dimension callouts.
//!
//! Every function here is pure: no shared state, no I/O, no failure modes.
//!
//! # Example
//!
//! ```rust
//! use toldo_geom::{export_to_threejs, generate, FixedClock};
//! use toldo_ir::{Dimensions, MaterialSelection};
//!
//! let doc = generate("fixed-awning", &Dimensions::new(3.0, 4.0), MaterialSelection::new());
//! let export = export_to_threejs(&doc, &FixedClock::new("2024-01-01T00:00:00Z"));
//! assert_eq!(export.geometry.normals.len(), export.geometry.faces.len());
//! ```

pub mod annotate;
pub mod builders;
pub mod export;
pub mod math;
pub mod measure;
pub mod normals;

pub use annotate::generate_quotation_lines;
pub use builders::{support_posts, Shape};
pub use export::{export_to_threejs, Clock, FixedClock, SystemClock};
pub use math::round_to_centimeter;
pub use measure::calculate_measurements;
pub use normals::{calculate_normals, face_normal, DEFAULT_NORMAL};

use std::fmt;
use toldo_ir::{Dimensions, GeometryDocument, MaterialSelection};

/// The closed set of product geometries.
///
/// Unknown names resolve to [`ProductType::Generic`]; there is no way to
/// plug in additional builders at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Fixed awning with support posts.
    FixedAwning,
    /// Motorized retractable awning.
    RetractableAwning,
    /// Polycarbonate roof cover.
    PolycarbonateCover,
    /// Open-lattice pergola.
    Pergola,
    /// Ridge tent.
    Tent,
    /// Fallback flat box.
    Generic,
}

impl ProductType {
    /// All named product types, in catalog order.
    pub const ALL: [ProductType; 5] = [
        ProductType::FixedAwning,
        ProductType::RetractableAwning,
        ProductType::PolycarbonateCover,
        ProductType::Pergola,
        ProductType::Tent,
    ];

    /// Resolve a product type name (case-sensitive).
    ///
    /// Accepts the canonical ids as well as the legacy ids stored on older
    /// quote records (`toldo_fixo`, `pergolado`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "fixed-awning" | "toldo_fixo" => ProductType::FixedAwning,
            "retractable-awning" | "toldo_retratil" => ProductType::RetractableAwning,
            "polycarbonate-cover" | "cobertura_policarbonato" => ProductType::PolycarbonateCover,
            "pergola" | "pergolado" => ProductType::Pergola,
            "tent" | "tenda" => ProductType::Tent,
            _ => ProductType::Generic,
        }
    }

    /// Canonical id.
    pub fn id(self) -> &'static str {
        match self {
            ProductType::FixedAwning => "fixed-awning",
            ProductType::RetractableAwning => "retractable-awning",
            ProductType::PolycarbonateCover => "polycarbonate-cover",
            ProductType::Pergola => "pergola",
            ProductType::Tent => "tent",
            ProductType::Generic => "generic",
        }
    }

    /// Legacy id used by stored quotes, if any.
    pub fn legacy_id(self) -> Option<&'static str> {
        match self {
            ProductType::FixedAwning => Some("toldo_fixo"),
            ProductType::RetractableAwning => Some("toldo_retratil"),
            ProductType::PolycarbonateCover => Some("cobertura_policarbonato"),
            ProductType::Pergola => Some("pergolado"),
            ProductType::Tent => Some("tenda"),
            ProductType::Generic => None,
        }
    }

    /// Run the builder for this product type.
    pub fn build(self, dimensions: &Dimensions) -> Shape {
        let Dimensions {
            width,
            length,
            height,
            angle,
        } = *dimensions;

        match self {
            ProductType::FixedAwning => builders::fixed_awning(width, length, height, angle),
            ProductType::RetractableAwning => {
                builders::retractable_awning(width, length, height, angle)
            }
            ProductType::PolycarbonateCover => {
                builders::polycarbonate_cover(width, length, height, angle)
            }
            ProductType::Pergola => builders::pergola(width, length, height),
            ProductType::Tent => builders::tent(width, length, height),
            ProductType::Generic => builders::generic_structure(width, length, height),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Build the geometry document for a product.
///
/// `product_type` is recorded verbatim in the document. Dimensions are used
/// as given: validating them is the caller's job, and out-of-range values
/// produce degenerate geometry rather than an error.
pub fn generate(
    product_type: &str,
    dimensions: &Dimensions,
    materials: MaterialSelection,
) -> GeometryDocument {
    let kind = ProductType::from_name(product_type);
    if kind == ProductType::Generic && product_type != kind.id() {
        tracing::debug!(product_type, "unknown product type, using generic structure");
    } else {
        tracing::debug!(product_type, builder = %kind, "building geometry");
    }

    let measurements = calculate_measurements(dimensions);
    let shape = kind.build(dimensions);
    tracing::trace!(
        vertices = shape.vertices.len(),
        faces = shape.faces.len(),
        "geometry built"
    );

    GeometryDocument {
        product_type: product_type.to_string(),
        vertices: shape.vertices,
        faces: shape.faces,
        materials,
        measurements,
        features: shape.features,
        structure: shape.structure,
    }
}
