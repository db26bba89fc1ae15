#![warn(missing_docs)]

//! Awning and cover visualization service.
//!
//! Wraps the pure generator in [`toldo_geom`] with the parts that can fail:
//! request validation, stored quotes, pricing, configuration and file export.
//!
//! ```rust
//! use toldo::{visualize, VisualizationRequest};
//! use toldo_geom::FixedClock;
//!
//! let request = VisualizationRequest::from_json(
//!     r#"{"product_type": "tent", "dimensions": {"width": "3", "length": 4}}"#,
//! )
//! .unwrap();
//! let export = visualize(&request, &FixedClock::new("2024-01-01T00:00:00Z")).unwrap();
//! assert_eq!(export.metadata.product_type, "tent");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod pricing;
pub mod request;

pub use catalog::{materials, products, MaterialCatalog, ProductInfo};
pub use config::{Config, ExportConfig};
pub use error::{Result, ToldoError};
pub use export::{export_bytes, write_export, ExportFormat};
pub use pricing::{calculate_price, PriceBreakdown, PricingTable};
pub use request::{validate_dimensions, QuoteRecord, RawDimensions, VisualizationRequest};

use toldo_geom::{export_to_threejs, generate, Clock};
use toldo_ir::RenderableExport;

/// Validate a request and build its renderer document.
pub fn visualize(request: &VisualizationRequest, clock: &dyn Clock) -> Result<RenderableExport> {
    let dimensions = request.dimensions()?;
    let doc = generate(&request.product_type, &dimensions, request.materials.clone());
    Ok(export_to_threejs(&doc, clock))
}

/// Renderer document for a stored quote, with the quote summary attached.
pub fn visualize_quote(quote: &QuoteRecord, clock: &dyn Clock) -> Result<RenderableExport> {
    let mut export = visualize(&quote.to_request(), clock)?;
    export.quote_info = Some(quote.info());
    tracing::debug!(quote_id = quote.id, "visualized quote");
    Ok(export)
}
