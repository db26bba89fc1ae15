//! Price estimation from footprint, materials and accessories.

use crate::catalog::{self, ACCESSORIES};
use crate::error::Result;
use crate::request::VisualizationRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use toldo_geom::{round_to_centimeter, ProductType};
use toldo_ir::MaterialSelection;

/// Price per m² for product types missing from [`PricingTable::base_prices`].
pub const DEFAULT_BASE_PRICE: f64 = 150.0;

/// Prices used by [`calculate_price`].
///
/// Loaded from the `[pricing]` section of the config file; any table left
/// out keeps its built-in contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    /// Price per m² for unknown product types.
    pub default_base_price: f64,
    /// Price per m² by product type id.
    pub base_prices: BTreeMap<String, f64>,
    /// Surcharge per m² for each selected material.
    pub material_prices: BTreeMap<String, f64>,
    /// Flat price of each selected accessory.
    pub accessory_prices: BTreeMap<String, f64>,
}

impl Default for PricingTable {
    fn default() -> Self {
        let base_prices = ProductType::ALL
            .into_iter()
            .filter_map(|kind| Some((kind.id().to_string(), catalog::base_price(kind)?)))
            .collect();

        let material_prices = [
            ("estrutura_aco", 25.0),
            ("estrutura_madeira", -15.0),
            ("lona_premium", 20.0),
            ("policarbonato", 40.0),
            ("vidro", 80.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let accessory_prices = ACCESSORIES
            .iter()
            .map(|&(id, _, price)| (id.to_string(), price))
            .collect();

        Self {
            default_base_price: DEFAULT_BASE_PRICE,
            base_prices,
            material_prices,
            accessory_prices,
        }
    }
}

impl PricingTable {
    /// Price per m² for a product type.
    ///
    /// Looks up the name as given, then its canonical id, so legacy ids
    /// price the same as their canonical counterparts.
    pub fn base_price(&self, product_type: &str) -> f64 {
        if let Some(price) = self.base_prices.get(product_type) {
            return *price;
        }
        let kind = ProductType::from_name(product_type);
        if kind != ProductType::Generic {
            if let Some(price) = self.base_prices.get(kind.id()) {
                return *price;
            }
        }
        self.default_base_price
    }
}

/// Itemized price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Footprint area times the product's base price.
    pub base_price: f64,
    /// Material surcharges.
    pub material_cost: f64,
    /// Accessory prices.
    pub accessory_cost: f64,
    /// Change introduced by the complexity factor.
    pub complexity_adjustment: f64,
    /// Final price.
    pub total_price: f64,
    /// Footprint area.
    pub area: f64,
    /// Base price per m² that was applied.
    pub base_price_per_m2: f64,
}

/// Sum of `price(key)` over every selected key that has a price.
fn selected_total(selection: &MaterialSelection, prices: &BTreeMap<String, f64>) -> f64 {
    selection
        .iter()
        .filter(|(_, value)| value.is_selected())
        .filter_map(|(key, _)| prices.get(key))
        .sum()
}

/// Price a request.
///
/// `base = area * base_price`, materials add `price * area`, accessories add
/// their flat price, and the sum is scaled by the complexity factor.
pub fn calculate_price(request: &VisualizationRequest, table: &PricingTable) -> Result<PriceBreakdown> {
    let dims = request.dimensions()?;
    let area = dims.width * dims.length;

    let base_price_per_m2 = table.base_price(&request.product_type);
    let base = area * base_price_per_m2;
    let material_cost = selected_total(&request.materials, &table.material_prices) * area;
    let accessory_cost = selected_total(&request.accessories, &table.accessory_prices);

    let subtotal = base + material_cost + accessory_cost;
    let total = subtotal * request.complexity_factor;

    tracing::debug!(
        product_type = %request.product_type,
        area,
        subtotal,
        total,
        "priced request"
    );

    Ok(PriceBreakdown {
        base_price: round_to_centimeter(base),
        material_cost: round_to_centimeter(material_cost),
        accessory_cost: round_to_centimeter(accessory_cost),
        complexity_adjustment: round_to_centimeter(total - subtotal),
        total_price: round_to_centimeter(total),
        area: round_to_centimeter(area),
        base_price_per_m2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToldoError;
    use toldo_ir::{Dimensions, MaterialValue};

    fn request(product_type: &str, width: f64, length: f64) -> VisualizationRequest {
        VisualizationRequest::new(product_type, &Dimensions::new(width, length))
    }

    #[test]
    fn base_price_only() {
        let price = calculate_price(&request("fixed-awning", 3.0, 4.0), &PricingTable::default()).unwrap();
        assert_eq!(price.area, 12.0);
        assert_eq!(price.base_price_per_m2, 120.0);
        assert_eq!(price.base_price, 1440.0);
        assert_eq!(price.material_cost, 0.0);
        assert_eq!(price.accessory_cost, 0.0);
        assert_eq!(price.complexity_adjustment, 0.0);
        assert_eq!(price.total_price, 1440.0);
    }

    #[test]
    fn legacy_and_unknown_types() {
        let table = PricingTable::default();
        assert_eq!(table.base_price("pergolado"), 200.0);
        assert_eq!(table.base_price("tenda"), 85.0);
        assert_eq!(table.base_price("gazebo"), DEFAULT_BASE_PRICE);
    }

    #[test]
    fn materials_accessories_and_complexity() {
        let mut req = request("tent", 2.0, 5.0);
        req.materials.insert("lona_premium".into(), MaterialValue::from(true));
        req.materials.insert("vidro".into(), MaterialValue::from(false));
        req.materials.insert("color".into(), MaterialValue::from("azul"));
        req.accessories.insert("led_lighting".into(), MaterialValue::from(true));
        req.accessories.insert("rain_sensor".into(), MaterialValue::Number(1u64.into()));
        req.complexity_factor = 1.1;

        let price = calculate_price(&req, &PricingTable::default()).unwrap();
        // 10 m² * 85
        assert_eq!(price.base_price, 850.0);
        // lona_premium only; vidro is unselected and color has no price
        assert_eq!(price.material_cost, 200.0);
        assert_eq!(price.accessory_cost, 330.0);
        // (850 + 200 + 330) * 1.1
        assert_eq!(price.total_price, 1518.0);
        assert_eq!(price.complexity_adjustment, 138.0);
    }

    #[test]
    fn negative_material_discount() {
        let mut req = request("pergola", 4.0, 3.0);
        req.materials.insert("estrutura_madeira".into(), MaterialValue::from(true));
        let price = calculate_price(&req, &PricingTable::default()).unwrap();
        assert_eq!(price.material_cost, -180.0);
        assert_eq!(price.total_price, 2400.0 - 180.0);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let req = request("tent", 0.0, 5.0);
        let err = calculate_price(&req, &PricingTable::default()).unwrap_err();
        assert!(matches!(err, ToldoError::NonPositive(_)));
    }
}
