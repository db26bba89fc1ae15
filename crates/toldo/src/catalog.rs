//! Product and material catalog.

use serde::Serialize;
use toldo_geom::ProductType;

/// A product offered for visualization and quoting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInfo {
    /// Canonical product type id.
    pub id: &'static str,
    /// Id used by older quote records.
    pub legacy_id: Option<&'static str>,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Price per square meter.
    pub base_price: f64,
    /// Selling points.
    pub features: &'static [&'static str],
}

/// Structure or covering material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialOption {
    /// Material id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Preview color (`#RRGGBB`).
    pub color: &'static str,
    /// Multiplier relative to the standard material.
    pub price_factor: f64,
}

/// Fabric/profile color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOption {
    /// Color id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Hex value (`#RRGGBB`).
    pub hex: &'static str,
}

/// Optional add-on with a flat price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessoryOption {
    /// Accessory id, also its key in a selection.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flat price.
    pub price: f64,
}

/// Everything a client can pick from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialCatalog {
    /// Frame materials.
    pub structure: Vec<MaterialOption>,
    /// Roofing materials.
    pub cover: Vec<MaterialOption>,
    /// Colors.
    pub colors: Vec<ColorOption>,
    /// Accessories.
    pub accessories: Vec<AccessoryOption>,
}

/// Accessories and their flat prices.
pub const ACCESSORIES: [(&str, &str, f64); 4] = [
    ("led_lighting", "LED lighting", 150.0),
    ("wind_sensor", "Wind sensor", 200.0),
    ("remote_control", "Remote control", 100.0),
    ("rain_sensor", "Rain sensor", 180.0),
];

/// Price per square meter of each product type.
pub fn base_price(kind: ProductType) -> Option<f64> {
    match kind {
        ProductType::FixedAwning => Some(120.0),
        ProductType::RetractableAwning => Some(180.0),
        ProductType::PolycarbonateCover => Some(95.0),
        ProductType::Pergola => Some(200.0),
        ProductType::Tent => Some(85.0),
        ProductType::Generic => None,
    }
}

const FIXED_AWNING_FEATURES: &[&str] = &["Fixed frame", "Wind resistant", "Low maintenance"];
const RETRACTABLE_FEATURES: &[&str] = &["Retractable", "Motorized", "Remote control", "Wind sensor"];
const COVER_FEATURES: &[&str] = &["Transparent", "UV protection", "Thermal insulation"];
const PERGOLA_FEATURES: &[&str] = &["Open roof", "Climbing plant support", "Partial shade"];
const TENT_FEATURES: &[&str] = &["Portable", "Quick setup", "Rain resistant"];
const NO_FEATURES: &[&str] = &[];

/// Display name, description and selling points.
fn describe(kind: ProductType) -> (&'static str, &'static str, &'static [&'static str]) {
    match kind {
        ProductType::FixedAwning => (
            "Fixed awning",
            "Fixed awning on an aluminum frame",
            FIXED_AWNING_FEATURES,
        ),
        ProductType::RetractableAwning => (
            "Retractable awning",
            "Retractable awning with motorized drive",
            RETRACTABLE_FEATURES,
        ),
        ProductType::PolycarbonateCover => (
            "Polycarbonate cover",
            "Transparent polycarbonate roof cover",
            COVER_FEATURES,
        ),
        ProductType::Pergola => ("Pergola", "Pergola in timber or aluminum", PERGOLA_FEATURES),
        ProductType::Tent => ("Tent", "Portable event tent", TENT_FEATURES),
        ProductType::Generic => ("Structure", "Generic structure", NO_FEATURES),
    }
}

/// The five products, in catalog order.
pub fn products() -> Vec<ProductInfo> {
    ProductType::ALL
        .into_iter()
        .map(|kind| {
            let (name, description, features) = describe(kind);
            ProductInfo {
                id: kind.id(),
                legacy_id: kind.legacy_id(),
                name,
                description,
                base_price: base_price(kind).unwrap_or_default(),
                features,
            }
        })
        .collect()
}

/// Materials, colors and accessories.
pub fn materials() -> MaterialCatalog {
    let material = |id, name, color, price_factor| MaterialOption {
        id,
        name,
        color,
        price_factor,
    };
    let color = |id, name, hex| ColorOption { id, name, hex };

    MaterialCatalog {
        structure: vec![
            material("aluminio", "Aluminum", "#C0C0C0", 1.0),
            material("aco", "Steel", "#808080", 1.2),
            material("madeira", "Timber", "#8B4513", 0.8),
        ],
        cover: vec![
            material("lona_comum", "Standard canvas", "#FFFFFF", 1.0),
            material("lona_premium", "Premium canvas", "#F0F0F0", 1.5),
            material("policarbonato", "Polycarbonate", "#E6F3FF", 2.0),
            material("vidro", "Glass", "#E0F6FF", 3.0),
        ],
        colors: vec![
            color("branco", "White", "#FFFFFF"),
            color("bege", "Beige", "#F5F5DC"),
            color("cinza", "Gray", "#808080"),
            color("azul", "Blue", "#4169E1"),
            color("verde", "Green", "#228B22"),
            color("vermelho", "Red", "#DC143C"),
            color("preto", "Black", "#000000"),
        ],
        accessories: ACCESSORIES
            .iter()
            .map(|&(id, name, price)| AccessoryOption { id, name, price })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_products_with_prices() {
        let products = products();
        assert_eq!(products.len(), 5);
        let prices: Vec<f64> = products.iter().map(|p| p.base_price).collect();
        assert_eq!(prices, vec![120.0, 180.0, 95.0, 200.0, 85.0]);
        assert_eq!(products[3].id, "pergola");
        assert_eq!(products[3].legacy_id, Some("pergolado"));
    }

    #[test]
    fn product_ids_resolve_to_builders() {
        for p in products() {
            assert_ne!(ProductType::from_name(p.id), ProductType::Generic);
        }
    }

    #[test]
    fn material_catalog_groups() {
        let catalog = materials();
        assert_eq!(catalog.structure.len(), 3);
        assert_eq!(catalog.cover.len(), 4);
        assert_eq!(catalog.colors.len(), 7);
        assert_eq!(catalog.accessories.len(), 4);
        assert!(catalog.colors.iter().all(|c| c.hex.len() == 7));
    }

    #[test]
    fn catalog_serializes() {
        let json = serde_json::to_string(&products()).unwrap();
        assert!(json.contains(r#""id":"fixed-awning""#));
    }
}
