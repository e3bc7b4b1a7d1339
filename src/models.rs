//! Product catalog and purchase hand-off types.

use serde::{Deserialize, Serialize};

// ============================================
// Product catalog
// ============================================

/// Static configuration for one product section.
///
/// Resolved once at startup; the component renders its whole subtree from
/// this, so a section can never be missing a required element at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductConfig {
    /// Section id, also the key the checkout page knows the product by.
    pub id: &'static str,
    /// Heading shown above the form.
    pub title: &'static str,
    /// Base price as rendered into the `data-price` attribute.
    pub base_price: &'static str,
    pub sizes: &'static [&'static str],
    /// Whether the price/promo/purchase block is rendered at all.
    pub purchasable: bool,
}

impl ProductConfig {
    /// Human-readable product name derived from the section id.
    /// Every hyphen becomes a space ("long-sleeve-tee" -> "long sleeve tee").
    pub fn display_name(&self) -> String {
        self.id.replace('-', " ")
    }
}

/// Products rendered on the storefront page.
pub const PRODUCTS: &[ProductConfig] = &[
    ProductConfig {
        id: "tshirt",
        title: "Classic T-Shirt",
        base_price: "25.00",
        sizes: &["S", "M", "L", "XL"],
        purchasable: true,
    },
    ProductConfig {
        id: "hoodie",
        title: "Zip-Up Hoodie",
        base_price: "45.00",
        sizes: &["S", "M", "L", "XL"],
        purchasable: true,
    },
];

// ============================================
// Checkout hand-off
// ============================================

/// Record handed to the checkout page through LocalStorage.
///
/// Key names are part of the checkout page's contract, hence camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInfo {
    pub product: String,
    pub size: String,
    pub total: f64,
    /// Data URL of the uploaded design, empty if no preview was loaded.
    pub image_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_replaces_every_hyphen() {
        let config = ProductConfig {
            id: "long-sleeve-tee",
            title: "Long Sleeve Tee",
            base_price: "30.00",
            sizes: &["M"],
            purchasable: true,
        };
        assert_eq!(config.display_name(), "long sleeve tee");
    }

    #[test]
    fn catalog_prices_parse() {
        for product in PRODUCTS {
            assert!(
                crate::pricing::parse_base_price(product.base_price).is_some(),
                "bad base price for {}",
                product.id
            );
        }
    }

    #[test]
    fn purchase_info_uses_checkout_page_keys() {
        let info = PurchaseInfo {
            product: "tshirt".to_string(),
            size: "M".to_string(),
            total: 25.0,
            image_data: "data:image/png;base64,AAAA".to_string(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"imageData\""));
        assert!(json.contains("\"product\""));

        let back: PurchaseInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
