//! Storefront constants consumed during normalization.

/// Fixed storefront values applied while normalizing raw listings:
/// fallback copy, the placeholder image, the marketplace shop URL used to
/// construct listing links, and the care-instruction copy stamped onto
/// every product.
///
/// Passed to [`crate::CatalogClient`] at construction so tests and future
/// storefronts can substitute their own values instead of patching
/// literals.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Brand name used for structured data and display.
    pub brand_name: String,
    /// Marketplace shop base URL; `{shop_url}/listing/{id}` is the
    /// constructed fallback when a listing has no canonical URL.
    pub shop_url: String,
    /// Image path served when a listing has no usable image.
    pub placeholder_image: String,
    /// Description used when a listing has none.
    pub default_description: String,
    /// Care copy applied to every product. The source catalog provides no
    /// per-material care data, so this is intentionally constant.
    pub care_instructions: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            brand_name: "DearMomollie".to_string(),
            shop_url: "https://dearmomollie.etsy.com".to_string(),
            placeholder_image: "/products/placeholder.jpg".to_string(),
            default_description: "Handcrafted sustainable product".to_string(),
            care_instructions: vec![
                "Hand wash in cool water with mild soap".to_string(),
                "Air dry completely before storing".to_string(),
                "Keep away from direct heat sources".to_string(),
            ],
        }
    }
}
