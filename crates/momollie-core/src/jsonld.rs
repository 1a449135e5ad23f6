//! schema.org structured-data emission for SEO.
//!
//! Each storefront product card embeds one JSON-LD `Product` node so search
//! engines can index price and availability. The node is derived entirely
//! from the normalized [`Product`]; availability tracks `in_stock`.

use serde_json::{json, Value};

use crate::product::Product;

const IN_STOCK: &str = "https://schema.org/InStock";
const OUT_OF_STOCK: &str = "https://schema.org/OutOfStock";

/// Builds the JSON-LD `Product` node for one product.
///
/// `brand` is the storefront brand name, used both as the product brand and
/// the offer's seller organization.
#[must_use]
pub fn product_structured_data(product: &Product, brand: &str) -> Value {
    json!({
        "@context": "https://schema.org/",
        "@type": "Product",
        "name": product.name,
        "description": product.description,
        "image": product.image,
        "brand": {
            "@type": "Brand",
            "name": brand,
        },
        "offers": {
            "@type": "Offer",
            "url": product.etsy_url,
            "priceCurrency": "USD",
            "price": product.price,
            "availability": if product.in_stock { IN_STOCK } else { OUT_OF_STOCK },
            "seller": {
                "@type": "Organization",
                "name": brand,
            },
        },
        "material": product.materials.join(", "),
        "category": product.category.as_str(),
    })
}
