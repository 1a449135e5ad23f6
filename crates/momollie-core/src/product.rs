use serde::{Deserialize, Serialize};

/// A display-ready storefront product, derived from one raw marketplace
/// listing and consumed by every presentation surface (API route, storefront
/// view, structured-data emission).
///
/// Values are immutable after construction; each catalog fetch produces a
/// wholly new collection. Serialized field names are camelCase because the
/// JSON contract predates this implementation (`etsyUrl`, `inStock`,
/// `careInstructions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Upstream listing id, parsed as a base-10 integer. A `Product` never
    /// exists with an unparsable id.
    pub id: i64,
    /// Listing title, verbatim. Never empty.
    pub name: String,
    pub category: Category,
    /// `price.amount / price.divisor` from the raw listing, or `0.0` when
    /// the listing carries no usable price. Unrounded; display layers
    /// format to two decimals.
    pub price: f64,
    /// Listing description, or the configured fallback copy when the
    /// listing has none.
    pub description: String,
    /// Derived selling points, at most five, in derivation order.
    pub features: Vec<String>,
    /// Primary image URL, or the configured placeholder path.
    pub image: String,
    /// External marketplace listing URL. Constructed from the shop base URL
    /// and `id` when the listing does not provide one.
    pub etsy_url: String,
    /// `true` iff the listing is active and has stock on hand.
    pub in_stock: bool,
    /// Materials as listed upstream, order preserved for display.
    pub materials: Vec<String>,
    /// `L" x W" x H"`, present only when the listing declared a dimensions
    /// unit. Omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    /// Fixed care copy, identical for every product.
    pub care_instructions: Vec<String>,
}

impl Product {
    /// Price formatted for display, e.g. `"$24.99"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Returns `true` if the product is made with organic cotton, which
    /// storefront cards surface as an "Organic" badge.
    #[must_use]
    pub fn is_organic(&self) -> bool {
        self.materials.iter().any(|m| m == "Organic cotton")
    }
}

/// Closed set of storefront categories. Never provided by the upstream
/// source; always inferred from the listing title and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BreadBags,
    KitchenAccessories,
    SustainableStorage,
}

impl Category {
    /// The wire/display form, e.g. `"bread-bags"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::BreadBags => "bread-bags",
            Category::KitchenAccessories => "kitchen-accessories",
            Category::SustainableStorage => "sustainable-storage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
