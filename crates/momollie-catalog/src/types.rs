//! Raw marketplace catalog types for the public catalog endpoint.
//!
//! ## Observed shape from the live catalog service
//!
//! ### Envelope
//! The endpoint wraps everything in `{ "success": bool, "listings": [...] }`,
//! sometimes with a `lastSync` timestamp string. `success: false` has been
//! observed with `listings` present, so the flag is checked independently of
//! the array. `lastSync` is opaque and passed through untouched.
//!
//! ### `listing_id`
//! Usually a JSON number, but string-typed ids have been observed after
//! upstream exports. Modeled as an untagged string-or-number enum.
//!
//! ### `price`
//! A minor-units object `{ "amount": 2499, "divisor": 100 }`, i.e. the real
//! price is `amount / divisor`. Either field may be absent or zero on draft
//! listings; such listings display as price 0 rather than being dropped.
//!
//! ### `images`
//! Ordered array; each entry may carry `url_570xN` (medium resolution,
//! preferred for cards) and/or `url_fullxfull`. Either may be missing or an
//! empty string.
//!
//! ### `state`
//! `"active"`, `"inactive"`, `"sold_out"`, or `"draft"`. Only `"active"`
//! is sellable.
//!
//! Every field is optional at this layer. Listings are held as
//! `serde_json::Value` inside the envelope and converted one at a time, so
//! a single item with a mistyped field (a numeric `tags`, say) rejects that
//! item alone instead of failing the whole batch.

use serde::Deserialize;

/// Top-level response from the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    /// Upstream success flag. Absent is treated as `false`.
    #[serde(default)]
    pub success: bool,

    /// Raw listing items, each decoded per-item during normalization.
    /// `None` (as opposed to an empty array) marks a malformed envelope.
    pub listings: Option<Vec<serde_json::Value>>,

    /// Opaque upstream sync timestamp, forwarded to API consumers verbatim.
    #[serde(rename = "lastSync", default)]
    pub last_sync: Option<String>,
}

/// A listing id as the wire provides it: numeric or string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

/// One raw marketplace listing. Untrusted; every field may be absent.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub listing_id: Option<ListingId>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Minor-units price object; the display price is `amount / divisor`.
    #[serde(default)]
    pub price: Option<ListingPrice>,

    /// Units on hand. Absent means none.
    #[serde(default)]
    pub quantity: Option<i64>,

    /// Listing lifecycle state; `"active"` is the only sellable state.
    #[serde(default)]
    pub state: Option<String>,

    /// Canonical marketplace URL for the listing.
    #[serde(default)]
    pub url: Option<String>,

    /// Image gallery in display order.
    #[serde(default)]
    pub images: Vec<ListingImage>,

    /// Materials in display order.
    #[serde(default)]
    pub materials: Vec<String>,

    /// Free-form tags; matched case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Presence of a unit marks the listing as having physical dimensions.
    #[serde(default)]
    pub item_dimensions_unit: Option<String>,

    #[serde(default)]
    pub item_length: Option<String>,

    #[serde(default)]
    pub item_width: Option<String>,

    #[serde(default)]
    pub item_height: Option<String>,
}

/// Minor-units price: real price is `amount / divisor`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPrice {
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub divisor: Option<f64>,
}

/// One gallery image. Resolution variants may individually be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingImage {
    /// Medium-resolution variant, preferred for product cards.
    #[serde(rename = "url_570xN", default)]
    pub url_570xn: Option<String>,

    /// Full-resolution fallback.
    #[serde(default)]
    pub url_fullxfull: Option<String>,
}
