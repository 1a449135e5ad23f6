//! Normalization from raw marketplace listings to [`momollie_core::Product`].
//!
//! One listing maps to at most one product. Listings without a usable
//! identity are rejected; a rejection carries a diagnostic and never aborts
//! the rest of the batch.

use momollie_core::{Category, Product};
use thiserror::Error;

use crate::config::CatalogConfig;
use crate::types::{ListingId, ListingImage, ListingPrice, RawListing};

/// Why a single raw listing produced no product.
///
/// Rejections are diagnostics, not fetch-cycle errors: the batch continues
/// and the rejected listing is simply absent from the output.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("listing has no usable listing_id")]
    MissingListingId,

    #[error("listing {listing_id} has no title")]
    MissingTitle { listing_id: i64 },

    #[error("listing_id \"{listing_id}\" is not a base-10 integer")]
    UnparsableListingId { listing_id: String },

    #[error("listing {listing_id:?} does not match the catalog item shape: {source}")]
    Malformed {
        listing_id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

/// Normalizes one raw catalog item into a [`Product`].
///
/// The item arrives as loose JSON because upstream shape drift must be
/// contained per item: a listing whose fields do not decode is rejected on
/// its own, leaving siblings untouched.
///
/// # Errors
///
/// Returns a [`Rejection`] when the item cannot be decoded, when
/// `listing_id` is absent, zero, empty, or not a base-10 integer, or when
/// `title` is absent or empty.
pub fn normalize_listing(
    item: &serde_json::Value,
    config: &CatalogConfig,
) -> Result<Product, Rejection> {
    let listing: RawListing =
        serde_json::from_value(item.clone()).map_err(|source| Rejection::Malformed {
            listing_id: item.get("listing_id").map(std::string::ToString::to_string),
            source,
        })?;

    let id = parse_listing_id(listing.listing_id.as_ref())?;
    let name = listing
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .ok_or(Rejection::MissingTitle { listing_id: id })?;

    let tags_lower: Vec<String> = listing.tags.iter().map(|t| t.to_lowercase()).collect();

    let price = derive_price(listing.price.as_ref());
    let category = infer_category(&name, &tags_lower);
    let features = derive_features(&listing.materials, &tags_lower);
    let image = primary_image(&listing.images, &config.placeholder_image);
    let in_stock = listing.quantity.unwrap_or(0) > 0 && listing.state.as_deref() == Some("active");
    let dimensions = format_dimensions(&listing);

    let etsy_url = listing
        .url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{}/listing/{id}", config.shop_url.trim_end_matches('/')));

    let description = listing
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| config.default_description.clone());

    Ok(Product {
        id,
        name,
        category,
        price,
        description,
        features,
        image,
        etsy_url,
        in_stock,
        materials: listing.materials,
        dimensions,
        care_instructions: config.care_instructions.clone(),
    })
}

/// Normalizes a whole batch, discarding and logging rejections.
///
/// Output order follows input order; one bad item never affects its
/// siblings.
#[must_use]
pub fn normalize_listings(
    listings: &[serde_json::Value],
    config: &CatalogConfig,
) -> Vec<Product> {
    listings
        .iter()
        .filter_map(|item| match normalize_listing(item, config) {
            Ok(product) => Some(product),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "skipping unusable catalog listing");
                None
            }
        })
        .collect()
}

/// Resolves the raw id to an integer, treating absent/zero/empty ids as
/// missing. String ids must parse as base-10 integers; anything else is
/// rejected so a `Product.id` is always a real integer.
fn parse_listing_id(raw: Option<&ListingId>) -> Result<i64, Rejection> {
    match raw {
        None | Some(ListingId::Number(0)) => Err(Rejection::MissingListingId),
        Some(ListingId::Number(id)) => Ok(*id),
        Some(ListingId::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(Rejection::MissingListingId);
            }
            trimmed
                .parse::<i64>()
                .map_err(|_| Rejection::UnparsableListingId {
                    listing_id: text.clone(),
                })
        }
    }
}

/// `amount / divisor` when both are present and non-zero, else `0.0`.
/// A zero divisor falls into the default rather than dividing.
fn derive_price(price: Option<&ListingPrice>) -> f64 {
    match price {
        Some(ListingPrice {
            amount: Some(amount),
            divisor: Some(divisor),
        }) if *amount != 0.0 && *divisor != 0.0 => amount / divisor,
        _ => 0.0,
    }
}

/// First gallery image, medium resolution preferred, placeholder when the
/// gallery is empty or the first entry has no usable URL.
fn primary_image(images: &[ListingImage], placeholder: &str) -> String {
    images
        .first()
        .and_then(|image| {
            image
                .url_570xn
                .as_deref()
                .filter(|u| !u.is_empty())
                .or_else(|| image.url_fullxfull.as_deref().filter(|u| !u.is_empty()))
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| placeholder.to_string())
}

/// Category from title substring or exact tag membership, both
/// case-insensitive. "bread bag" wins over "storage" when both match.
fn infer_category(title: &str, tags_lower: &[String]) -> Category {
    let title_lower = title.to_lowercase();
    let mentions =
        |needle: &str| title_lower.contains(needle) || tags_lower.iter().any(|t| t == needle);

    if mentions("bread bag") {
        Category::BreadBags
    } else if mentions("storage") {
        Category::SustainableStorage
    } else {
        Category::KitchenAccessories
    }
}

/// Selling points in fixed derivation order, capped at five. Material
/// matches are exact; tag matches use the lower-cased tag list.
fn derive_features(materials: &[String], tags_lower: &[String]) -> Vec<String> {
    let has_tag = |tag: &str| tags_lower.iter().any(|t| t == tag);
    let mut features = Vec::new();

    if materials.iter().any(|m| m == "Organic cotton") {
        features.push("Made with organic cotton".to_string());
    }
    if materials.iter().any(|m| m == "beeswax") {
        features.push("Natural beeswax coating".to_string());
    }
    features.push("Handcrafted with care".to_string());
    features.push("Sustainable and eco-friendly".to_string());
    if has_tag("reusable") {
        features.push("Reusable and long-lasting".to_string());
    }
    if has_tag("plastic free") {
        features.push("100% plastic-free".to_string());
    }

    features.truncate(5);
    features
}

/// `L" x W" x H"` when the listing declares a dimensions unit; each missing
/// component renders as `?`.
fn format_dimensions(listing: &RawListing) -> Option<String> {
    listing
        .item_dimensions_unit
        .as_deref()
        .filter(|u| !u.is_empty())?;

    let component = |value: &Option<String>| -> String {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or("?")
            .to_string()
    };

    Some(format!(
        "{}\" x {}\" x {}\"",
        component(&listing.item_length),
        component(&listing.item_width),
        component(&listing.item_height)
    ))
}
