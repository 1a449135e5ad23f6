pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
mod retry;
pub mod types;

pub use client::{Catalog, CatalogClient};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use normalize::{normalize_listing, normalize_listings, Rejection};
pub use types::{CatalogEnvelope, ListingId, ListingImage, ListingPrice, RawListing};
