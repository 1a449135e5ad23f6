//! Pure presentation transforms over an already-normalized product
//! collection.
//!
//! The storefront grid offers two independent, mutually-composable
//! strategies: a price-bucket filter and a price sort. Both are synchronous,
//! idempotent, and never mutate their input; callers get a fresh `Vec` in
//! upstream order (filter) or price order with upstream order preserved on
//! ties (sort).

use crate::product::Product;

/// Price-bucket filter matching the storefront's filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Under20,
    From20To40,
    From40To60,
    Over60,
}

impl PriceRange {
    /// Parses a query-parameter token. Unknown tokens return `None`,
    /// which callers treat as "no filter" so a stale or hand-edited link
    /// never breaks the page.
    #[must_use]
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "all" => Some(Self::All),
            "under20" => Some(Self::Under20),
            "20-40" => Some(Self::From20To40),
            "40-60" => Some(Self::From40To60),
            "over60" => Some(Self::Over60),
            _ => None,
        }
    }

    /// Bucket membership. Buckets are half-open (`20-40` is `20 <= p < 40`)
    /// so every price lands in exactly one bucket.
    #[must_use]
    pub fn matches(self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Under20 => price < 20.0,
            Self::From20To40 => (20.0..40.0).contains(&price),
            Self::From40To60 => (40.0..60.0).contains(&price),
            Self::Over60 => price >= 60.0,
        }
    }

    /// Returns the products in this bucket, in their original order.
    #[must_use]
    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p.price))
            .cloned()
            .collect()
    }
}

/// Price ordering for the storefront's sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSort {
    LowToHigh,
    HighToLow,
}

impl PriceSort {
    /// Parses a query-parameter token; unknown tokens mean "leave the
    /// upstream order alone".
    #[must_use]
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "price-asc" => Some(Self::LowToHigh),
            "price-desc" => Some(Self::HighToLow),
            _ => None,
        }
    }

    /// Returns a sorted copy. Stable, so equal-priced products keep their
    /// upstream relative order.
    #[must_use]
    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        match self {
            Self::LowToHigh => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Self::HighToLow => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        sorted
    }
}
