//! HTTP client for the external marketplace catalog endpoint.

use std::time::Duration;

use momollie_core::Product;
use reqwest::Client;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::normalize::normalize_listings;
use crate::retry::retry_with_backoff;
use crate::types::CatalogEnvelope;

/// One fetch cycle's result: the normalized products plus the upstream
/// sync timestamp, when the source reported one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub last_sync: Option<String>,
}

/// Client for the catalog service's public listings endpoint.
///
/// Holds the HTTP transport (request and connect timeouts, user agent), the
/// retry policy for transient failures, and the storefront constants the
/// normalizer needs. Each fetch is an independent read; nothing is cached
/// between calls.
pub struct CatalogClient {
    http: Client,
    /// Additional attempts after the first failure for transient errors.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    backoff_base_secs: u64,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a client with configured timeout, `User-Agent`, and retry
    /// policy. Set `max_retries` to `0` to disable retries entirely.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            max_retries,
            backoff_base_secs,
            config,
        })
    }

    /// The storefront constants this client normalizes with.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetches the raw catalog envelope, retrying transient failures.
    ///
    /// `shop_id` scopes the request to one store via a query parameter;
    /// `None` hits the endpoint's default store.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx response (429 and
    ///   5xx are retried first).
    /// - [`CatalogError::Http`] — network or TLS failure after all retries.
    /// - [`CatalogError::Deserialize`] — response body is not valid JSON
    ///   (not retried).
    /// - [`CatalogError::InvalidEndpoint`] — `catalog_url` does not parse.
    pub async fn fetch_envelope(
        &self,
        catalog_url: &str,
        shop_id: Option<&str>,
    ) -> Result<CatalogEnvelope, CatalogError> {
        let url = Self::request_url(catalog_url, shop_id)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .http
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<CatalogEnvelope>(&body).map_err(|e| {
                    CatalogError::Deserialize {
                        context: format!("catalog envelope from {url}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Fetches, validates, and normalizes the catalog.
    ///
    /// Rejected listings are logged and dropped; surviving products keep
    /// the upstream order. An envelope with a false/absent `success` flag or
    /// no `listings` array is a total failure: no partial catalog is ever
    /// produced from a bad envelope.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_envelope`] errors, plus
    /// [`CatalogError::Envelope`] for a well-formed response that fails
    /// envelope validation.
    pub async fn fetch_catalog(
        &self,
        catalog_url: &str,
        shop_id: Option<&str>,
    ) -> Result<Catalog, CatalogError> {
        let envelope = self.fetch_envelope(catalog_url, shop_id).await?;

        if !envelope.success {
            return Err(CatalogError::Envelope {
                reason: "success flag missing or false".to_string(),
            });
        }
        let listings = envelope.listings.ok_or_else(|| CatalogError::Envelope {
            reason: "listings array missing".to_string(),
        })?;

        let received = listings.len();
        let products = normalize_listings(&listings, &self.config);
        tracing::info!(
            received,
            kept = products.len(),
            "catalog fetch cycle complete"
        );

        Ok(Catalog {
            products,
            last_sync: envelope.last_sync,
        })
    }

    /// The page-rendering fetch path: absorbs every failure into an empty
    /// catalog so a broken upstream degrades to an empty storefront rather
    /// than an error page.
    pub async fn fetch_catalog_or_empty(
        &self,
        catalog_url: &str,
        shop_id: Option<&str>,
    ) -> Catalog {
        match self.fetch_catalog(catalog_url, shop_id).await {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::error!(error = %error, "catalog fetch failed, serving empty catalog");
                Catalog::default()
            }
        }
    }

    /// Builds the request URL, appending the store-scoping query parameter
    /// when present.
    fn request_url(catalog_url: &str, shop_id: Option<&str>) -> Result<String, CatalogError> {
        let mut url =
            reqwest::Url::parse(catalog_url).map_err(|e| CatalogError::InvalidEndpoint {
                url: catalog_url.to_owned(),
                reason: e.to_string(),
            })?;

        if let Some(shop_id) = shop_id {
            url.query_pairs_mut().append_pair("shop_id", shop_id);
        }

        Ok(url.to_string())
    }
}
