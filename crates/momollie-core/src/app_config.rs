use std::net::SocketAddr;

/// Runtime configuration for the storefront server and catalog client.
///
/// Every field has a default; the service starts with no environment
/// configured at all and points at the production catalog endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Endpoint of the external marketplace catalog service.
    pub catalog_url: String,
    /// Optional store-scoping identifier forwarded to the catalog service
    /// as a query parameter. Unset means the endpoint's default store.
    pub shop_id: Option<String>,
    pub catalog_timeout_secs: u64,
    pub catalog_user_agent: String,
    /// Additional attempts after the first failure for transient catalog
    /// errors. `0` disables retries.
    pub catalog_max_retries: u32,
    /// Base delay for exponential backoff between retries.
    pub catalog_retry_backoff_base_secs: u64,
}
