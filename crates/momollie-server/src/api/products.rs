use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use momollie_core::{product_structured_data, PriceRange, PriceSort, Product};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Shared-cache advice for the products API: CDN-cacheable for five
/// minutes, stale-while-revalidate for ten.
pub(super) const CATALOG_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// Success body of `GET /api/products`.
#[derive(Debug, Serialize)]
pub(super) struct ProductsBody {
    success: bool,
    products: Vec<Product>,
    count: usize,
    #[serde(rename = "lastSync", skip_serializing_if = "Option::is_none")]
    last_sync: Option<String>,
}

/// Failure body of `GET /api/products`, served with HTTP 500.
#[derive(Debug, Serialize)]
pub(super) struct FailureBody {
    success: bool,
    error: &'static str,
    message: String,
}

/// The API-route consumer: a strict fetch whose failures become a
/// structured 500 envelope. Successful responses carry the shared-cache
/// header; failures are uncacheable by omission.
pub(super) async fn list_products(State(state): State<AppState>) -> Response {
    match state
        .client
        .fetch_catalog(&state.catalog_url, state.shop_id.as_deref())
        .await
    {
        Ok(catalog) => {
            let count = catalog.products.len();
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, CATALOG_CACHE_CONTROL)],
                Json(ProductsBody {
                    success: true,
                    products: catalog.products,
                    count,
                    last_sync: catalog.last_sync,
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "products API fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody {
                    success: false,
                    error: "Failed to fetch products",
                    message: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct StorefrontQuery {
    /// Price-bucket token from the grid's filter buttons. Unknown tokens
    /// mean "all".
    price: Option<String>,
    /// Sort token; unknown tokens keep the upstream order.
    sort: Option<String>,
}

/// Body of `GET /api/storefront`: everything the product grid renders.
#[derive(Debug, Serialize)]
pub(super) struct StorefrontBody {
    success: bool,
    products: Vec<Product>,
    count: usize,
    /// Marketplace shop link backing the empty-state call-to-action.
    #[serde(rename = "shopUrl")]
    shop_url: String,
    /// One schema.org `Product` node per product, in display order.
    #[serde(rename = "structuredData")]
    structured_data: Vec<serde_json::Value>,
}

/// The page/grid consumer: fetches through the empty-absorbing path and
/// always answers 200. An empty products array means "catalog temporarily
/// unavailable or genuinely empty", and the grid falls back to the shop link.
pub(super) async fn storefront_view(
    State(state): State<AppState>,
    Query(query): Query<StorefrontQuery>,
) -> Json<StorefrontBody> {
    let catalog = state
        .client
        .fetch_catalog_or_empty(&state.catalog_url, state.shop_id.as_deref())
        .await;

    let range = query
        .price
        .as_deref()
        .and_then(PriceRange::from_param)
        .unwrap_or_default();
    let mut products = range.apply(&catalog.products);

    if let Some(sort) = query.sort.as_deref().and_then(PriceSort::from_param) {
        products = sort.apply(&products);
    }

    let config = state.client.config();
    let structured_data = products
        .iter()
        .map(|p| product_structured_data(p, &config.brand_name))
        .collect();
    let count = products.len();

    Json(StorefrontBody {
        success: true,
        products,
        count,
        shop_url: config.shop_url.clone(),
        structured_data,
    })
}
