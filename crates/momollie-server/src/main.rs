mod api;
mod middleware;

use std::sync::Arc;

use momollie_catalog::{CatalogClient, CatalogConfig};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = momollie_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = CatalogClient::new(
        config.catalog_timeout_secs,
        &config.catalog_user_agent,
        config.catalog_max_retries,
        config.catalog_retry_backoff_base_secs,
        CatalogConfig::default(),
    )?;

    let app = build_app(AppState {
        client: Arc::new(client),
        catalog_url: config.catalog_url.clone(),
        shop_id: config.shop_id.clone(),
    });

    tracing::info!(
        addr = %config.bind_addr,
        catalog = %config.catalog_url,
        "starting storefront server"
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
