// src/main.rs

use std::sync::Arc;

use pharmacy_core::catalog::CategoryCatalog;
use pharmacy_core::config::AppConfig;
use pharmacy_core::routes::app_router;
use pharmacy_core::state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pharmacy_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = match AppConfig::from_env().and_then(|config| config.socket_addr()) {
        Ok(addr) => addr,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let categories = CategoryCatalog::seeded();
    tracing::info!("Category catalogue ready");

    let app = app_router(Arc::new(AppState { categories }));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Cannot bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}
