//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `ctf::CtfError`, rendered through `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use ctf::application::config::DEFAULT_ADMIN_KEY;
use ctf::domain::progress::AdvancePolicy;
use ctf::{CatalogSource, CtfConfig, RecordStore, ctf_router};
use platform::config::{self as env_config, ConfigError};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,ctf=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // CTF configuration
    let ctf_config = load_ctf_config()?;

    // Record store: Redis when configured, JSON files otherwise
    let redis_url = env_config::var("REDIS_URL");
    let data_dir = PathBuf::from(env_config::var("CTF_DATA_DIR").unwrap_or_else(|| "data".into()));
    let store = RecordStore::connect(redis_url.as_deref(), data_dir).await?;

    // Fail fast on a broken catalog instead of on the first request
    let catalog = ctf_config.catalog.load().await?;
    tracing::info!(
        levels = catalog.total_levels(),
        store = store.backend(),
        "Puzzle catalog loaded"
    );

    // CORS configuration
    let frontend_origins = env_config::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", ctf_router(store, ctf_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env_config::try_load("CTF_PORT", 31113)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn load_ctf_config() -> Result<CtfConfig, ConfigError> {
    let base = if cfg!(debug_assertions) {
        CtfConfig::development()
    } else {
        CtfConfig::default()
    };

    // The placeholder key is only acceptable outside release builds
    let admin_key = match env_config::var("ADMIN_KEY") {
        Some(key) => key,
        None if cfg!(debug_assertions) => {
            tracing::warn!("ADMIN_KEY not set, using the development default");
            DEFAULT_ADMIN_KEY.to_string()
        }
        None => env_config::require("ADMIN_KEY")?,
    };

    let monotonic = match env_config::var("CTF_MONOTONIC_PROGRESS") {
        Some(raw) => env_config::parse_flag(&raw).ok_or_else(|| ConfigError::Invalid {
            key: "CTF_MONOTONIC_PROGRESS".to_string(),
            reason: format!("expected a boolean, got {raw:?}"),
        })?,
        None => false,
    };

    let catalog = env_config::var("CTF_PUZZLES_PATH")
        .map(|path| CatalogSource::File(PathBuf::from(path)))
        .unwrap_or_default();

    Ok(CtfConfig {
        admin_key,
        advance_policy: if monotonic {
            AdvancePolicy::Monotonic
        } else {
            AdvancePolicy::TrustClient
        },
        catalog,
        ..base
    })
}
