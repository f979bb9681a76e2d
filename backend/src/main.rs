use axum::{
    routing::{get, post},
    Router,
};
use formula_core::formula::FormulaConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod api;

use api::AppState;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Bind address from FORMULA_BACKEND_ADDR, falling back to the default
fn bind_addr() -> SocketAddr {
    let fallback = SocketAddr::from(([127, 0, 0, 1], 3000));
    match std::env::var("FORMULA_BACKEND_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid FORMULA_BACKEND_ADDR '{}': {}, using {}", raw, e, DEFAULT_ADDR);
            fallback
        }),
        Err(_) => fallback,
    }
}

/// Engine configuration from the JSON file named by FORMULA_CONFIG
fn load_config() -> FormulaConfig {
    let Ok(path) = std::env::var("FORMULA_CONFIG") else {
        return FormulaConfig::default();
    };

    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| FormulaConfig::from_json(&text).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => {
            info!("Loaded formula config from {}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load formula config from {}: {}, using defaults", path, e);
            FormulaConfig::default()
        }
    }
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/evaluate", post(api::evaluate))
        .route("/rewrite", post(api::rewrite))
        .route("/distance", post(api::distance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let shared_state = Arc::new(AppState {
        config: load_config(),
    });

    let addr = bind_addr();
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(shared_state)).await
}
