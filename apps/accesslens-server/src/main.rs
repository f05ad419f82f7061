//! accesslens API server.
//!
//! Serves access-graph search, cohort analytics, and risk analysis
//! over an upstream access-inventory store.

mod config;
mod health;
mod logging;

use axum::{routing::get, Router};
use config::Config;
use health::{healthz_handler, readyz_handler};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use accesslens_api::{access_router, ApiState};
use accesslens_risk::RiskPolicy;
use accesslens_store_client::HttpAccessStore;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        env = %config.app_env,
        store = %config.store_url,
        "starting accesslens API"
    );

    let store = match HttpAccessStore::new(
        config.store_url.clone(),
        Duration::from_secs(config.store_timeout_secs),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let policy = RiskPolicy::default();
    if let Err(e) = policy.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let state = ApiState::new(Arc::new(store), policy);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .nest("/api", access_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: invalid bind address: {e}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Error: server exited: {e}");
        std::process::exit(1);
    }
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
