// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ArchPrompt Server - local viewer for generated scene documents.
//!
//! Serves the browser viewer and scene JSON files from a directory, and
//! exposes the layout engine over HTTP.
//!
//! # Endpoints
//!
//! - `GET /api/v1` - API information
//! - `GET /api/v1/health` - Health check
//! - `POST /api/v1/generate` - Generate a scene document from a prompt
//! - `GET /*` - Static files from `STATIC_DIR` (e.g. `/viewer.html`)

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod config;
mod error;
mod routes;

use config::Config;

fn app(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/v1", get(routes::health::info))
        .route("/api/v1/health", get(routes::health::check))
        .route("/api/v1/generate", post(routes::generate::generate))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,archprompt_server=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        static_dir = %config.static_dir.display(),
        request_timeout_secs = config.request_timeout_secs,
        "Starting ArchPrompt Server"
    );

    let app = app(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Viewer at http://localhost:{}/viewer.html", config.port);
    tracing::info!("Press Ctrl+C to stop the server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
