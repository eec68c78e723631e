//! Iris Inference Server
//!
//! HTTP API server exposing the trained iris classifier: a liveness
//! route and single-sample prediction. The model artifact is loaded
//! before the listener binds; a missing or invalid artifact aborts
//! startup.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use iris_infer::model::{load_classifier, DEFAULT_MODEL_PATH};

use crate::state::{AppState, SharedState};

/// Iris Inference Server
#[derive(Parser, Debug)]
#[command(name = "iris-server")]
#[command(version = "0.1.0")]
#[command(about = "HTTP API server for iris flower classification")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "80")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the model artifact
    #[arg(long, env = "IRIS_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes::health::home))
        .route("/health", get(routes::health::health_check))
        .route("/predict", post(routes::predict::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    info!("Iris Inference Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Model artifact: {}", cli.model.display());

    // Load the model before accepting any traffic; a failure here must
    // keep the listener from ever starting.
    let classifier = load_classifier(&cli.model)?;

    let state = Arc::new(AppState::new(classifier));
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
