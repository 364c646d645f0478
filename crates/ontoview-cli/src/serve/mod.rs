//! HTTP server exposing the ontology graph index.
//!
//! Serves the search / node detail / subgraph API consumed by the
//! browser-side tree visualizer. The ontology document is loaded and the
//! index fully built *before* the TCP listener binds, so no request can
//! ever observe a partially built index; after that point the state is
//! immutable and shared without locking.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)

mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use ontoview_core::ontology::QueryService;
use ontoview_core::OntologyIndex;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Query façade over the immutable graph index.
    pub query: QueryService,
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the ontology server.
pub struct ServeConfig {
    /// Listen address.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the obographs JSON document.
    pub data_path: String,
    /// Default visualization entry point.
    pub root_id: String,
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Load the ontology and start the server.
pub async fn start_server(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(path = %config.data_path, "loading ontology");
    let index = OntologyIndex::from_file(&config.data_path, &config.root_id)?;
    let stats = index.stats();
    tracing::info!(
        nodes = stats.total_nodes,
        edges = stats.total_edges,
        "ontology loaded"
    );

    let state = Arc::new(AppState {
        query: QueryService::new(Arc::new(index)),
    });

    // Build router with API endpoints
    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // API endpoints
        .route("/api/stats", get(handlers::stats))
        .route("/api/search", get(handlers::search))
        .route("/api/node/{id}", get(handlers::node))
        .route("/api/node/{id}/parents", get(handlers::parents))
        .route("/api/node/{id}/children", get(handlers::children))
        .route("/api/subgraph/{id}", get(handlers::subgraph))
        // CORS for the visualizer frontend
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    println!("Starting ontoview server...");
    println!("API: http://{}", addr);
    println!("Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
