//! HTTP route handlers for the ontology server.
//!
//! Handlers are kept thin: parameter extraction, one call into the
//! [`QueryService`](ontoview_core::QueryService), and status mapping.
//! All clamping and id decoding happens inside the query service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::models::{ErrorBody, HealthBody, RootBody, SearchParams, SubgraphParams};
use super::AppState;

/// GET `/` - liveness banner.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootBody> {
    Json(RootBody {
        message: "ontoview API is running",
        total_nodes: state.query.nodes_loaded(),
    })
}

/// GET `/health` - liveness check.
///
/// The index is fully built before the listener binds, so a reachable
/// server is always "healthy".
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        nodes_loaded: state.query.nodes_loaded(),
        edges_loaded: state.query.edges_loaded(),
    })
}

/// GET `/api/stats` - node/edge counts and the root term id.
pub async fn stats(State(state): State<Arc<AppState>>) -> Response {
    Json(state.query.stats()).into_response()
}

/// GET `/api/search` - ranked, paginated term search.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let page = state.query.search(&params.q, params.page, params.page_size);
    Json(page).into_response()
}

/// GET `/api/node/{id}` - term detail, or 404 for an unknown id.
pub async fn node(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.query.node(&id) {
        Some(term) => Json(term).into_response(),
        None => not_found(&id),
    }
}

/// GET `/api/node/{id}/parents` - direct parents, or 404 for an unknown id.
pub async fn parents(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.query.parents(&id) {
        Some(terms) => Json(terms).into_response(),
        None => not_found(&id),
    }
}

/// GET `/api/node/{id}/children` - direct children, or 404 for an unknown id.
pub async fn children(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.query.children(&id) {
        Some(terms) => Json(terms).into_response(),
        None => not_found(&id),
    }
}

/// GET `/api/subgraph/{id}` - neighborhood subgraph for visualization.
///
/// An unknown center returns empty node/edge lists with a 200; the
/// visualizer renders an empty canvas rather than an error state.
pub async fn subgraph(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SubgraphParams>,
) -> Response {
    Json(state.query.subgraph(&id, params.depth)).into_response()
}

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("Node not found: {id}"),
        }),
    )
        .into_response()
}
