//! API request/response models for the ontology server.
//!
//! Response bodies for search, node detail, and subgraph endpoints reuse
//! the serde-serializable types from `ontoview-core` directly; this module
//! holds the request parameter shapes and the small transport-only bodies.

use serde::{Deserialize, Serialize};

/// Query parameters for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string (required; below two characters yields an
    /// empty result set).
    pub q: String,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Results per page, capped server-side.
    pub page_size: Option<usize>,
}

/// Query parameters for `/api/subgraph/{id}`.
#[derive(Debug, Deserialize)]
pub struct SubgraphParams {
    /// Expansion depth, clamped server-side to 1..=5.
    pub depth: Option<u32>,
}

/// Body for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub nodes_loaded: usize,
    pub edges_loaded: usize,
}

/// Body for `/`.
#[derive(Debug, Serialize)]
pub struct RootBody {
    pub message: &'static str,
    pub total_nodes: usize,
}

/// Error body for 404 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
