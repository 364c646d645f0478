//! Query service: the thin façade between transport and graph index.
//!
//! Owns parameter hygiene (clamping page/page-size/depth, percent-decoding
//! path-style ids) and response shaping. All graph algorithms live in
//! [`OntologyIndex`]; the service never touches adjacency lists itself.

use std::sync::Arc;

use serde::Serialize;

use super::index::{OntologyIndex, OntologyStats, Subgraph};
use super::term::Term;

/// Default number of search results per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Hard cap on search results per page.
pub const MAX_PAGE_SIZE: usize = 100;
/// Default subgraph expansion depth.
pub const DEFAULT_DEPTH: u32 = 2;
/// Minimum subgraph expansion depth.
pub const MIN_DEPTH: u32 = 1;
/// Maximum subgraph expansion depth.
pub const MAX_DEPTH: u32 = 5;

/// One page of search results in external response shape.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub nodes: Vec<Term>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Read-only query façade over a fully built [`OntologyIndex`].
///
/// Constructed explicitly with the index at startup and shared by cloning;
/// holds no state of its own beyond the `Arc`. Tests build isolated
/// fixtures the same way, with no process-wide side effects.
#[derive(Clone)]
pub struct QueryService {
    index: Arc<OntologyIndex>,
}

impl QueryService {
    /// Wrap a built index.
    pub fn new(index: Arc<OntologyIndex>) -> Self {
        Self { index }
    }

    /// Ontology statistics for the stats endpoint.
    pub fn stats(&self) -> OntologyStats {
        self.index.stats()
    }

    /// Number of loaded terms, for liveness reporting.
    pub fn nodes_loaded(&self) -> usize {
        self.index.len()
    }

    /// Number of retained `is_a` edges, for liveness reporting.
    pub fn edges_loaded(&self) -> usize {
        self.index.stats().total_edges
    }

    /// Ranked, paginated search. `page` defaults to 1 and is clamped to be
    /// at least 1; `page_size` defaults to 20 and is clamped to 1..=100.
    /// A query shorter than two characters yields an empty page.
    pub fn search(&self, query: &str, page: Option<usize>, page_size: Option<usize>) -> SearchPage {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let hits = self.index.search(query, page, page_size);

        SearchPage {
            nodes: hits.terms,
            total: hits.total,
            page,
            page_size,
        }
    }

    /// Detail lookup for a (possibly percent-encoded) id. `None` maps to a
    /// 404 at the transport layer.
    pub fn node(&self, id: &str) -> Option<Term> {
        self.index.lookup(&decode_id(id)).cloned()
    }

    /// Direct parents of a term, or `None` if the term itself is unknown.
    /// Parent ids that resolve to no loaded term are skipped.
    pub fn parents(&self, id: &str) -> Option<Vec<Term>> {
        let term = self.index.lookup(&decode_id(id))?;
        Some(self.resolve(&term.parents))
    }

    /// Direct children of a term, or `None` if the term itself is unknown.
    pub fn children(&self, id: &str) -> Option<Vec<Term>> {
        let term = self.index.lookup(&decode_id(id))?;
        Some(self.resolve(&term.children))
    }

    /// Neighborhood subgraph around a term. `depth` defaults to 2 and is
    /// clamped to 1..=5. An unknown center yields empty node/edge lists.
    pub fn subgraph(&self, id: &str, depth: Option<u32>) -> Subgraph {
        let depth = depth.unwrap_or(DEFAULT_DEPTH).clamp(MIN_DEPTH, MAX_DEPTH);
        self.index.neighborhood(&decode_id(id), depth)
    }

    fn resolve(&self, ids: &[String]) -> Vec<Term> {
        ids.iter()
            .filter_map(|id| self.index.lookup(id))
            .cloned()
            .collect()
    }
}

/// Decode percent-encoding the transport layer may not have resolved on
/// path-style identifiers. An id that fails to decode as UTF-8 is used
/// verbatim; lookup on it will simply miss.
fn decode_id(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
