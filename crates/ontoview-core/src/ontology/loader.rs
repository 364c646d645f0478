//! Obographs document loader.
//!
//! Parses the raw ontology JSON (the obographs format used by HPO's
//! `hp.json`) into a flat term table and a filtered `is_a` edge list. Only
//! the first graph in the document is read. Edges with any other predicate
//! are silently discarded; missing metadata degrades to empty defaults
//! rather than failing the load. A document that cannot be parsed, has no
//! graphs, or has a graph without a nodes array fails fatally.

use std::path::Path;

use serde::Deserialize;

use super::error::OntologyError;
use super::term::Term;

/// The only predicate the application cares about: child `is_a` parent.
const ISA_PREDICATE: &str = "is_a";

// =============================================================================
// Raw document shape
// =============================================================================

#[derive(Debug, Deserialize)]
struct OboDocument {
    graphs: Vec<OboGraph>,
}

#[derive(Debug, Deserialize)]
struct OboGraph {
    // Deliberately not defaulted: a graph without a nodes array is a
    // malformed document and must fail the load.
    nodes: Vec<OboNode>,
    #[serde(default)]
    edges: Vec<OboEdge>,
}

#[derive(Debug, Deserialize)]
struct OboNode {
    id: String,
    #[serde(default)]
    lbl: Option<String>,
    #[serde(default)]
    meta: Option<OboMeta>,
}

#[derive(Debug, Default, Deserialize)]
struct OboMeta {
    #[serde(default)]
    definition: Option<OboDefinition>,
    #[serde(default)]
    synonyms: Vec<OboSynonym>,
}

#[derive(Debug, Deserialize)]
struct OboDefinition {
    #[serde(default)]
    val: String,
}

#[derive(Debug, Deserialize)]
struct OboSynonym {
    #[serde(default)]
    val: String,
}

#[derive(Debug, Deserialize)]
struct OboEdge {
    sub: String,
    pred: String,
    obj: String,
}

// =============================================================================
// Output shape
// =============================================================================

/// A retained `is_a` edge: `child` is a specialization of `parent`.
///
/// Endpoints are not yet validated against the term table; that happens in
/// [`OntologyIndex::build`](super::OntologyIndex::build).
#[derive(Debug, Clone, PartialEq)]
pub struct IsaEdge {
    pub child: String,
    pub parent: String,
}

// =============================================================================
// Loading
// =============================================================================

/// Parse an obographs JSON document into terms and `is_a` edges.
pub fn parse_document(content: &str) -> Result<(Vec<Term>, Vec<IsaEdge>), OntologyError> {
    let document: OboDocument = serde_json::from_str(content)?;
    let graph = document
        .graphs
        .into_iter()
        .next()
        .ok_or(OntologyError::EmptyDocument)?;

    let terms = graph
        .nodes
        .into_iter()
        .map(|node| {
            let meta = node.meta.unwrap_or_default();
            let definition = meta.definition.map(|d| d.val).unwrap_or_default();
            let synonyms = meta.synonyms.into_iter().map(|s| s.val).collect();

            Term::new(node.id, node.lbl.unwrap_or_default(), definition, synonyms)
        })
        .collect();

    let edges = graph
        .edges
        .into_iter()
        .filter(|edge| edge.pred == ISA_PREDICATE)
        .map(|edge| IsaEdge {
            child: edge.sub,
            parent: edge.obj,
        })
        .collect();

    Ok((terms, edges))
}

/// Read and parse an ontology document from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<(Vec<Term>, Vec<IsaEdge>), OntologyError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content)
}
