//! Ontology load error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the ontology document.
///
/// All of these are fatal: the index is only published once the whole
/// document has been parsed, so a failed load never leaves a partially
/// built index behind. Query-time conditions (unknown id, too-short search
/// query) are *not* errors and never appear here.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// IO error reading the source document.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the obographs
    /// shape (including a graph without a nodes array).
    #[error("Failed to parse ontology document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but contains no graphs entry.
    #[error("Ontology document contains no graphs")]
    EmptyDocument,
}
