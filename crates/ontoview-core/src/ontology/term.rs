//! Term model for the ontology graph.

use serde::{Deserialize, Serialize};

/// Prefix shared by every identifier in the OBO purl namespace. Stripped to
/// produce the display-friendly short id (`HP_0000118` instead of the full
/// URI).
pub const OBO_PREFIX: &str = "http://purl.obolibrary.org/obo/";

/// A single ontology concept.
///
/// Terms are created in bulk during load and never mutated afterwards; the
/// `parents`/`children` adjacency is populated by
/// [`OntologyIndex::build`](crate::ontology::OntologyIndex::build) from the
/// `is_a` edge list, never by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Full identifier (a URI in the source format, treated as opaque).
    pub id: String,
    /// Display-friendly id with the OBO prefix stripped.
    pub short_id: String,
    /// Human-readable name. Empty when the source node carried none.
    pub label: String,
    /// Free-text definition. Empty when absent.
    pub definition: String,
    /// Alternate labels, in source order.
    pub synonyms: Vec<String>,
    /// Ids of terms this term `is_a` (direct parents).
    pub parents: Vec<String>,
    /// Ids of terms that `is_a` this term (direct children).
    pub children: Vec<String>,
}

impl Term {
    /// Create a term with empty adjacency.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        definition: impl Into<String>,
        synonyms: Vec<String>,
    ) -> Self {
        let id = id.into();
        let short_id = id.strip_prefix(OBO_PREFIX).unwrap_or(&id).to_string();

        Self {
            id,
            short_id,
            label: label.into(),
            definition: definition.into(),
            synonyms,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }
}
