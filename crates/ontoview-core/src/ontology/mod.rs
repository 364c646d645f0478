//! Ontology graph: model, loader, index, and query façade.
//!
//! The pipeline runs once at process start and is read-only afterwards:
//!
//! ```text
//! loader ──► OntologyIndex ──► QueryService ──► transport
//! ```
//!
//! ## Modules
//!
//! - `term` - the [`Term`] value type
//! - `loader` - obographs JSON parsing and `is_a` edge filtering
//! - `index` - id map, parent/child adjacency, ranked search, and
//!   bounded-depth neighborhood extraction
//! - `query` - parameter clamping, id decoding, and response shaping
//! - `error` - fatal load errors
//!
//! ## Design principles
//!
//! - Both adjacency directions are rebuilt from the single directed edge
//!   list in one pass, so parent/child symmetry holds by construction
//! - The index is an explicitly constructed value handed to the query
//!   service, never a hidden global
//! - Unknown ids and too-short queries are normal outcomes, not errors

pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod term;

pub use error::OntologyError;
pub use index::{
    OntologyIndex, OntologyStats, SearchHits, Subgraph, SubgraphEdge, SubgraphNode, TermRole,
};
pub use loader::IsaEdge;
pub use query::{QueryService, SearchPage};
pub use term::{Term, OBO_PREFIX};
