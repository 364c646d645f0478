pub mod config;
pub mod ontology;

pub use config::Config;
pub use ontology::{OntologyIndex, QueryService, Term};
