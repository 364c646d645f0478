//! Default values for ontoview configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Ontology Defaults
// ============================================================================

/// Default path to the obographs JSON document.
pub const DEFAULT_DATA_PATH: &str = "hp.json";

/// Default root term used as the visualization entry point
/// ("Phenotypic abnormality" sits directly below this in HPO).
pub const DEFAULT_ROOT_ID: &str = "http://purl.obolibrary.org/obo/HP_0000001";

// ============================================================================
// Server Defaults
// ============================================================================

/// Default listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;
