//! Input and output document shapes exchanged with the batch driver.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::specification::Specification;

/// A structured raw product document, as produced by the upstream HTML
/// collaborator: the product title plus the label/value pairs of the
/// vendor spec table. Missing keys are absent, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Opaque source document id, carried through to the output.
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Label → value pairs from the technical-detail table. Extraction only
    /// performs key lookups, so map ordering carries no meaning.
    #[serde(default)]
    pub technical_details: HashMap<String, String>,
}

/// One extracted document written by the batch driver, pairing the canonical
/// specification with the raw inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub source_id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub specifications: Specification,
    /// The raw technical-detail map, echoed through for auditing.
    pub raw_specs: HashMap<String, String>,
    pub processed_at: DateTime<Utc>,
    /// Pattern-table version the specification was extracted with.
    pub extractor_version: String,
}
