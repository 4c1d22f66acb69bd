// ── Mock Implementations for Testing ────────────────────────────────────────
//
// In-memory sources with canned responses, for unit tests and offline demos.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use pathovar_common::{PathovarError, Result};

use crate::models::VepLookup;
use crate::{ClinicalSource, VariantEffectSource};

/// Variant-effect source answering from a map of raw VEP response bodies.
/// Unknown variants answer HTTP 400, as VEP does for unparseable HGVS.
#[derive(Debug, Clone, Default)]
pub struct MockVariantEffectSource {
    bodies: HashMap<String, Value>,
    unavailable: bool,
}

impl MockVariantEffectSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw response body for a variant.
    pub fn with(mut self, hgvs: &str, body: Value) -> Self {
        self.bodies.insert(hgvs.to_string(), body);
        self
    }

    /// Every fetch fails with HTTP 503.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }
}

#[async_trait]
impl VariantEffectSource for MockVariantEffectSource {
    async fn fetch(&self, hgvs: &str) -> Result<VepLookup> {
        if self.unavailable {
            return Err(PathovarError::Status { status: 503, body: "Service Unavailable".into() });
        }
        match self.bodies.get(hgvs) {
            Some(body) => Ok(VepLookup::from_body(200, body.clone())),
            None => Err(PathovarError::Status {
                status: 400,
                body: format!(r#"{{"error":"Unable to parse HGVS notation '{hgvs}'"}}"#),
            }),
        }
    }
}

/// Clinical source answering from canned search hits and summary documents.
/// Unknown terms have no hits; unknown summary ids fail.
#[derive(Debug, Clone, Default)]
pub struct MockClinicalSource {
    hits: HashMap<String, Vec<String>>,
    summaries: HashMap<String, Value>,
    search_fails: bool,
}

impl MockClinicalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the ids returned when searching for `term`.
    pub fn with_hits(mut self, term: &str, ids: &[&str]) -> Self {
        self.hits.insert(term.to_string(), ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Register the raw esummary document for `id`.
    pub fn with_summary(mut self, id: &str, doc: Value) -> Self {
        self.summaries.insert(id.to_string(), doc);
        self
    }

    /// Every search fails at the transport level.
    pub fn unavailable() -> Self {
        Self { search_fails: true, ..Self::default() }
    }
}

#[async_trait]
impl ClinicalSource for MockClinicalSource {
    async fn search(&self, term: &str) -> Result<Vec<String>> {
        if self.search_fails {
            return Err(PathovarError::Status { status: 502, body: "Bad Gateway".into() });
        }
        Ok(self.hits.get(term).cloned().unwrap_or_default())
    }

    async fn summary(&self, id: &str) -> Result<Value> {
        self.summaries
            .get(id)
            .cloned()
            .ok_or_else(|| PathovarError::Status { status: 500, body: format!("no summary for {id}") })
    }
}
