//! Data models for variant-effect responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The part of a VEP response element the classifier reads.
///
/// Built leniently from raw JSON: absent or wrongly-typed fields become
/// `None`, so construction never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantEffectRecord {
    pub most_severe_consequence: Option<String>,
    pub colocated_variants: Option<Vec<ColocatedVariant>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColocatedVariant {
    pub id: Option<String>,
    pub gnomad_af: Option<f64>,
}

impl VariantEffectRecord {
    pub fn from_value(v: &Value) -> Self {
        Self {
            most_severe_consequence: v["most_severe_consequence"].as_str().map(String::from),
            colocated_variants: v["colocated_variants"]
                .as_array()
                .map(|items| items.iter().map(ColocatedVariant::from_value).collect()),
        }
    }

    /// Record from a VEP response body: the first element of the top-level list.
    pub fn from_response(body: &Value) -> Option<Self> {
        body.as_array()
            .and_then(|items| items.first())
            .filter(|first| first.is_object())
            .map(Self::from_value)
    }
}

impl ColocatedVariant {
    pub fn from_value(v: &Value) -> Self {
        Self {
            id: v["id"].as_str().map(String::from),
            gnomad_af: v["gnomad_af"].as_f64(),
        }
    }
}

/// A successful (2xx) VEP exchange.
#[derive(Debug, Clone, Serialize)]
pub struct VepLookup {
    pub status: u16,
    /// Raw response body, kept for debugging output.
    pub body: Value,
    pub record: Option<VariantEffectRecord>,
}

impl VepLookup {
    pub fn from_body(status: u16, body: Value) -> Self {
        let record = VariantEffectRecord::from_response(&body);
        Self { status, body, record }
    }

    /// Like `from_body`, but a body that is not JSON is kept verbatim as a
    /// string (and so yields no record) instead of failing the lookup.
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self::from_body(status, body)
    }
}
