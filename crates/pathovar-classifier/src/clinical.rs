//! Normalisation of the two-phase ClinVar lookup into a single status.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

use pathovar_common::Result;
use pathovar_sources::ClinicalSource;

pub const NO_RECORD_TEXT: &str = "No ClinVar Record Found";
pub const LOOKUP_FAILED_TEXT: &str = "ClinVar Search Failed";

/// Outcome of a clinical-significance lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "description", rename_all = "snake_case")]
pub enum ClinicalStatus {
    /// Clinical significance description exactly as ClinVar reports it.
    Reported(String),
    /// The search matched no ClinVar record.
    NoRecord,
    /// Either phase failed or the summary was unusable.
    LookupFailed,
}

impl ClinicalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClinicalStatus::Reported(description) => description,
            ClinicalStatus::NoRecord => NO_RECORD_TEXT,
            ClinicalStatus::LookupFailed => LOOKUP_FAILED_TEXT,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, ClinicalStatus::Reported(_))
    }
}

impl fmt::Display for ClinicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty_str(v: &Value) -> Option<&str> {
    v.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Description for `id` in an esummary document.
///
/// Older documents carry it in `clinical_significance`; current ones leave that
/// blank and use `germline_classification`.
fn summary_description<'a>(summary: &'a Value, id: &str) -> Option<&'a str> {
    let entry = &summary["result"][id];
    non_empty_str(&entry["clinical_significance"]["description"])
        .or_else(|| non_empty_str(&entry["germline_classification"]["description"]))
}

/// Collapse a search result and (optional) summary result into a status.
///
/// `summary` is the esummary answer for the first search id; `None` means it
/// was never fetched.
pub fn normalize(search: &Result<Vec<String>>, summary: Option<&Result<Value>>) -> ClinicalStatus {
    let ids = match search {
        Ok(ids) => ids,
        Err(_) => return ClinicalStatus::LookupFailed,
    };

    // First id wins; ClinVar's ordering is not re-ranked.
    let Some(first) = ids.first() else {
        return ClinicalStatus::NoRecord;
    };

    match summary {
        Some(Ok(doc)) => match summary_description(doc, first) {
            Some(description) => ClinicalStatus::Reported(description.to_string()),
            None => ClinicalStatus::LookupFailed,
        },
        Some(Err(_)) | None => ClinicalStatus::LookupFailed,
    }
}

/// Run the search-then-summarise lookup for `variant` and normalise it.
/// Never fails: every error degrades to a sentinel status.
#[instrument(skip(source))]
pub async fn lookup_status(source: &dyn ClinicalSource, variant: &str) -> ClinicalStatus {
    let search = source.search(variant).await;
    if let Err(e) = &search {
        warn!(error = %e, "ClinVar search failed");
    }

    let summary = match &search {
        Ok(ids) => match ids.first() {
            Some(id) => Some(source.summary(id).await),
            None => None,
        },
        Err(_) => None,
    };
    if let Some(Err(e)) = &summary {
        warn!(error = %e, "ClinVar summary failed");
    }

    let status = normalize(&search, summary.as_ref());
    if status == ClinicalStatus::LookupFailed && matches!(summary, Some(Ok(_))) {
        warn!("ClinVar summary had no clinical significance description");
    }
    status
}
