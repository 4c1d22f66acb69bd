//! End-to-end analysis of one variant.
//!
//! Orchestrates a single analysis:
//!   1. Fetch the VEP prediction and run the ClinVar lookup concurrently
//!   2. Extract PVS1/PM2 evidence from the VEP record
//!   3. Normalise the ClinVar answer into a status
//!   4. Synthesize the verdict
//!
//! The pipeline never fails: service errors degrade to an absent record or a
//! sentinel status, and are logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use pathovar_sources::{ClinicalSource, VariantEffectRecord, VariantEffectSource};

use crate::clinical::{lookup_status, ClinicalStatus};
use crate::criteria::ClassifierConfig;
use crate::evidence::{extract, Evidence};
use crate::verdict::{synthesize, Verdict};

/// What the VEP exchange looked like, kept for debugging output.
#[derive(Debug, Clone, Serialize)]
pub struct VepTrace {
    /// HTTP status if the service answered at all.
    pub http_status: Option<u16>,
    /// Raw response body, or the error text when there was none.
    pub body: Value,
}

// ── Result summary ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct VariantAnalysis {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub variant: String,
    pub evidence: Evidence,
    pub clinical_status: ClinicalStatus,
    pub verdict: Verdict,
    /// Rendered verdict string, for consumers that only want the label.
    pub verdict_label: String,
    pub criteria_met: Vec<&'static str>,
    pub vep_trace: VepTrace,
    pub duration_ms: u64,
}

// ── Pipeline orchestrator ─────────────────────────────────────────────────────

/// Holds the two sources and the classifier settings. Cheap to share behind
/// an `Arc`; analyses do not touch any shared mutable state.
pub struct AnalysisPipeline {
    vep: Arc<dyn VariantEffectSource>,
    clinvar: Arc<dyn ClinicalSource>,
    config: ClassifierConfig,
}

impl AnalysisPipeline {
    pub fn new(
        vep: Arc<dyn VariantEffectSource>,
        clinvar: Arc<dyn ClinicalSource>,
        config: ClassifierConfig,
    ) -> Self {
        Self { vep, clinvar, config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Fetch the VEP record, returning `None` on any failure.
    async fn fetch_record(&self, variant: &str) -> (Option<VariantEffectRecord>, VepTrace) {
        match self.vep.fetch(variant).await {
            Ok(lookup) => {
                if lookup.record.is_none() {
                    warn!("VEP answered without a usable record");
                }
                let trace = VepTrace { http_status: Some(lookup.status), body: lookup.body };
                (lookup.record, trace)
            }
            Err(e) => {
                warn!(error = %e, "VEP lookup failed");
                let trace = VepTrace {
                    http_status: e.http_status(),
                    body: Value::String(e.to_string()),
                };
                (None, trace)
            }
        }
    }

    /// Analyse one (already validated) variant identifier.
    #[instrument(skip(self))]
    pub async fn analyze(&self, variant: &str) -> VariantAnalysis {
        let analysis_id = Uuid::new_v4();
        let t0 = std::time::Instant::now();

        // The two services are independent; join before synthesis.
        let ((record, vep_trace), clinical_status) = tokio::join!(
            self.fetch_record(variant),
            lookup_status(self.clinvar.as_ref(), variant),
        );

        let evidence = extract(record.as_ref(), &self.config);
        let verdict = synthesize(&evidence.tally, &clinical_status);
        let duration_ms = t0.elapsed().as_millis() as u64;

        info!(
            analysis_id = %analysis_id,
            consequence = %evidence.consequence,
            frequency = ?evidence.frequency,
            clinvar = %clinical_status,
            verdict = %verdict,
            duration_ms,
            "Variant analysed"
        );

        VariantAnalysis {
            analysis_id,
            analyzed_at: Utc::now(),
            variant: variant.to_string(),
            criteria_met: evidence.tally.criteria_met(),
            verdict_label: verdict.label(),
            evidence,
            clinical_status,
            verdict,
            vep_trace,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceTally;
    use crate::verdict::Prediction;
    use pathovar_sources::{MockClinicalSource, MockVariantEffectSource};
    use pathovar_test_utils::fixtures::{self, BRCA1_INSERTION};
    use pretty_assertions::assert_eq;

    fn pipeline(vep: MockVariantEffectSource, clinvar: MockClinicalSource) -> AnalysisPipeline {
        AnalysisPipeline::new(Arc::new(vep), Arc::new(clinvar), ClassifierConfig::default())
    }

    fn clinvar_reporting(description: &str) -> MockClinicalSource {
        MockClinicalSource::new()
            .with_hits(BRCA1_INSERTION, &["55601"])
            .with_summary("55601", fixtures::esummary_response("55601", description))
    }

    #[tokio::test]
    async fn test_confirmed_pathogenic_end_to_end() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, fixtures::vep_response("frameshift_variant", Some(0.000004)));
        let p = pipeline(vep, clinvar_reporting("Pathogenic"));

        let a = p.analyze(BRCA1_INSERTION).await;
        assert_eq!(a.evidence.tally, EvidenceTally { pvs: 1, pm: 1 });
        assert_eq!(a.evidence.consequence, "frameshift_variant");
        assert_eq!(a.evidence.frequency, Some(0.000004));
        assert_eq!(a.clinical_status, ClinicalStatus::Reported("Pathogenic".into()));
        assert_eq!(a.verdict_label, "CONFIRMED PATHOGENIC");
        assert_eq!(a.criteria_met, vec!["PVS1 (Very Strong)", "PM2 (Moderate)"]);
        assert_eq!(a.vep_trace.http_status, Some(200));
    }

    #[tokio::test]
    async fn test_conflict_end_to_end() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, fixtures::vep_response("stop_gained", Some(0.0)));
        let p = pipeline(vep, clinvar_reporting("Benign"));

        let a = p.analyze(BRCA1_INSERTION).await;
        assert!(a.verdict.is_conflict());
        assert_eq!(a.verdict_label, "CONFLICTING: predicted PATHOGENIC, ClinVar reports Benign");
    }

    #[tokio::test]
    async fn test_missing_frequency_keeps_likely_pathogenic() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, fixtures::vep_response_without_colocated("frameshift_variant"));
        let p = pipeline(vep, clinvar_reporting("Pathogenic"));

        let a = p.analyze(BRCA1_INSERTION).await;
        assert_eq!(a.evidence.frequency, None);
        assert_eq!(a.verdict.predicted(), Prediction::LikelyPathogenic);
        assert_eq!(a.verdict_label, "LIKELY PATHOGENIC (clinical database: Pathogenic)");
    }

    #[tokio::test]
    async fn test_both_services_down_degrades_gracefully() {
        let p = pipeline(MockVariantEffectSource::unavailable(), MockClinicalSource::unavailable());

        let a = p.analyze(BRCA1_INSERTION).await;
        assert_eq!(a.evidence.tally, EvidenceTally::default());
        assert_eq!(a.evidence.consequence, "unknown");
        assert_eq!(a.evidence.frequency, None);
        assert_eq!(a.clinical_status, ClinicalStatus::LookupFailed);
        assert_eq!(a.verdict_label, "VUS (clinical database: ClinVar Search Failed)");
        assert_eq!(a.vep_trace.http_status, Some(503));
        assert!(a.criteria_met.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_variant_has_no_record() {
        let p = pipeline(MockVariantEffectSource::new(), MockClinicalSource::new());

        let a = p.analyze("NM_000059.4:c.1A>G").await;
        assert_eq!(a.evidence.consequence, "unknown");
        assert_eq!(a.clinical_status, ClinicalStatus::NoRecord);
        assert_eq!(a.verdict_label, "VUS (clinical database: No ClinVar Record Found)");
        assert_eq!(a.vep_trace.http_status, Some(400));
    }

    #[tokio::test]
    async fn test_analyses_are_independent() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, fixtures::vep_response("splice_donor_variant", Some(0.00003)));
        let p = pipeline(vep, clinvar_reporting("Pathogenic"));

        let (a, b) = tokio::join!(p.analyze(BRCA1_INSERTION), p.analyze(BRCA1_INSERTION));
        assert_ne!(a.analysis_id, b.analysis_id);
        assert_eq!(a.evidence, b.evidence);
        assert_eq!(a.verdict, b.verdict);
    }

    #[tokio::test]
    async fn test_report_serialises_to_json() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, fixtures::vep_response("missense_variant", Some(0.2)));
        let p = pipeline(vep, clinvar_reporting("Uncertain significance"));

        let json = serde_json::to_value(p.analyze(BRCA1_INSERTION).await).unwrap();
        assert_eq!(json["verdict_label"], "VUS (clinical database: Uncertain significance)");
        assert_eq!(json["evidence"]["tally"]["pvs"], 0);
        assert_eq!(json["evidence"]["frequency"], 0.2);
        assert_eq!(json["clinical_status"]["kind"], "reported");
        assert_eq!(json["verdict"]["kind"], "predicted");
        assert_eq!(json["verdict"]["predicted"], "VUS");
    }

    #[tokio::test]
    async fn test_unusable_success_body_keeps_http_status_in_trace() {
        let vep = MockVariantEffectSource::new()
            .with(BRCA1_INSERTION, Value::String("<html>Service maintenance</html>".into()));
        let p = pipeline(vep, MockClinicalSource::new());

        let a = p.analyze(BRCA1_INSERTION).await;
        assert_eq!(a.evidence.consequence, "unknown");
        assert_eq!(a.vep_trace.http_status, Some(200));
        assert_eq!(a.vep_trace.body, Value::String("<html>Service maintenance</html>".into()));
    }
}
