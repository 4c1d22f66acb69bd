//! Evidence extraction from a variant-effect record.
//!
//! Maps the VEP consequence and gnomAD frequency onto the PVS1 and PM2
//! counters. A missing frequency is kept distinct from a frequency of 0.0:
//! only a value actually reported by the service can count as rare.

use serde::{Deserialize, Serialize};
use tracing::debug;

use pathovar_sources::VariantEffectRecord;

use crate::criteria::ClassifierConfig;

/// Consequence reported when no variant-effect record is available.
pub const UNKNOWN_CONSEQUENCE: &str = "unknown";

/// Counters for the evaluated criteria. Each is 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceTally {
    /// Very strong loss-of-function evidence (PVS1).
    pub pvs: u8,
    /// Moderate population-rarity evidence (PM2).
    pub pm: u8,
}

impl EvidenceTally {
    /// Human-readable names of the criteria that fired.
    pub fn criteria_met(&self) -> Vec<&'static str> {
        let mut met = Vec::new();
        if self.pvs >= 1 {
            met.push("PVS1 (Very Strong)");
        }
        if self.pm >= 1 {
            met.push("PM2 (Moderate)");
        }
        met
    }
}

/// Everything the extractor derives from one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub tally: EvidenceTally,
    pub consequence: String,
    /// gnomAD allele frequency as reported, `None` when not obtainable.
    pub frequency: Option<f64>,
}

impl Evidence {
    fn absent() -> Self {
        Self {
            tally: EvidenceTally::default(),
            consequence: UNKNOWN_CONSEQUENCE.to_string(),
            frequency: None,
        }
    }
}

/// First colocated variant's gnomAD frequency, if present and a valid proportion.
fn population_frequency(record: &VariantEffectRecord) -> Option<f64> {
    let af = record
        .colocated_variants
        .as_ref()
        .and_then(|coloc| coloc.first())
        .and_then(|first| first.gnomad_af)?;

    if af.is_finite() && (0.0..=1.0).contains(&af) {
        Some(af)
    } else {
        debug!(af, "Ignoring out-of-range gnomAD frequency");
        None
    }
}

/// Derive the evidence tally, consequence and frequency from a record.
/// An absent record yields a zero tally and consequence `"unknown"`.
pub fn extract(record: Option<&VariantEffectRecord>, config: &ClassifierConfig) -> Evidence {
    let Some(record) = record else {
        return Evidence::absent();
    };

    let mut tally = EvidenceTally::default();

    // ---- PVS1 (LoF consequence) ----
    let consequence = record.most_severe_consequence.clone().unwrap_or_default();
    if config.is_loss_of_function(&consequence) {
        tally.pvs = 1;
    }

    // ---- PM2 (population frequency) ----
    let frequency = population_frequency(record);
    if let Some(f) = frequency {
        if config.is_rare(f) {
            tally.pm = 1;
        }
    }

    Evidence { tally, consequence, frequency }
}
