//! pathovar-classifier — Evidence aggregation and verdict synthesis.
//!
//! Two ACMG criteria are evaluated:
//! - PVS1: predicted loss-of-function consequence (Ensembl VEP)
//! - PM2:  rarity in the population (gnomAD allele frequency)
//!
//! The predicted label is then reconciled with the ClinVar classification.
//! This is an educational approximation, not a validated ACMG implementation.

pub mod clinical;
pub mod criteria;
pub mod evidence;
pub mod pipeline;
pub mod report;
pub mod verdict;

pub use clinical::{lookup_status, normalize, ClinicalStatus};
pub use criteria::ClassifierConfig;
pub use evidence::{extract, Evidence, EvidenceTally};
pub use pipeline::{AnalysisPipeline, VariantAnalysis, VepTrace};
pub use verdict::{synthesize, Prediction, Verdict};
