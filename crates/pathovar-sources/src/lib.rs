//! pathovar-sources — Clients for the two annotation services.
//!
//! - Ensembl VEP (variant-effect prediction)
//! - NCBI ClinVar via E-utilities (clinical significance)
//!
//! Both clients answer with an explicit `Result`; turning failures into
//! "absent record" or sentinel statuses is the classifier's job.

pub mod clinvar;
pub mod mock;
pub mod models;
pub mod settings;
pub mod vep;

use async_trait::async_trait;
use pathovar_common::Result;

pub use clinvar::ClinVarClient;
pub use mock::{MockClinicalSource, MockVariantEffectSource};
pub use models::{ColocatedVariant, VariantEffectRecord, VepLookup};
pub use settings::SourceSettings;
pub use vep::VepClient;

/// A variant-effect prediction service keyed by HGVS expression.
#[async_trait]
pub trait VariantEffectSource: Send + Sync {
    /// Fetch the prediction for one variant.
    ///
    /// Non-2xx answers are returned as `PathovarError::Status`; a 2xx answer
    /// with no usable element yields a `VepLookup` whose `record` is `None`.
    async fn fetch(&self, hgvs: &str) -> Result<VepLookup>;
}

/// A clinical-significance database queried in two phases.
#[async_trait]
pub trait ClinicalSource: Send + Sync {
    /// Search by free-text term, returning internal record ids in service order.
    async fn search(&self, term: &str) -> Result<Vec<String>>;

    /// Fetch the raw summary document for one record id.
    async fn summary(&self, id: &str) -> Result<serde_json::Value>;
}
