//! Ensembl VEP REST client.
//!
//! Endpoint: https://rest.ensembl.org/vep/{species}/hgvs/{hgvs_notation}
//! Docs:     https://rest.ensembl.org/documentation/info/vep_hgvs_get

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};
use url::Url;

use pathovar_common::{PathovarError, Result, SandboxClient as Client};

use crate::models::VepLookup;
use crate::settings::SourceSettings;
use crate::VariantEffectSource;

pub struct VepClient {
    client: Client,
    base_url: String,
    species: String,
}

impl VepClient {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        Ok(Self::with_client(settings.build_http_client()?, settings))
    }

    /// Build on an existing HTTP client, sharing its connection pool.
    pub fn with_client(client: Client, settings: &SourceSettings) -> Self {
        Self {
            client,
            base_url: settings.vep_base_url.clone(),
            species: settings.species.clone(),
        }
    }

    /// `{base}/vep/{species}/hgvs/{hgvs}` with the variant percent-encoded as one segment.
    pub fn endpoint(&self, hgvs: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PathovarError::Config(format!("VEP base URL '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| PathovarError::Config(format!("VEP base URL '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["vep", self.species.as_str(), "hgvs", hgvs]);
        Ok(url)
    }
}

#[async_trait]
impl VariantEffectSource for VepClient {
    #[instrument(skip(self))]
    async fn fetch(&self, hgvs: &str) -> Result<VepLookup> {
        let url = self.endpoint(hgvs)?;

        let resp = self.client
            .get(url.as_str())?
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "VEP returned an error status");
            return Err(PathovarError::Status { status: status.as_u16(), body: text });
        }

        let lookup = VepLookup::from_text(status.as_u16(), &text);
        debug!(has_record = lookup.record.is_some(), "VEP lookup complete");
        Ok(lookup)
    }
}
