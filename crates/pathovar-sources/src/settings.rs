//! Connection settings shared by the annotation clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use pathovar_common::{PathovarError, Result, SandboxClient};

pub const DEFAULT_VEP_BASE_URL: &str = "https://rest.ensembl.org";
pub const DEFAULT_EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_vep_base_url")]
    pub vep_base_url: String,
    #[serde(default = "default_species")]
    pub species: String,
    #[serde(default = "default_eutils_base_url")]
    pub eutils_base_url: String,
    /// Optional NCBI API key for higher E-utilities rate limits.
    #[serde(default)]
    pub ncbi_api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Hosts added to the HTTP allowlist, for local mirrors.
    #[serde(default)]
    pub extra_allowed_domains: Vec<String>,
}

fn default_vep_base_url()    -> String { DEFAULT_VEP_BASE_URL.to_string() }
fn default_species()         -> String { "human".to_string() }
fn default_eutils_base_url() -> String { DEFAULT_EUTILS_BASE_URL.to_string() }
fn default_timeout_secs()    -> u64    { pathovar_common::sandbox::DEFAULT_TIMEOUT_SECS }

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            vep_base_url: default_vep_base_url(),
            species: default_species(),
            eutils_base_url: default_eutils_base_url(),
            ncbi_api_key: None,
            timeout_secs: default_timeout_secs(),
            extra_allowed_domains: vec![],
        }
    }
}

impl SourceSettings {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("vep_base_url", &self.vep_base_url),
            ("eutils_base_url", &self.eutils_base_url),
        ] {
            let url = Url::parse(value)
                .map_err(|e| PathovarError::Config(format!("sources.{name} '{value}': {e}")))?;
            if url.cannot_be_a_base() {
                return Err(PathovarError::Config(format!(
                    "sources.{name} '{value}' cannot be used as a base URL"
                )));
            }
        }
        if self.species.trim().is_empty() {
            return Err(PathovarError::Config("sources.species must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(PathovarError::Config("sources.timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    /// The API key, ignoring blank values left in config templates.
    pub fn api_key(&self) -> Option<&str> {
        self.ncbi_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Build the allow-listed HTTP client these settings describe.
    pub fn build_http_client(&self) -> Result<SandboxClient> {
        let mut client = SandboxClient::with_timeout(Duration::from_secs(self.timeout_secs))?;
        for domain in &self.extra_allowed_domains {
            client.allow_domain(domain);
        }
        Ok(client)
    }
}
