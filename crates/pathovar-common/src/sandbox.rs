use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::PathovarError;

/// Default request timeout for outbound lookups.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An HTTP client that only allows requests to approved domains.
/// Every outbound call to the annotation services goes through this client,
/// so a misconfigured base URL fails before any network I/O happens.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default allowlist and timeout.
    pub fn new() -> Result<Self, PathovarError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new SandboxClient with the default allowlist and the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, PathovarError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "rest.ensembl.org",        // Ensembl VEP (GRCh38)
            "grch37.rest.ensembl.org", // Ensembl VEP (GRCh37)
            "eutils.ncbi.nlm.nih.gov", // ClinVar via E-utilities
            "localhost",               // Local mirrors
            "127.0.0.1",               // Localhost alt
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("pathovar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PathovarError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.trim().to_ascii_lowercase());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Check exact match or if it's a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, PathovarError> {
        if !self.is_allowed(url) {
            return Err(PathovarError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
