//! ClinVar lookups through NCBI E-utilities.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use pathovar_common::{PathovarError, Result, SandboxClient as Client};

use crate::settings::SourceSettings;
use crate::ClinicalSource;

pub struct ClinVarClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ClinVarClient {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        Ok(Self::with_client(settings.build_http_client()?, settings))
    }

    /// Build on an existing HTTP client, sharing its connection pool.
    pub fn with_client(client: Client, settings: &SourceSettings) -> Self {
        Self {
            client,
            base_url: settings.eutils_base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key().map(String::from),
        }
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "clinvar".to_string()),
            ("retmode", "json".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    async fn get_json(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self.client.get(&url)?.query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PathovarError::Status { status: status.as_u16(), body });
        }
        Ok(resp.json::<Value>().await?)
    }
}

/// Pull the id list out of an esearch response.
///
/// A response without `esearchresult.idlist` counts as "no ids" unless NCBI
/// flagged an error, in which case the search itself failed.
pub fn parse_esearch_ids(resp: &Value) -> Result<Vec<String>> {
    if let Some(msg) = resp["error"].as_str().or_else(|| resp["esearchresult"]["ERROR"].as_str()) {
        return Err(PathovarError::MalformedResponse(format!("esearch error: {msg}")));
    }

    Ok(resp["esearchresult"]["idlist"]
        .as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default())
}

#[async_trait]
impl ClinicalSource for ClinVarClient {
    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("term", term.to_string()));

        let resp = self.get_json("esearch.fcgi", &params).await?;
        let ids = parse_esearch_ids(&resp)?;
        debug!(?ids, "ClinVar esearch returned ids");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn summary(&self, id: &str) -> Result<Value> {
        let mut params = self.base_params();
        params.push(("id", id.to_string()));

        let resp = self.get_json("esummary.fcgi", &params).await?;
        debug!(has_result = resp["result"].is_object(), "ClinVar esummary fetched");
        Ok(resp)
    }
}
