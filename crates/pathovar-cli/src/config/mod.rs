//! Configuration loading for pathovar.
//! Reads pathovar.toml from the current directory or the path in PATHOVAR_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pathovar_classifier::ClassifierConfig;
use pathovar_sources::SourceSettings;

pub const DEFAULT_CONFIG_FILE: &str = "pathovar.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Variant pre-filled in the web form.
    #[serde(default = "default_example_variant")]
    pub example_variant: String,
}

fn default_bind()            -> String { "127.0.0.1:3000".to_string() }
fn default_example_variant() -> String { "NM_007294.4:c.5137_5138insA".to_string() }

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            example_variant: default_example_variant(),
        }
    }
}


impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or PATHOVAR_CONFIG) must exist; the default
    /// ./pathovar.toml is optional and built-in defaults are used without it.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var("PATHOVAR_CONFIG") {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            },
        };

        let mut config = Self::read(&path, required)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path, required: bool) -> anyhow::Result<Self> {
        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("No {} found, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Environment overrides: PATHOVAR_NCBI_API_KEY (only when the file sets
    /// none) and PATHOVAR_BIND.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.sources.api_key().is_none() {
            if let Some(key) = lookup("PATHOVAR_NCBI_API_KEY").filter(|k| !k.trim().is_empty()) {
                self.sources.ncbi_api_key = Some(key);
            }
        }
        if let Some(bind) = lookup("PATHOVAR_BIND").filter(|b| !b.trim().is_empty()) {
            self.web.bind = bind;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.sources.validate()?;
        self.classifier.validate()?;
        if self.web.bind.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!("web.bind '{}' is not a socket address", self.web.bind);
        }
        Ok(())
    }

    /// TOML rendering with the API key masked.
    pub fn to_redacted_toml(&self) -> anyhow::Result<String> {
        let mut shown = self.clone();
        if shown.sources.api_key().is_some() {
            shown.sources.ncbi_api_key = Some("********".to_string());
        }
        Ok(toml::to_string_pretty(&shown)?)
    }
}
