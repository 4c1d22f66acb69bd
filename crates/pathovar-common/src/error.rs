use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathovarError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid variant identifier: {0}")]
    InvalidVariant(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathovarError {
    /// HTTP status code carried by the error, if the service answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            PathovarError::Status { status, .. } => Some(*status),
            PathovarError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PathovarError>;
