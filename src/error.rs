//! Error types

use thiserror::Error;

/// Failures raised while building a parser or provider
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported provider type: {0}")]
    UnsupportedProvider(String),

    #[error("Missing API key for provider: {provider}")]
    MissingApiKey { provider: String },

    #[error("Invalid base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failures raised while fetching suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The outbound HTTP call failed (network, timeout, non-2xx status)
    #[error("{provider} API error: {message}")]
    Transport { provider: String, message: String },

    /// The response body could not be decoded
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Any other failure raised by a provider
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SuggestError {
    pub fn transport(provider: impl Into<String>, error: impl std::fmt::Display) -> Self {
        SuggestError::Transport {
            provider: provider.into(),
            message: error.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SuggestError::Transport { .. })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Suggest(#[from] SuggestError),
}

pub type Result<T> = std::result::Result<T, Error>;
