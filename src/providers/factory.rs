//! Provider factory for building providers from configuration

use super::tomtom::{TomTom, TomTomConfig};
use super::traits::AddressProvider;
use crate::config::ProviderSettings;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Known provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    TomTom,
}

impl ProviderKind {
    /// Identifier used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::TomTom => "tomtom",
        }
    }

    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::TomTom]
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tomtom" => Ok(ProviderKind::TomTom),
            _ => Err(ConfigError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider configuration, one variant per provider type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    TomTom(TomTomConfig),
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::TomTom(_) => ProviderKind::TomTom,
        }
    }

    /// Check untyped settings against the configuration their type requires
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ConfigError> {
        let kind: ProviderKind = settings.provider_type.parse()?;

        match kind {
            ProviderKind::TomTom => {
                let api_key = settings
                    .api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| ConfigError::MissingApiKey {
                        provider: kind.to_string(),
                    })?;

                Ok(ProviderConfig::TomTom(TomTomConfig {
                    api_key,
                    base_url: settings.base_url.clone(),
                    timeout_ms: settings.timeout_ms,
                }))
            }
        }
    }
}

impl From<TomTomConfig> for ProviderConfig {
    fn from(config: TomTomConfig) -> Self {
        ProviderConfig::TomTom(config)
    }
}

/// Factory for creating address providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from its typed configuration
    pub fn create_provider(
        config: impl Into<ProviderConfig>,
    ) -> Result<Arc<dyn AddressProvider>, ConfigError> {
        let config = config.into();
        let kind = config.kind();

        let provider: Arc<dyn AddressProvider> = match config {
            ProviderConfig::TomTom(config) => Arc::new(TomTom::new(config)?),
        };

        info!("Loaded provider: {}", kind);
        Ok(provider)
    }

    /// Create a provider from settings naming its type
    pub fn from_settings(
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn AddressProvider>, ConfigError> {
        Self::create_provider(ProviderConfig::from_settings(settings)?)
    }

    /// Get list of available provider types
    pub fn available_providers() -> Vec<&'static str> {
        ProviderKind::all().iter().map(|k| k.as_str()).collect()
    }
}
