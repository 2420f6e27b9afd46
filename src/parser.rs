//! Address parser facade

use crate::config::{AddressParserConfig, Settings};
use crate::error::{ConfigError, SuggestError};
use crate::providers::{AddressProvider, ProviderFactory};
use crate::providers::tomtom::TomTomConfig;
use crate::suggestions::{AddressSuggestion, SuggestionOptions};
use std::sync::Arc;
use tracing::debug;

/// Entry point for address suggestions
///
/// Holds one active provider and forwards non-blank queries to it.
#[derive(Clone)]
pub struct AddressParser {
    provider: Arc<dyn AddressProvider>,
}

impl AddressParser {
    /// Create a parser backed by the TomTom provider
    pub fn new(config: AddressParserConfig) -> Result<Self, ConfigError> {
        let provider = ProviderFactory::create_provider(TomTomConfig::from(config))?;
        Ok(Self::with_provider(provider))
    }

    /// Create a parser using the provider named in settings
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let provider = ProviderFactory::from_settings(&settings.provider)?;
        Ok(Self::with_provider(provider))
    }

    /// Create a parser around an existing provider
    pub fn with_provider(provider: Arc<dyn AddressProvider>) -> Self {
        Self { provider }
    }

    /// Replace the active provider
    pub fn set_provider(&mut self, provider: Arc<dyn AddressProvider>) {
        debug!(
            "Switching provider: {} -> {}",
            self.provider.name(),
            provider.name()
        );
        self.provider = provider;
    }

    /// Active provider
    pub fn provider(&self) -> &Arc<dyn AddressProvider> {
        &self.provider
    }

    /// Get suggestions for a partial address
    ///
    /// Blank queries return no suggestions without calling the provider.
    /// Provider errors are returned unchanged.
    pub async fn get_suggestions(
        &self,
        query: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<AddressSuggestion>, SuggestError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.provider.get_suggestions(query, options).await
    }
}
