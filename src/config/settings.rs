//! Settings structures for address-parser-rs configuration

use crate::error::ConfigError;
use crate::providers::tomtom::TomTomConfig;
use crate::suggestions::SuggestionOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
    pub provider: ProviderSettings,
    pub suggestions: SuggestionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            provider: ProviderSettings::default(),
            suggestions: SuggestionSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables (ADDRESS_PARSER_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ADDRESS_PARSER_PROVIDER") {
            self.provider.provider_type = val;
        }
        if let Some(val) = var("ADDRESS_PARSER_API_KEY") {
            self.provider.api_key = Some(val);
        }
        if let Some(val) = var("ADDRESS_PARSER_BASE_URL") {
            self.provider.base_url = Some(val);
        }
        if let Some(val) = var("ADDRESS_PARSER_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.provider.timeout_ms = Some(ms);
            }
        }
        if let Some(val) = var("ADDRESS_PARSER_LIMIT") {
            if let Ok(limit) = val.parse() {
                self.suggestions.limit = Some(limit);
            }
        }
        if let Some(val) = var("ADDRESS_PARSER_LOG_LEVEL") {
            self.log_level = val;
        }
    }
}

/// Provider selection and its untyped configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider type, e.g. "tomtom"
    #[serde(rename = "type")]
    pub provider_type: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider_type: "tomtom".to_string(),
            api_key: None,
            base_url: None,
            timeout_ms: None,
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("provider_type", &self.provider_type)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Default suggestion options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub limit: Option<u32>,
}

impl SuggestionSettings {
    pub fn options(&self) -> SuggestionOptions {
        SuggestionOptions { limit: self.limit }
    }
}

/// Configuration for constructing an `AddressParser` directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParserConfig {
    pub api_key: String,
    pub options: Option<ParserOptions>,
}

/// Optional overrides for the default provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    pub base_url: Option<String>,
    pub timeout_millis: Option<u64>,
}

impl AddressParserConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl From<AddressParserConfig> for TomTomConfig {
    fn from(config: AddressParserConfig) -> Self {
        let options = config.options.unwrap_or_default();
        TomTomConfig {
            api_key: config.api_key,
            base_url: options.base_url,
            timeout_ms: options.timeout_millis,
        }
    }
}
