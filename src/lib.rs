//! Address-Parser-RS: address autocomplete backed by a geocoding service
//!
//! Turns a partial address into a normalized list of suggestions. The
//! [`AddressParser`] facade forwards queries to a pluggable
//! [`AddressProvider`]; the bundled provider queries the TomTom Search API
//! and only returns Australian addresses.

pub mod config;
pub mod error;
pub mod network;
pub mod parser;
pub mod providers;
pub mod suggestions;

pub use config::{AddressParserConfig, ParserOptions, Settings};
pub use error::{ConfigError, Error, SuggestError};
pub use parser::AddressParser;
pub use providers::{AddressProvider, ProviderConfig, ProviderFactory, ProviderKind};
pub use suggestions::{AddressComponents, AddressSuggestion, Position, SuggestionOptions};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
