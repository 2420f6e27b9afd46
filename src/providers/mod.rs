//! Address provider module
//!
//! Defines the AddressProvider trait, its implementations and the factory
//! that builds them from configuration.

mod factory;
mod traits;

// Provider implementations
pub mod tomtom;

pub use factory::{ProviderConfig, ProviderFactory, ProviderKind};
pub use traits::*;
