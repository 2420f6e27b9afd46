//! Configuration module for address-parser-rs
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are plain values passed to constructors; there is no global
//! settings instance.

mod settings;

pub use settings::*;
