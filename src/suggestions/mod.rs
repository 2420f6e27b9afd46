//! Normalized address suggestion model
//!
//! Every provider maps its own response format onto these types.

mod types;

pub use types::*;
