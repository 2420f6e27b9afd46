//! HTTP networking module
//!
//! Provides the HTTP client providers use to reach their backing services.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{SearchRequest, SearchResponse};
