//! Outbound request and response types

use std::collections::HashMap;

/// GET request relative to a client's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Path appended to the base URL, already percent-encoded
    pub path: String,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl SearchRequest {
    /// Create a GET request for a path
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: HashMap::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }
}

/// Successful HTTP response
#[derive(Debug)]
pub struct SearchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response URL (after redirects)
    pub url: String,
    /// Response body as text
    pub text: String,
}

impl SearchResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = SearchRequest::get("/search/x.json")
            .param("limit", 5)
            .param("typeahead", true);

        assert_eq!(request.path, "/search/x.json");
        assert_eq!(request.params.get("limit").map(String::as_str), Some("5"));
        assert_eq!(
            request.params.get("typeahead").map(String::as_str),
            Some("true")
        );
    }
}
