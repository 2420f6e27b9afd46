//! Suggestion type definitions

use serde::{Deserialize, Serialize};

/// Default number of suggestions requested when no limit is given
pub const DEFAULT_LIMIT: u32 = 10;

/// Options for a suggestion request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionOptions {
    /// Maximum number of suggestions to return
    pub limit: Option<u32>,
}

impl SuggestionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective limit: the requested one if positive, otherwise the default
    pub fn resolved_limit(&self) -> u32 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }
}

/// A single normalized address suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSuggestion {
    /// Provider-assigned identifier, unique within one response only
    pub id: String,
    /// Full formatted address
    pub formatted_address: String,
    /// Address broken into parts
    pub components: AddressComponents,
    /// Geographic coordinates
    pub position: Position,
    /// Relevance of the suggestion (0-1)
    pub score: f64,
}

/// Structured parts of an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Suburb or locality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    /// City or municipality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_limit() {
        assert_eq!(SuggestionOptions::new().resolved_limit(), 10);
        assert_eq!(SuggestionOptions::new().with_limit(3).resolved_limit(), 3);
        assert_eq!(SuggestionOptions::new().with_limit(0).resolved_limit(), 10);
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let suggestion = AddressSuggestion {
            id: "1".to_string(),
            formatted_address: "123 Main St, Sydney NSW 2000, Australia".to_string(),
            components: AddressComponents {
                street_number: Some("123".to_string()),
                street: Some("Main St".to_string()),
                postal_code: Some("2000".to_string()),
                country: "Australia".to_string(),
                ..Default::default()
            },
            position: Position::new(-33.8688, 151.2093),
            score: 0.9,
        };

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(
            json["formattedAddress"],
            "123 Main St, Sydney NSW 2000, Australia"
        );
        assert_eq!(json["components"]["streetNumber"], "123");
        assert_eq!(json["components"]["postalCode"], "2000");
        assert!(json["components"].get("suburb").is_none());
        assert_eq!(json["position"]["lat"], -33.8688);
    }
}
