//! TomTom Search API provider

use super::traits::AddressProvider;
use crate::error::{ConfigError, SuggestError};
use crate::network::{HttpClient, SearchRequest};
use crate::suggestions::{AddressComponents, AddressSuggestion, Position, SuggestionOptions};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default TomTom Search API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tomtom.com/search/2";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Only addresses in this country are requested and returned
pub const COUNTRY_CODE: &str = "AU";

/// TomTom provider configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomTomConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl TomTomConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout_ms: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Base URL, falling back to the public endpoint
    pub fn effective_base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL,
        }
    }

    /// Timeout, falling back to the default when unset or zero
    pub fn effective_timeout(&self) -> Duration {
        match self.timeout_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl fmt::Debug for TomTomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomTomConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Raw search response from the TomTom API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomTomResponse {
    #[serde(default)]
    pub summary: Option<TomTomSummary>,
    #[serde(default)]
    pub results: Option<Vec<TomTomResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TomTomSummary {
    pub query: Option<String>,
    pub query_type: Option<String>,
    pub query_time: Option<u64>,
    pub num_results: Option<u32>,
    pub offset: Option<u32>,
    pub total_results: Option<u32>,
    pub fuzzy_level: Option<u32>,
}

/// Individual result from the TomTom API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomTomResult {
    #[serde(rename = "type", default)]
    pub result_type: Option<String>,
    pub id: String,
    pub score: f64,
    pub address: TomTomAddress,
    pub position: TomTomPosition,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomTomAddress {
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub municipality_subdivision: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub country_secondary_subdivision: Option<String>,
    #[serde(default)]
    pub country_subdivision: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country_code: String,
    pub country: String,
    pub freeform_address: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TomTomPosition {
    pub lat: f64,
    pub lon: f64,
}

impl From<TomTomResult> for AddressSuggestion {
    fn from(result: TomTomResult) -> Self {
        let address = result.address;

        AddressSuggestion {
            id: result.id,
            formatted_address: address.freeform_address,
            components: AddressComponents {
                street_number: address.street_number,
                street: address.street_name,
                suburb: address.municipality_subdivision,
                municipality: address.municipality,
                state: address.country_subdivision,
                postal_code: address.postal_code,
                country: address.country,
            },
            position: Position::new(result.position.lat, result.position.lon),
            score: result.score,
        }
    }
}

/// Address provider backed by the TomTom Search API
pub struct TomTom {
    client: HttpClient,
    api_key: String,
}

impl TomTom {
    pub const NAME: &'static str = "TomTom";

    pub fn new(config: TomTomConfig) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey {
                provider: Self::NAME.to_string(),
            });
        }

        let client = HttpClient::new(config.effective_base_url(), config.effective_timeout())?;
        info!(
            "Created {} provider ({}, timeout {:?})",
            Self::NAME,
            client.base_url(),
            client.timeout()
        );

        Ok(Self {
            client,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.client.timeout()
    }

    /// Build the fuzzy search request for a query
    pub fn build_request(&self, query: &str, options: &SuggestionOptions) -> SearchRequest {
        let path = format!("/search/{}.json", urlencoding::encode(query));

        SearchRequest::get(path)
            .param("key", &self.api_key)
            .param("limit", options.resolved_limit())
            .param("countrySet", COUNTRY_CODE)
            .param("typeahead", true)
            .param("idxSet", "Geo")
    }

    /// Decode a response body into suggestions
    pub fn parse_response(&self, body: &str) -> Result<Vec<AddressSuggestion>, SuggestError> {
        let response: TomTomResponse = serde_json::from_str(body)?;
        Ok(Self::transform_results(response.results.unwrap_or_default()))
    }

    fn transform_results(results: Vec<TomTomResult>) -> Vec<AddressSuggestion> {
        // countrySet already restricts the search server-side; results are
        // filtered again since that restriction is not guaranteed.
        results
            .into_iter()
            .filter(|result| {
                let keep = result.address.country_code == COUNTRY_CODE;
                if !keep {
                    debug!(
                        "Dropping {} result {} from {}",
                        Self::NAME,
                        result.id,
                        result.address.country_code
                    );
                }
                keep
            })
            .map(AddressSuggestion::from)
            .collect()
    }
}

impl fmt::Debug for TomTom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomTom")
            .field("base_url", &self.client.base_url())
            .field("timeout", &self.client.timeout())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AddressProvider for TomTom {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn get_suggestions(
        &self,
        query: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<AddressSuggestion>, SuggestError> {
        let request = self.build_request(query, options);
        debug!(
            "{} search {} (limit {})",
            Self::NAME,
            request.path,
            options.resolved_limit()
        );

        let response = self.client.execute(request).await.map_err(|e| {
            // The request URL carries the API key
            let e = e.without_url();
            warn!("{} request failed: {}", Self::NAME, e);
            SuggestError::transport(Self::NAME, e)
        })?;

        self.parse_response(&response.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-api-key";

    fn sydney() -> serde_json::Value {
        json!({
            "id": "1",
            "score": 0.9,
            "address": {
                "streetNumber": "123",
                "streetName": "Main St",
                "municipalitySubdivision": "CBD",
                "municipality": "Sydney",
                "countrySubdivision": "NSW",
                "postalCode": "2000",
                "countryCode": "AU",
                "country": "Australia",
                "freeformAddress": "123 Main St, Sydney NSW 2000, Australia"
            },
            "position": { "lat": -33.8688, "lon": 151.2093 }
        })
    }

    fn auckland() -> serde_json::Value {
        json!({
            "id": "2",
            "score": 0.8,
            "address": {
                "streetNumber": "123",
                "streetName": "Main St",
                "municipality": "Auckland",
                "countrySubdivision": "Auckland",
                "postalCode": "1010",
                "countryCode": "NZ",
                "country": "New Zealand",
                "freeformAddress": "123 Main St, Auckland 1010, New Zealand"
            },
            "position": { "lat": -36.8485, "lon": 174.7633 }
        })
    }

    fn body(results: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "summary": {
                "query": "123 main st",
                "queryType": "NON_NEAR",
                "queryTime": 10,
                "numResults": results.len(),
                "offset": 0,
                "totalResults": results.len(),
                "fuzzyLevel": 1
            },
            "results": results
        })
    }

    fn provider_for(server: &MockServer) -> TomTom {
        TomTom::new(TomTomConfig::new(API_KEY).with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn test_default_config() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
        assert_eq!(provider.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_custom_config() {
        let config = TomTomConfig::new(API_KEY)
            .with_base_url("https://custom-api.example.com")
            .with_timeout_ms(10000);
        let provider = TomTom::new(config).unwrap();

        assert_eq!(provider.base_url(), "https://custom-api.example.com");
        assert_eq!(provider.timeout(), Duration::from_millis(10000));
    }

    #[test]
    fn test_missing_api_key() {
        let err = TomTom::new(TomTomConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = TomTomConfig::new("secret-key");
        assert!(!format!("{:?}", config).contains("secret-key"));
    }

    #[test]
    fn test_build_request() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let request = provider.build_request("123 Main St", &SuggestionOptions::new());
        let param = |k: &str| request.params.get(k).map(String::as_str);

        assert_eq!(request.path, "/search/123%20Main%20St.json");
        assert_eq!(param("key"), Some(API_KEY));
        assert_eq!(param("limit"), Some("10"));
        assert_eq!(param("countrySet"), Some("AU"));
        assert_eq!(param("typeahead"), Some("true"));
        assert_eq!(param("idxSet"), Some("Geo"));
    }

    #[test]
    fn test_build_request_limit() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let request = provider.build_request("Melbourne", &SuggestionOptions::new().with_limit(5));
        assert_eq!(request.params.get("limit").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_query_is_encoded() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let request =
            provider.build_request("Complex Query & Special Chars", &SuggestionOptions::new());
        assert_eq!(
            request.path,
            "/search/Complex%20Query%20%26%20Special%20Chars.json"
        );

        let request = provider.build_request("1/23 George St?", &SuggestionOptions::new());
        assert_eq!(request.path, "/search/1%2F23%20George%20St%3F.json");
    }

    #[test]
    fn test_parse_maps_all_fields() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let suggestions = provider
            .parse_response(&body(vec![sydney()]).to_string())
            .unwrap();

        assert_eq!(
            suggestions,
            vec![AddressSuggestion {
                id: "1".to_string(),
                formatted_address: "123 Main St, Sydney NSW 2000, Australia".to_string(),
                components: AddressComponents {
                    street_number: Some("123".to_string()),
                    street: Some("Main St".to_string()),
                    suburb: Some("CBD".to_string()),
                    municipality: Some("Sydney".to_string()),
                    state: Some("NSW".to_string()),
                    postal_code: Some("2000".to_string()),
                    country: "Australia".to_string(),
                },
                position: Position::new(-33.8688, 151.2093),
                score: 0.9,
            }]
        );
    }

    #[test]
    fn test_parse_filters_other_countries() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let mut second = sydney();
        second["id"] = json!("3");
        let suggestions = provider
            .parse_response(&body(vec![sydney(), auckland(), second]).to_string())
            .unwrap();

        let ids: Vec<_> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(suggestions
            .iter()
            .all(|s| s.components.country == "Australia"));
    }

    #[test]
    fn test_parse_missing_or_empty_results() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        assert!(provider.parse_response("{}").unwrap().is_empty());
        assert!(provider
            .parse_response(r#"{"results": null}"#)
            .unwrap()
            .is_empty());
        assert!(provider
            .parse_response(&body(vec![]).to_string())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_invalid_body_is_not_transport() {
        let provider = TomTom::new(TomTomConfig::new(API_KEY)).unwrap();
        let err = provider.parse_response("<html>").unwrap_err();
        assert!(matches!(err, SuggestError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_suggestions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/123%20Main%20St.json"))
            .and(query_param("key", API_KEY))
            .and(query_param("limit", "10"))
            .and(query_param("countrySet", "AU"))
            .and(query_param("typeahead", "true"))
            .and(query_param("idxSet", "Geo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![sydney(), auckland()])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let suggestions = provider
            .get_suggestions("123 Main St", &SuggestionOptions::new())
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].components.country, "Australia");
    }

    #[tokio::test]
    async fn test_get_suggestions_with_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/Melbourne.json"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let suggestions = provider
            .get_suggestions("Melbourne", &SuggestionOptions::new().with_limit(5))
            .await
            .unwrap();

        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_encoded_query_reaches_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/Complex%20Query%20%26%20Special%20Chars.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        provider
            .get_suggestions("Complex Query & Special Chars", &SuggestionOptions::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider
            .get_suggestions("123 Main St", &SuggestionOptions::new())
            .await
            .unwrap_err();

        assert!(err.is_transport());
        let message = err.to_string();
        assert!(message.starts_with("TomTom API error: "));
        assert!(!message.contains(API_KEY));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body(vec![]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = TomTomConfig::new(API_KEY)
            .with_base_url(server.uri())
            .with_timeout_ms(50);
        let provider = TomTom::new(config).unwrap();
        let err = provider
            .get_suggestions("123 Main St", &SuggestionOptions::new())
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_malformed_body_propagates_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider
            .get_suggestions("123 Main St", &SuggestionOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, SuggestError::Decode(_)));
    }
}
