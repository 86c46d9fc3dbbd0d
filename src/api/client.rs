//! HTTP client for the Startmining market-data API.

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{ApiError, ApiResult};
use super::request::UpstreamRequest;
use crate::core::config::ApiConfig;

/// Header carrying the API key on every upstream request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Minimal JSON-over-HTTP client bound to a base URL and an optional API key.
///
/// The client is cheap to clone and holds no per-call state, so one instance
/// is shared by every tool call.
#[derive(Debug, Clone)]
pub struct MiningApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MiningApiClient {
    /// Create a new client from the API configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("startmining-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a prebuilt upstream request.
    ///
    /// The URL is the base URL followed by the request's path and encoded
    /// query string.
    pub async fn send(&self, request: &UpstreamRequest) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, request.path_and_query()?);
        debug!(method = request.method(), url = %url, "Upstream request");

        let builder = match request {
            UpstreamRequest::Get(_) => self.http.get(&url),
            UpstreamRequest::Post { body, .. } => self.http.post(&url).json(body),
        };

        let response = self.authorized(builder).send().await?;
        Self::parse(response).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    async fn parse(response: Response) -> ApiResult<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "Upstream request failed");
            return Err(ApiError::status(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_client(base_url: &str, api_key: Option<&str>) -> MiningApiClient {
        MiningApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = create_client("https://mining-api.example.com/", None);
        assert_eq!(client.base_url(), "https://mining-api.example.com");
    }

    #[tokio::test]
    async fn test_get_sends_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/market/current"))
            .and(header(API_KEY_HEADER, "sm_test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"btc": {"price_usd": 97000}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), Some("sm_test_key"));
        let value = client.send(&UpstreamRequest::get("/market/current").into()).await.unwrap();
        assert_eq!(value["btc"]["price_usd"], 97000);
    }

    #[tokio::test]
    async fn test_get_without_key_omits_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/network/mempool"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), None);
        client
            .send(&UpstreamRequest::get("/network/mempool").into())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("x-api-key"));
    }

    #[tokio::test]
    async fn test_send_appends_encoded_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/network/blocks"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), None);
        let request = UpstreamRequest::get("/network/blocks").query("limit", 5);
        client.send(&request.into()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("limit=5"));
    }

    #[tokio::test]
    async fn test_send_post_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculator/profitability"))
            .and(header(API_KEY_HEADER, "sm_test_key"))
            .and(body_json(json!({"hashrate_th": 200, "days": 30})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"profit_usd": 12.5})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), Some("sm_test_key"));
        let request = UpstreamRequest::post(
            "/calculator/profitability",
            json!({"hashrate_th": 200, "days": 30}),
        );
        let value = client.send(&request).await.unwrap();
        assert_eq!(value["profit_usd"], 12.5);
    }

    #[tokio::test]
    async fn test_error_on_500_without_retry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/market/difficulty"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), None);
        let err = client
            .send(&UpstreamRequest::get("/market/difficulty").into())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_error_on_invalid_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/market/halving"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), None);
        let err = client
            .send(&UpstreamRequest::get("/market/halving").into())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn test_send_dispatches_on_method() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calculator/breakeven"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"breakeven_usd": 41000})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server.uri(), None);
        let request = UpstreamRequest::get("/calculator/breakeven").query("hashrate_th", 100);
        let value = client.send(&request.into()).await.unwrap();
        assert_eq!(value["breakeven_usd"], 41000);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("hashrate_th=100"));
    }
}
