//! Async HTTP client for the Payrix REST API.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::request::OutboundRequest;
use crate::core::config::PayrixConfig;
use crate::core::{Error, Result};

/// Failure of a single outbound call.
///
/// The display strings are what the tool returns to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, bad URL).
    #[error("Error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest keeps the useful detail (bad URL, refused connection) in the source chain
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ApiError::Transport(message)
    }
}

/// Client bound to one Payrix endpoint.
///
/// Cheap to clone; the base URL and credential never change after startup.
#[derive(Debug, Clone)]
pub struct PayrixClient {
    http: reqwest::Client,
    base_url: String,
}

impl PayrixClient {
    /// Build a client carrying the `APIKey`, `Accept` and `Content-Type`
    /// headers on every request.
    pub fn new(config: &PayrixConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut api_key = HeaderValue::from_str(&config.api_token)
            .map_err(|_| Error::config("API_TOKEN is not a valid header value"))?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static("apikey"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET. No retries.
    #[instrument(skip_all, fields(path = %request.path))]
    pub async fn get(&self, request: &OutboundRequest) -> std::result::Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self.http.get(&url).query(&request.query_params);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(search) = request.headers.get(super::request::SEARCH_HEADER) {
            debug!("search header: {}", search);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Payrix API returned {} for {}", status, request.path);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Payrix API response: {} bytes", body.len());
        Ok(body)
    }

    /// [`get`](Self::get) with failures rendered as their display strings.
    pub async fn get_text(&self, request: &OutboundRequest) -> String {
        self.get(request).await.unwrap_or_else(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::payrix::request::{ToolRequest, translate};
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(url: &str) -> PayrixConfig {
        PayrixConfig {
            api_url: url.to_string(),
            api_token: "test-token".to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_get_sends_headers_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/merchants"))
            .and(header("APIKey", "test-token"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .and(header("search", "status[equals]=1"))
            .and(query_param("page[number]", "2"))
            .and(query_param_is_missing("page[limit]"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":"1"}]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = PayrixClient::new(&config_for(&server.uri())).unwrap();
        let request = translate(
            &ToolRequest::new("/merchants")
                .with_filter(Some("status[equals]=1".into()))
                .with_page(Some(2), None),
        );
        let body = tokio_test::assert_ok!(client.get(&request).await);
        assert_eq!(body, r#"{"data":[{"id":"1"}]}"#);
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let client = PayrixClient::new(&config_for(&server.uri())).unwrap();
        let text = client
            .get_text(&translate(&ToolRequest::new("/merchants/{id}").with_id("x")))
            .await;
        assert_eq!(text, "API Error: 404 - missing");
    }

    #[tokio::test]
    async fn test_unconfigured_url_is_transport_error() {
        let client = PayrixClient::new(&PayrixConfig::default()).unwrap();
        let text = client.get_text(&translate(&ToolRequest::new("/txns"))).await;
        assert!(text.starts_with("Error: "), "got: {}", text);
    }

    #[test]
    fn test_invalid_token_rejected_at_startup() {
        let config = PayrixConfig {
            api_token: "bad\ntoken".to_string(),
            ..Default::default()
        };
        assert!(PayrixClient::new(&config).is_err());
    }
}
