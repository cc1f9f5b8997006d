//! Shared HTTP client
//!
//! Wraps a `reqwest::Client` with the backend base URL and bearer token, maps
//! non-2xx responses to [`ApiError::Server`] and logs every request.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::ApiError;
use crate::core::Config;

/// Message shown when a failed response carries no `message` field
pub const FALLBACK_MESSAGE: &str = "Request failed. Please try again.";

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    authenticated: bool,
}

impl HttpClient {
    /// Build a client for `base_url`, attaching `token` as a bearer header
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Unsupported(
                "No server URL configured. Run `stockroom config set-server <url>`.".to_string(),
            ));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        if let Some(token) = token {
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::Auth(format!("invalid token: {}", e)))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            authenticated: token.is_some(),
        })
    }

    /// Build a client from the resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.server, config.token(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is attached to requests
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with query parameters
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        let req = self.http.get(&url).query(query);
        self.execute(Method::GET, &url, req).await
    }

    /// Send a JSON body with `method` (POST/PUT)
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        let mut req = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(method, &url, req).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        let req = self.http.delete(&url);
        self.execute(Method::DELETE, &url, req).await
    }

    async fn execute(&self, method: Method, url: &str, req: RequestBuilder) -> Result<Value, ApiError> {
        let started = std::time::Instant::now();
        let resp = req.send().await.map_err(|e| {
            debug!(%method, url, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(
            %method,
            url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request complete"
        );

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

/// Extract the `message` field from an error body, or the fallback text
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_reads_message_field() {
        assert_eq!(
            error_message(r#"{"message":"Sản phẩm không tồn tại","status":404}"#),
            "Sản phẩm không tồn tại"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(""), FALLBACK_MESSAGE);
        assert_eq!(error_message("<html>502</html>"), FALLBACK_MESSAGE);
        assert_eq!(error_message(r#"{"error":"x"}"#), FALLBACK_MESSAGE);
        assert_eq!(error_message(r#"{"message":"  "}"#), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_new_requires_server() {
        let err = HttpClient::new("  ", None, Duration::from_secs(1)).unwrap_err();
        assert!(err.to_string().contains("No server URL"));
    }

    #[test]
    fn test_url_joins_paths() {
        let client = HttpClient::new("http://localhost:8080/api/v1/", None, Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(client.url("/products"), "http://localhost:8080/api/v1/products");
        assert_eq!(client.url("products/delete/3"), "http://localhost:8080/api/v1/products/delete/3");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_blank_token_is_not_attached() {
        let client = HttpClient::new("http://x", Some("  "), Duration::from_secs(1)).unwrap();
        assert!(!client.is_authenticated());
        let client = HttpClient::new("http://x", Some("jwt"), Duration::from_secs(1)).unwrap();
        assert!(client.is_authenticated());
    }
}
