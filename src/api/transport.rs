//! Transport seam between resource bindings and the network.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::config::ClientConfig;

/// One REST call, described independently of the HTTP client.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes API requests.
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// an in-memory fake to drive stores without a server.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// HTTP transport over a shared `reqwest` client.
///
/// Joins the configured base URL, attaches the bearer token when one is
/// configured, and classifies failures into the [`ApiError`] taxonomy.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(request.method, url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Connection { source: e })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Connection { source: e })?;

        if !status.is_success() {
            return Err(ApiError::from_error_body(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(ApiError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builders_set_method_and_path() {
        let request = ApiRequest::patch("/api/suppliers/4/suspend");
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.path, "/api/suppliers/4/suspend");
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn with_query_and_body_attach() {
        let request = ApiRequest::post("/api/custom-orders")
            .with_query(vec![("reason", "fora de linha".to_string())])
            .with_body(serde_json::json!({"quantity": 1}));
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.body.unwrap()["quantity"], 1);
    }
}
