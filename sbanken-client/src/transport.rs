//! HTTP plumbing behind [`ApiConnection`](crate::ApiConnection).
//!
//! The [`Transport`] trait is the seam between request building/decoding and
//! the wire, so the connection can be exercised against canned responses.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{ApiConfig, Credentials};
use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One resource request, relative to the configured API base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub target: String,
    pub params: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(target: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            target: target.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn post(target: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            target: target.into(),
            params: Vec::new(),
            body: Some(body),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }
}

pub trait Transport: Send + Sync {
    /// Exchange client credentials for a bearer token.
    fn fetch_token(&self, credentials: &Credentials) -> impl Future<Output = Result<String>> + Send;

    /// Perform an authenticated request and return the raw response body.
    fn send(&self, token: &str, request: &ApiRequest) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

/// [`Transport`] backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }
}

impl Transport for HttpTransport {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<String> {
        debug!(url = %self.config.identity_url, "requesting token");

        let resp = self
            .client
            .post(&self.config.identity_url)
            .basic_auth(
                &credentials.apikey,
                Some(urlencoding::encode(&credentials.secret)),
            )
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(ClientError::Credentials { status });
        }
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            return Err(ClientError::Token(format!("{status} {txt}")));
        }

        let body = resp.bytes().await?;
        let token: TokenResponse =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                target: self.config.identity_url.clone(),
                source,
            })?;

        if token.access_token.is_empty() {
            warn!("received empty token from identity server");
            return Err(ClientError::Token("empty access token".to_string()));
        }

        Ok(token.access_token)
    }

    async fn send(&self, token: &str, request: &ApiRequest) -> Result<Vec<u8>> {
        let url = self.config.resource_url(&request.target);
        debug!(method = ?request.method, target = %request.target, params = ?request.params, "requesting");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        builder = builder.bearer_auth(token);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        if status.as_u16() > 399 {
            return Err(ClientError::Status {
                status,
                target: request.target.clone(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::get("Transactions/abc")
            .param("startDate", "2021-01-01")
            .param("length", "1000");

        assert_eq!(req.method, Method::Get);
        assert_eq!(
            req.params,
            vec![
                ("startDate".to_string(), "2021-01-01".to_string()),
                ("length".to_string(), "1000".to_string()),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn test_token_response_tolerates_missing_field() {
        let t: TokenResponse = serde_json::from_str(r#"{"expires_in": 3600}"#).unwrap();
        assert!(t.access_token.is_empty());
    }
}
