//! LibreChat API Client
//!
//! Thin HTTP client for the configured LibreChat server. The shell only uses
//! the health probe; heavier API surfaces (auth, conversations) belong to the
//! embedded web client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::error::{Error, Result};

/// HTTP client for a LibreChat server
#[derive(Clone)]
pub struct LibreChatApi {
    http: Client,
    base_url: Url,
    default_headers: HeaderMap,
    auth_token: Option<String>,
}

impl LibreChatApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        let base_url = Url::parse(base_url).map_err(|err| Error::Invalid {
            message: format!("invalid server url: {err}"),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http,
            base_url,
            default_headers: headers,
            auth_token: None,
        })
    }

    /// Attach a bearer token to subsequent requests
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let trimmed = path.trim_start_matches('/');
        self.base_url.join(trimmed).map_err(|err| Error::Invalid {
            message: format!("invalid endpoint path {path:?}: {err}"),
        })
    }

    /// Probe the server's health endpoint, returning the response body
    pub async fn health(&self) -> Result<String> {
        let url = self.endpoint("/health")?;
        let mut request = self.http.get(url).headers(self.default_headers.clone());
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let api = LibreChatApi::new("http://localhost:3080/").expect("client");
        let url = api.endpoint("/health").expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:3080/health");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(LibreChatApi::new("not a url").is_err());
    }
}
