//! Homework review API client.
//!
//! A single endpoint is used:
//! `GET <endpoint>?from_date=<unix seconds>` with `Authorization: OAuth <token>`,
//! answering with the status page decoded into [`StatusPage`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, Request};
use tracing::{debug, warn};

use crate::domain::{Cursor, StatusPage};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::StatusSource;

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client with default HTTP settings.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let http = HttpClient::builder()
            .timeout(config.polling.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.credentials.api_token.clone(),
        }
    }

    fn request(&self, from: Cursor) -> reqwest::Result<Request> {
        self.http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from.timestamp())])
            .build()
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn statuses_since(&self, from: Cursor) -> Result<StatusPage> {
        let request = self.request(from)?;
        debug!(url = %request.url(), "Fetching homework statuses");

        let page: StatusPage = self
            .http
            .execute(request)
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(
            count = page.homeworks.len(),
            current_date = ?page.current_date,
            "Fetched homework statuses"
        );
        Ok(page)
    }

    fn source_name(&self) -> &'static str {
        "Practicum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn request_carries_cursor_and_token() {
        let client = PracticumClient::new("https://api.example.com/statuses/", "abc123");
        let request = client.request(Cursor::new(1_700_000_000)).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/statuses/?from_date=1700000000"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "OAuth abc123"
        );
    }

    #[test]
    fn invalid_endpoint_is_a_transport_error() {
        let client = PracticumClient::new("not a url", "abc123");
        assert!(client.request(Cursor::new(0)).is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let client = PracticumClient::new("http://127.0.0.1:9/statuses/", "abc123");
        let result = client.statuses_since(Cursor::new(0)).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
