//! Authenticated HTTP transport
//!
//! A thin layer over reqwest that builds bearer-authenticated requests
//! against the configured backend and maps non-success statuses to
//! [`AppError::RequestFailed`]. Services depend on the [`BookmarkHttpClient`]
//! trait so the transport can be swapped out in tests.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, Operation};
use crate::session::interface::IdentityToken;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Interface for making authenticated HTTP requests to the backend
#[async_trait]
pub trait BookmarkHttpClient: Send + Sync {
    /// Issues a single request and deserializes the JSON response body
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the configured base URL
    /// * `token` - Bearer credential attached to the request
    /// * `body` - Optional JSON body
    /// * `operation` - Logical operation tag carried into request failures
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        token: &IdentityToken,
        body: Option<&B>,
        operation: Operation,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;
}

/// Default transport backed by a reqwest client
pub struct BookmarkHttpClientImpl {
    config: Arc<Config>,
    client: Client,
}

impl BookmarkHttpClientImpl {
    /// Creates a transport using the timeout from the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl BookmarkHttpClient for BookmarkHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        token: &IdentityToken,
        body: Option<&B>,
        operation: Operation,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token.secret()))
            .header("Accept", "application/json");

        // reqwest sets Content-Type: application/json alongside the body
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("response status: {}", status);

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!(
                "{} request failed with status {}: {}",
                operation, status, body_text
            );
            return Err(AppError::RequestFailed { operation, status });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
