//! HTTP service layer: thin async wrappers around the job-match REST
//! backend, grouped by the page area that calls them.
//!
//! Every request goes through one [`ApiClient`]. Auth is a bearer token
//! passed per call and never stored in the client; failures map onto
//! [`ServiceError`](crate::errors::ServiceError) and are never retried
//! here.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ServiceError;

pub mod auth;
pub mod candidate;
pub mod employer;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP client for all backend calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiClient {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        debug!("{method} {path}");
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and maps non-2xx statuses onto the error
    /// taxonomy, mining the body for the backend's message.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ServiceError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!("Backend returned {status}: {message}");
        Err(match status.as_u16() {
            401 | 403 => ServiceError::AuthRejected {
                status: status.as_u16(),
                message,
            },
            404 => ServiceError::NotFound(message),
            other => ServiceError::Api {
                status: other,
                message,
            },
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ServiceError> {
        let response = self.send(self.request(Method::GET, path, Some(token))).await?;
        Ok(response.json().await?)
    }

    /// Sends a JSON body and decodes a JSON response. `token` is `None`
    /// only for the unauthenticated auth endpoints.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path, token).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST with no body, for action endpoints like applying to a job.
    pub(crate) async fn post_empty(&self, token: &str, path: &str) -> Result<(), ServiceError> {
        self.send(self.request(Method::POST, path, Some(token))).await?;
        Ok(())
    }

    /// DELETE, discarding whatever body the backend attaches to its 2xx.
    pub(crate) async fn delete(&self, token: &str, path: &str) -> Result<(), ServiceError> {
        self.send(self.request(Method::DELETE, path, Some(token))).await?;
        Ok(())
    }
}

/// Pulls a human-readable message out of a backend error body. The views
/// are inconsistent about the key: `detail`, `Error`, and `error` all
/// appear. Falls back to the raw body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "Error", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    body.to_string()
}
