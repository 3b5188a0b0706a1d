// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the provider device API.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::api::DeviceApi;
use crate::device::{Device, DeviceId, DeviceUpdate};
use crate::error::ClientError;

/// Configuration for the provider API client.
///
/// # Examples
///
/// ```
/// use metaltags::ApiConfig;
/// use std::time::Duration;
///
/// // Minimal configuration
/// let config = ApiConfig::new("https://api.provider.example", "token");
///
/// // With all options
/// let config = ApiConfig::new("https://api.provider.example", "token")
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("fleet-tagger/2.1");
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    token: String,
    timeout: Duration,
    user_agent: String,
}

impl ApiConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default user agent sent with every request.
    pub const DEFAULT_USER_AGENT: &str = concat!("metaltags/", env!("CARGO_PKG_VERSION"));

    /// Creates a configuration for the given API endpoint and auth token.
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<ApiClient, ClientError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(ClientError::Http)?;

        Ok(ApiClient {
            base_url: self.base_url,
            token: self.token,
            client,
        })
    }
}

/// HTTP client for the provider device API.
///
/// Authenticates every request with the `X-Auth-Token` header and exchanges
/// JSON bodies. Each call is an independent request: the client holds no
/// device state between calls.
///
/// # Examples
///
/// ```no_run
/// use metaltags::{ApiClient, ApiConfig, DeviceApi, DeviceId};
///
/// # async fn example() -> metaltags::Result<()> {
/// let client = ApiConfig::new("https://api.provider.example", "token").into_client()?;
/// let id: DeviceId = "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".parse().unwrap();
/// let device = client.get_device(&id).await?;
/// println!("{} has {} tags", device.hostname, device.tags.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: String,
    client: Client,
}

/// Error body returned by the provider on failed requests.
///
/// The API reports either a list under `errors` or a single `error` string
/// depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a device resource.
    fn device_url(&self, id: &DeviceId) -> String {
        format!("{}/devices/{id}", self.base_url)
    }

    /// Maps a response to a decoded device, or to the matching error.
    async fn read_device(&self, id: &DeviceId, response: Response) -> Result<Device, ClientError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::AuthenticationFailed);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(*id));
        }

        let body = response.text().await.map_err(ClientError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received API response");

        if !status.is_success() {
            let decoded: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let mut messages = decoded.errors;
            messages.extend(decoded.error);
            if messages.is_empty() && !body.trim().is_empty() {
                messages.push(body.trim().to_string());
            }
            return Err(ClientError::Api {
                status: status.as_u16(),
                messages,
            });
        }

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }
}

impl DeviceApi for ApiClient {
    async fn get_device(&self, id: &DeviceId) -> Result<Device, ClientError> {
        let url = self.device_url(id);

        tracing::debug!(url = %url, "Fetching device");

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .send()
            .await
            .map_err(ClientError::Http)?;

        self.read_device(id, response).await
    }

    async fn update_device(
        &self,
        id: &DeviceId,
        update: &DeviceUpdate,
    ) -> Result<Device, ClientError> {
        let url = self.device_url(id);

        tracing::debug!(url = %url, "Updating device");

        let response = self
            .client
            .put(&url)
            .header("X-Auth-Token", &self.token)
            .json(update)
            .send()
            .await
            .map_err(ClientError::Http)?;

        self.read_device(id, response).await
    }
}
