//! HTTP client shared by every resolver that queries a provider API

use crate::errors::{Result, StatusError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(format!("service-status-api/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StatusError::Http)?;

        Ok(Self {
            client,
            timeout: request_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and decode its JSON body into `T`.
    ///
    /// Fails on transport errors, on the timeout, on any non-2xx status and on
    /// bodies that do not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("Fetching upstream status from {}", url);

        let response = timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| StatusError::Timeout(self.timeout))?
            .map_err(StatusError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = timeout(self.timeout, response.text())
            .await
            .map_err(|_| StatusError::Timeout(self.timeout))?
            .map_err(StatusError::Http)?;

        Ok(serde_json::from_str(&body)?)
    }
}
