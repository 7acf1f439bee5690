use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{LauncherError, Result};

/// Best-effort JSON client for the Jenkins remote API.
///
/// [`JenkinsClient::request`] never fails: connection problems, timeouts,
/// non-success statuses and undecodable bodies all come back as `None`.
/// There are no retries here.
#[derive(Clone)]
pub struct JenkinsClient {
    client: Client,
}

impl JenkinsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and decode its body as `T`, or `None` on any failure.
    pub async fn request<T>(&self, url: &Url) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.try_request(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Jenkins request to '{url}' failed: {e}");
                None
            }
        }
    }

    async fn try_request<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
