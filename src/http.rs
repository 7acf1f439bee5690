use std::time::Duration;

use reqwest::Client;

use crate::config::HttpConfig;
use crate::error::{LauncherError, Result};

/// Builds the HTTP client shared by the remote providers.
///
/// Connect and overall request timeouts bound every network call; nothing in
/// the discovery or update paths adds its own cancellation on top.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| LauncherError::Config(format!("Failed to create HTTP client: {e}")))
}
