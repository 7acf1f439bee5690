use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use crate::error::{LauncherError, Result};
use crate::updater::{LauncherRelease, ReleaseAsset, ReleaseSource};

use super::types::GitHubRelease;

/// Looks up the latest launcher release of a GitHub repository.
#[derive(Clone)]
pub struct GitHubReleaseSource {
    /// HTTP client
    client: Client,
    /// Base URL for GitHub API
    api_url: Url,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

impl GitHubReleaseSource {
    /// Create a new release source.
    ///
    /// # Arguments
    ///
    /// * `api_url` - GitHub API base URL (e.g., "https://api.github.com")
    /// * `repository` - Repository path in format "owner/repo"
    /// * `client` - HTTP client to issue requests with
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the repository path is
    /// not of the form "owner/repo".
    pub fn new(api_url: &str, repository: &str, client: Client) -> Result<Self> {
        let (owner, repo) = match repository.split('/').collect::<Vec<_>>().as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
                ((*owner).to_string(), (*repo).to_string())
            }
            _ => {
                return Err(LauncherError::Config(format!(
                    "Repository must be in format 'owner/repo', got '{repository}'"
                )))
            }
        };

        let mut api_url = Url::parse(api_url)
            .map_err(|e| LauncherError::Config(format!("Invalid GitHub API URL: {e}")))?;
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(Self {
            client,
            api_url,
            owner,
            repo,
        })
    }

    fn latest_release_url(&self) -> Result<Url> {
        Ok(self
            .api_url
            .join(&format!("repos/{}/{}/releases/latest", self.owner, self.repo))?)
    }

    async fn fetch_latest(&self) -> Result<GitHubRelease> {
        let url = self.latest_release_url()?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/vnd.github+json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LauncherError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn latest_release(&self) -> Option<LauncherRelease> {
        let release = match self.fetch_latest().await {
            Ok(release) => release,
            Err(e) => {
                warn!(
                    "Could not fetch latest release of {}/{}: {e}",
                    self.owner, self.repo
                );
                return None;
            }
        };

        if release.draft || release.prerelease {
            debug!("Ignoring unpublished release {}", release.tag_name);
            return None;
        }

        Some(convert_release(release))
    }
}

fn convert_release(release: GitHubRelease) -> LauncherRelease {
    let assets = release
        .assets
        .into_iter()
        .filter_map(|asset| match Url::parse(&asset.browser_download_url) {
            Ok(download_url) => Some(ReleaseAsset {
                name: asset.name,
                download_url,
                size: asset.size,
            }),
            Err(e) => {
                debug!("Dropping asset '{}' with invalid URL: {e}", asset.name);
                None
            }
        })
        .collect();

    let name = release
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| release.tag_name.clone());

    LauncherRelease {
        name,
        changelog: release.body.unwrap_or_default(),
        page_url: release.html_url.and_then(|u| Url::parse(&u).ok()),
        published_at: release.published_at,
        assets,
        tag: release.tag_name,
    }
}
