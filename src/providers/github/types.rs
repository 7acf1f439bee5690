use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub release as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    /// Git tag of the release (e.g., "v4.2.0")
    pub tag_name: String,
    /// Display title, may be missing or empty
    pub name: Option<String>,
    /// Release notes in markdown
    pub body: Option<String>,
    /// Web page of the release
    pub html_url: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// Downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}
