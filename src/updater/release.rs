use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use super::version::LauncherVersion;

/// A published launcher release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherRelease {
    /// Tag as published (e.g., "v4.2.0")
    pub tag: String,
    pub name: String,
    /// Release notes, usually markdown
    pub changelog: String,
    /// Human-facing release page
    pub page_url: Option<Url>,
    pub published_at: Option<DateTime<Utc>>,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: Url,
    pub size: u64,
}

impl LauncherRelease {
    /// The tag as a version, if it is one.
    pub fn version(&self) -> Option<LauncherVersion> {
        self.tag.parse().ok()
    }
}

/// Where the newest launcher release is looked up.
///
/// `None` covers both "nothing published" and "could not find out".
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn latest_release(&self) -> Option<LauncherRelease>;
}
