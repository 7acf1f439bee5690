use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde_json::Value;
use url::Url;

use crate::error::{LauncherError, Result};
use crate::model::{Channel, GameIdentifier, GameRelease, Profile, ReleaseMetadata};
use crate::repository::ReleaseRepository;

use super::client::JenkinsClient;
use super::types::{ApiResult, Build};

const TREE_PROJECTION: &str = "builds[number,url,timestamp,result,artifacts[relativePath]]";

/// Maps one Jenkins job onto a list of [`GameRelease`]s.
///
/// The job publishes the game as the first artifact of every build and has no
/// changelog information, so releases come back with an empty changelog.
/// Channel and profile are fixed per adapter; they are not read from the builds.
pub struct LegacyJenkinsAdapter {
    base_url: String,
    job: String,
    channel: Channel,
    profile: Profile,
    limit: usize,
    client: JenkinsClient,
}

impl LegacyJenkinsAdapter {
    /// Creates an adapter for `job` on the Jenkins instance at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Jenkins root (e.g., <http://jenkins.terasology.org>)
    /// * `job` - Job name (e.g., "DistroOmega")
    /// * `channel` - Channel every release of this job belongs to
    /// * `profile` - Profile every release of this job belongs to
    /// * `limit` - Maximum number of most-recent builds to request
    /// * `client` - Shared Jenkins client
    pub fn new(
        base_url: impl Into<String>,
        job: impl Into<String>,
        channel: Channel,
        profile: Profile,
        limit: usize,
        client: JenkinsClient,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            job: job.into(),
            channel,
            profile,
            limit,
            client,
        }
    }

    /// The API query for the `limit` most recent builds with their artifacts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL and job do not form a valid URL.
    pub fn api_url(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse(&format!(
            "{base}/job/{}/api/json?tree={TREE_PROJECTION}{{0,{}}}",
            self.job, self.limit
        ))?;

        if url.cannot_be_a_base() {
            return Err(LauncherError::Config(format!(
                "Jenkins base URL is not a web address: {}",
                self.base_url
            )));
        }

        Ok(url)
    }

    /// Fetches the releases of this job, most recent first.
    ///
    /// Never fails. An unreachable server or an unreadable response gives an
    /// empty list; builds with missing data are left out individually.
    pub async fn fetch_releases(&self) -> Vec<GameRelease> {
        let url = match self.api_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot build Jenkins query for job '{}': {e}", self.job);
                return Vec::new();
            }
        };

        let Some(result) = self.client.request::<ApiResult>(&url).await else {
            warn!("No release information available for job '{}'", self.job);
            return Vec::new();
        };

        let builds = result.builds.unwrap_or_default();
        if builds.is_empty() {
            info!("Job '{}' reported no builds", self.job);
            return Vec::new();
        }

        let releases: Vec<GameRelease> = builds
            .into_iter()
            .filter_map(|entry| self.decode_build(entry))
            .filter_map(|build| self.to_release(build))
            .collect();

        info!(
            "Fetched {} {}/{} releases from job '{}'",
            releases.len(),
            self.profile,
            self.channel,
            self.job
        );

        releases
    }

    fn decode_build(&self, entry: Value) -> Option<Build> {
        if entry.is_null() {
            debug!("Skipping null build entry in job '{}'", self.job);
            return None;
        }
        serde_json::from_value(entry)
            .map_err(|e| debug!("Skipping undecodable build in job '{}': {e}", self.job))
            .ok()
    }

    fn to_release(&self, build: Build) -> Option<GameRelease> {
        let Some(number) = build.number.filter(|&number| number > 0) else {
            debug!("Skipping build without a positive number in job '{}'", self.job);
            return None;
        };
        let Some(build_url) = build.url.as_deref() else {
            debug!("Skipping build #{number} without url");
            return None;
        };
        let Some(relative_path) = build
            .artifacts
            .as_deref()
            .and_then(<[_]>::first)
            .and_then(Option::as_ref)
            .and_then(|artifact| artifact.relative_path.as_deref())
        else {
            debug!("Skipping build #{number} without artifacts");
            return None;
        };

        let url = match artifact_url(build_url, relative_path) {
            Ok(url) => url,
            Err(e) => {
                debug!("Skipping build #{number}, invalid artifact URL: {e}");
                return None;
            }
        };

        let millis = build.timestamp.unwrap_or(0);
        let Some(timestamp) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            debug!("Skipping build #{number}, timestamp {millis} out of range");
            return None;
        };

        // Legacy jobs are treated as successful whatever `result` says.
        let metadata = ReleaseMetadata::new(Vec::new(), timestamp, true);
        let id = GameIdentifier::new(number, self.channel, self.profile);

        Some(GameRelease::new(id, url, metadata))
    }
}

#[async_trait]
impl ReleaseRepository for LegacyJenkinsAdapter {
    fn name(&self) -> &str {
        &self.job
    }

    async fn fetch_releases(&self) -> Vec<GameRelease> {
        LegacyJenkinsAdapter::fetch_releases(self).await
    }
}

/// `{build_url}artifact/{relative_path}`, which must parse as an absolute URL.
fn artifact_url(build_url: &str, relative_path: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{build_url}artifact/{relative_path}"))?)
}
