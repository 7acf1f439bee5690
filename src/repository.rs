use async_trait::async_trait;
use log::info;

use crate::config::JenkinsConfig;
use crate::model::GameRelease;
use crate::providers::jenkins::{JenkinsClient, LegacyJenkinsAdapter};

/// A source of game releases.
///
/// Implementations never fail: anything that goes wrong upstream shows up as
/// fewer (or no) releases.
#[async_trait]
pub trait ReleaseRepository: Send + Sync {
    /// Short label for logs and listings.
    fn name(&self) -> &str;

    async fn fetch_releases(&self) -> Vec<GameRelease>;
}

/// Collects releases from every configured repository.
pub struct RepositoryManager {
    repositories: Vec<Box<dyn ReleaseRepository>>,
}

impl RepositoryManager {
    pub fn new(repositories: Vec<Box<dyn ReleaseRepository>>) -> Self {
        Self { repositories }
    }

    /// One Jenkins adapter per configured source, all sharing `client`.
    pub fn from_config(config: &JenkinsConfig, client: &JenkinsClient) -> Self {
        let repositories = config
            .sources
            .iter()
            .map(|source| {
                Box::new(LegacyJenkinsAdapter::new(
                    config.base_url.clone(),
                    source.job.clone(),
                    source.channel,
                    source.profile,
                    config.limit,
                    client.clone(),
                )) as Box<dyn ReleaseRepository>
            })
            .collect();

        Self::new(repositories)
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Releases of all repositories, in configuration order.
    ///
    /// Repositories are queried one after the other; each keeps its own
    /// upstream ordering and an empty repository does not affect the others.
    pub async fn fetch_releases(&self) -> Vec<GameRelease> {
        let mut releases = Vec::new();

        for repository in &self.repositories {
            let fetched = repository.fetch_releases().await;
            info!("{}: {} releases", repository.name(), fetched.len());
            releases.extend(fetched);
        }

        releases
    }
}
