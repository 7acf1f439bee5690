pub mod github;
pub mod jenkins;

pub use github::GitHubReleaseSource;
pub use jenkins::{JenkinsClient, LegacyJenkinsAdapter};
