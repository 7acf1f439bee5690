mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::GitHubReleaseSource;
pub use types::{GitHubAsset, GitHubRelease};
