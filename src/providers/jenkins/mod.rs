mod adapter;
mod client;
#[cfg(test)]
pub(crate) mod payloads;
mod types;

pub use adapter::LegacyJenkinsAdapter;
pub use client::JenkinsClient;
pub use types::{ApiResult, Artifact, Build};
