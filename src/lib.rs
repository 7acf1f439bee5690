//! Game release discovery and launcher self-update checks.
//!
//! [`repository::RepositoryManager`] collects downloadable game builds from
//! Jenkins jobs through [`providers::LegacyJenkinsAdapter`].
//! [`updater::SelfUpdateResolver`] decides whether the launcher itself should
//! be updated. Both degrade to "nothing found" when the network or the remote
//! data lets them down; only an unusable installation directory is reported
//! to the user.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod output;
pub mod providers;
pub mod repository;
pub mod updater;

pub use error::{LauncherError, Result};
pub use model::{Channel, GameIdentifier, GameRelease, Profile, ReleaseMetadata};
