use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Release track of a game build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Nightly,
}

/// Packaging variant of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Full distribution bundling the engine with the default module set
    Omega,
    /// Engine only, without modules
    Engine,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Nightly => write!(f, "nightly"),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "nightly" => Ok(Self::Nightly),
            other => Err(format!("unknown channel '{other}' (expected stable or nightly)")),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Omega => write!(f, "omega"),
            Self::Engine => write!(f, "engine"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "omega" => Ok(Self::Omega),
            "engine" => Ok(Self::Engine),
            other => Err(format!("unknown profile '{other}' (expected omega or engine)")),
        }
    }
}

/// Identifies one game build within a channel and profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameIdentifier {
    pub build: u32,
    pub channel: Channel,
    pub profile: Profile,
}

impl GameIdentifier {
    pub fn new(build: u32, channel: Channel, profile: Profile) -> Self {
        Self {
            build,
            channel,
            profile,
        }
    }
}

impl fmt::Display for GameIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} #{}", self.profile, self.channel, self.build)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub changelog: Vec<String>,
    pub timestamp: DateTime<Utc>,
    /// Whether the upstream build was marked successful
    pub successful: bool,
}

impl ReleaseMetadata {
    pub fn new(changelog: Vec<String>, timestamp: DateTime<Utc>, successful: bool) -> Self {
        Self {
            changelog,
            timestamp,
            successful,
        }
    }
}

/// A downloadable game build.
///
/// Only constructed from an already-parsed absolute [`Url`], so a release with
/// a malformed download location cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRelease {
    id: GameIdentifier,
    url: Url,
    metadata: ReleaseMetadata,
}

impl GameRelease {
    pub fn new(id: GameIdentifier, url: Url, metadata: ReleaseMetadata) -> Self {
        Self { id, url, metadata }
    }

    pub fn id(&self) -> &GameIdentifier {
        &self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn changelog(&self) -> &[String] {
        &self.metadata.changelog
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.metadata.timestamp
    }

    pub fn is_successful(&self) -> bool {
        self.metadata.successful
    }
}
