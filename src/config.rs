use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{Channel, Profile};

/// Configuration file structure for buildscout.
///
/// Holds the Jenkins jobs to scan for game releases and where to look for
/// launcher updates. Every section is optional and falls back to the
/// defaults used by the official launcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Jenkins release discovery
    #[serde(default)]
    pub jenkins: JenkinsConfig,

    /// Launcher self-update
    #[serde(default)]
    pub updater: UpdaterConfig,

    /// HTTP client settings shared by all remote calls
    #[serde(default)]
    pub http: HttpConfig,

    /// Output format preferences
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JenkinsConfig {
    /// Jenkins instance base URL
    #[serde(default = "default_jenkins_base_url")]
    pub base_url: String,

    /// Maximum number of builds to request per job
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Jobs to scan, in listing order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

/// One Jenkins job and the channel/profile its builds are published as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceConfig {
    pub job: String,
    pub channel: Channel,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdaterConfig {
    /// Check for a newer launcher at startup
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// GitHub API base URL
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Repository publishing launcher releases (e.g., 'owner/repo')
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Page opened after the user agrees to update
    #[serde(default = "default_download_page")]
    pub download_page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Upper bound for a whole request, body included
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Default for JenkinsConfig {
    fn default() -> Self {
        Self {
            base_url: default_jenkins_base_url(),
            limit: default_limit(),
            sources: default_sources(),
        }
    }
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: default_github_api_url(),
            repository: default_repository(),
            download_page: default_download_page(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            pretty: false,
        }
    }
}

fn default_jenkins_base_url() -> String {
    "http://jenkins.terasology.org".to_string()
}

fn default_limit() -> usize {
    10
}

fn default_sources() -> Vec<SourceConfig> {
    [
        ("DistroOmegaRelease", Channel::Stable, Profile::Omega),
        ("DistroOmega", Channel::Nightly, Profile::Omega),
        ("TerasologyStable", Channel::Stable, Profile::Engine),
        ("Terasology", Channel::Nightly, Profile::Engine),
    ]
    .into_iter()
    .map(|(job, channel, profile)| SourceConfig {
        job: job.to_string(),
        channel,
        profile,
    })
    .collect()
}

fn default_true() -> bool {
    true
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_repository() -> String {
    "MovingBlocks/TerasologyLauncher".to_string()
}

fn default_download_page() -> String {
    "https://terasology.org/download".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("buildscout/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./buildscout.toml, ./buildscout.json, ./buildscout.yaml, ./buildscout.yml
    /// 3. `<config dir>/buildscout/config.toml`
    ///
    /// Returns default configuration if no file is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if path.exists() {
                return Self::load_from_path(path);
            }
            log::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let candidates = [
            "buildscout.toml",
            "buildscout.json",
            "buildscout.yaml",
            "buildscout.yml",
        ];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            return Self::load_from_path(&path);
        }

        Ok(Self::default())
    }

    /// `<platform config dir>/buildscout/config.toml`, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("buildscout").join("config.toml"))
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let config: Self = match extension {
            "toml" => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            "json" => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
            _ => toml::from_str(&contents)
                .or_else(|_| serde_json::from_str(&contents))
                .or_else(|_| serde_yaml::from_str(&contents))
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
