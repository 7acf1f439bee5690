use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use url::Url;

use crate::config::{Config, OutputFormat, SourceConfig};
use crate::http::build_client;
use crate::model::{Channel, Profile};
use crate::output::{self, FetchProgress};
use crate::providers::{GitHubReleaseSource, JenkinsClient};
use crate::repository::RepositoryManager;
use crate::updater::{
    InstallationLocator, LauncherVersion, SelfUpdateResolver, TerminalDialogs, UpdateDialogs,
    UpdateOutcome,
};

#[derive(Parser)]
#[command(name = "buildscout")]
#[command(author, version, about = "Game release discovery and launcher updates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./buildscout.toml or the user config dir)
    #[arg(short, long, global = true, env = "BUILDSCOUT_CONFIG")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List downloadable game builds
    Releases {
        #[arg(short = 'u', long)]
        base_url: Option<String>,

        /// Only scan this job instead of the configured ones
        #[arg(short, long)]
        job: Option<String>,

        /// Channel of --job builds
        #[arg(long, requires = "job", default_value = "stable")]
        channel: Channel,

        /// Profile of --job builds
        #[arg(long, requires = "job", default_value = "omega")]
        profile: Profile,

        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Skip the launcher update check before listing
        #[arg(long, default_value_t = false)]
        no_update_check: bool,
    },

    /// Check whether a newer launcher is available
    CheckUpdate {
        /// Version to compare against (defaults to this build's version)
        #[arg(long)]
        current_version: Option<String>,

        /// Repository publishing launcher releases, as owner/repo
        #[arg(short, long)]
        repository: Option<String>,

        /// Launcher installation directory (defaults to the executable's directory)
        #[arg(short, long)]
        install_dir: Option<PathBuf>,

        /// Accept the update without asking
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

/// Options of a single update check, merged from flags and configuration.
struct UpdateRequest {
    current_version: Option<String>,
    repository: Option<String>,
    install_dir: Option<PathBuf>,
    assume_yes: bool,
}

impl Cli {
    #[allow(clippy::too_many_arguments)]
    async fn execute_releases(
        &self,
        config: &Config,
        base_url: Option<&str>,
        job: Option<&str>,
        channel: Channel,
        profile: Profile,
        limit: Option<usize>,
        format: Option<OutputFormat>,
        no_update_check: bool,
    ) -> Result<()> {
        if config.updater.enabled && !no_update_check {
            let request = UpdateRequest {
                current_version: None,
                repository: None,
                install_dir: None,
                assume_yes: false,
            };
            if let Err(e) = self.execute_check_update(config, request).await {
                warn!("Launcher update check skipped: {e:#}");
            }
        }

        let mut jenkins = config.jenkins.clone();
        if let Some(base_url) = base_url {
            jenkins.base_url = base_url.to_owned();
        }
        if let Some(limit) = limit {
            jenkins.limit = limit;
        }
        if let Some(job) = job {
            jenkins.sources = vec![SourceConfig {
                job: job.to_owned(),
                channel,
                profile,
            }];
        }

        info!("Collecting releases from {}", jenkins.base_url);

        let client = JenkinsClient::new(build_client(&config.http)?);
        let manager = RepositoryManager::from_config(&jenkins, &client);

        let progress = FetchProgress::start(&format!("Fetching builds of {} jobs", manager.len()));
        let releases = manager.fetch_releases().await;
        progress.finish(&format!("Fetched {} releases", releases.len()));

        let format = format.unwrap_or(config.output.format);
        let pretty = self.pretty || config.output.pretty;

        if let Some(output_path) = &self.output {
            let mut file = std::fs::File::create(output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?;
            output::export_releases(&releases, format, pretty, &mut file)?;
            info!("Releases written to: {}", output_path.display());
        } else {
            output::export_releases(&releases, format, pretty, &mut std::io::stdout().lock())?;
        }

        Ok(())
    }

    async fn execute_check_update(&self, config: &Config, request: UpdateRequest) -> Result<()> {
        let current = match &request.current_version {
            Some(version) => version
                .parse::<LauncherVersion>()
                .map_err(anyhow::Error::msg)
                .context("Invalid --current-version")?,
            None => LauncherVersion::current(),
        };
        let repository = request
            .repository
            .as_deref()
            .unwrap_or(&config.updater.repository);

        let source =
            GitHubReleaseSource::new(&config.updater.api_url, repository, build_client(&config.http)?)?;
        let installation = request
            .install_dir
            .map_or(InstallationLocator::CurrentExecutable, InstallationLocator::Fixed);
        let resolver = SelfUpdateResolver::new(source, current.clone(), installation);
        let dialogs = TerminalDialogs::new(request.assume_yes);

        // No spinner here: the confirmation prompt shares the terminal.
        info!("Checking for launcher updates (running {current})");
        let outcome = resolver.run(&dialogs).await;

        match outcome {
            UpdateOutcome::NoUpdate => {
                eprintln!("  {}", output::dim(format!("buildscout {current}: no update applied")));
            }
            UpdateOutcome::Confirmed { release, .. } => {
                let page = Url::parse(&config.updater.download_page)
                    .ok()
                    .or(release.page_url);
                match page {
                    Some(page) => dialogs.open_uri(&page),
                    None => warn!("No download page known for {}", release.tag),
                }
            }
            UpdateOutcome::ValidationFailed(reason) => {
                info!("Launcher update skipped: {reason}");
            }
        }

        Ok(())
    }

    pub async fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Releases {
                base_url,
                job,
                channel,
                profile,
                limit,
                format,
                no_update_check,
            } => {
                self.execute_releases(
                    &config,
                    base_url.as_deref(),
                    job.as_deref(),
                    *channel,
                    *profile,
                    *limit,
                    *format,
                    *no_update_check,
                )
                .await
            }
            Commands::CheckUpdate {
                current_version,
                repository,
                install_dir,
                yes,
            } => {
                self.execute_check_update(
                    &config,
                    UpdateRequest {
                        current_version: current_version.clone(),
                        repository: repository.clone(),
                        install_dir: install_dir.clone(),
                        assume_yes: *yes,
                    },
                )
                .await
            }
        }
    }
}
