use std::path::PathBuf;

use log::{error, info, warn};

use super::dialogs::UpdateDialogs;
use super::installation::InstallationLocator;
use super::release::{LauncherRelease, ReleaseSource};
use super::version::LauncherVersion;

/// Progress of one update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateState {
    /// Look up the latest release and compare it with the running version.
    Check,
    /// A newer release exists; the installation still has to be validated.
    Available(LauncherRelease),
    /// Waiting for the user to accept the update.
    Confirm {
        release: LauncherRelease,
        installation_dir: PathBuf,
    },
    Done(UpdateOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Up to date, nothing published, lookup failed, or the user declined.
    NoUpdate,
    /// The user accepted; replacing the files is up to the caller.
    Confirmed {
        release: LauncherRelease,
        installation_dir: PathBuf,
    },
    /// The installation directory could not be used. The user has been told.
    ValidationFailed(String),
}

/// Decides whether the running launcher should update itself.
///
/// Only the installation check reports anything to the user; every other
/// failure quietly ends in [`UpdateOutcome::NoUpdate`]. The resolver never
/// touches the installed files.
pub struct SelfUpdateResolver<S> {
    source: S,
    current: LauncherVersion,
    installation: InstallationLocator,
}

impl<S: ReleaseSource> SelfUpdateResolver<S> {
    pub fn new(source: S, current: LauncherVersion, installation: InstallationLocator) -> Self {
        Self {
            source,
            current,
            installation,
        }
    }

    /// Runs the check from [`UpdateState::Check`] until it is done.
    pub async fn run(&self, dialogs: &dyn UpdateDialogs) -> UpdateOutcome {
        let mut state = UpdateState::Check;
        loop {
            state = match self.step(state, dialogs).await {
                UpdateState::Done(outcome) => return outcome,
                next => next,
            };
        }
    }

    /// Performs a single transition. [`UpdateState::Done`] maps to itself.
    pub async fn step(&self, state: UpdateState, dialogs: &dyn UpdateDialogs) -> UpdateState {
        match state {
            UpdateState::Check => self.check().await,
            UpdateState::Available(release) => self.validate_installation(release, dialogs),
            UpdateState::Confirm {
                release,
                installation_dir,
            } => {
                if dialogs.confirm_update(&installation_dir, &release) {
                    info!("Update to {} confirmed", release.tag);
                    UpdateState::Done(UpdateOutcome::Confirmed {
                        release,
                        installation_dir,
                    })
                } else {
                    info!("Update to {} declined", release.tag);
                    UpdateState::Done(UpdateOutcome::NoUpdate)
                }
            }
            done @ UpdateState::Done(_) => done,
        }
    }

    async fn check(&self) -> UpdateState {
        let Some(release) = self.source.latest_release().await else {
            info!("No launcher release information available");
            return UpdateState::Done(UpdateOutcome::NoUpdate);
        };

        let Some(latest) = release.version() else {
            warn!("Ignoring launcher release with unparsable tag '{}'", release.tag);
            return UpdateState::Done(UpdateOutcome::NoUpdate);
        };

        if !latest.is_newer_than(&self.current) {
            info!(
                "Launcher {} is up to date (latest is {latest})",
                self.current
            );
            return UpdateState::Done(UpdateOutcome::NoUpdate);
        }

        info!("Launcher update available: {} -> {latest}", self.current);
        UpdateState::Available(release)
    }

    fn validate_installation(
        &self,
        release: LauncherRelease,
        dialogs: &dyn UpdateDialogs,
    ) -> UpdateState {
        match self.installation.detect_and_check() {
            Ok(installation_dir) => UpdateState::Confirm {
                release,
                installation_dir,
            },
            Err(e) => {
                error!("The launcher installation directory can not be detected or used: {e}");
                dialogs.show_error(&format!(
                    "The launcher installation directory can not be detected or used!\n{e}"
                ));
                UpdateState::Done(UpdateOutcome::ValidationFailed(e.to_string()))
            }
        }
    }
}
