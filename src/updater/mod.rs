//! Launcher self-update check.
//!
//! Compares the running version with the latest published release, makes sure
//! the installation can be written to, and asks the user. Replacing the files
//! of the running launcher is left to a separate helper process started by the
//! caller once [`UpdateOutcome::Confirmed`] comes back.

mod dialogs;
mod installation;
mod release;
mod resolver;
mod version;

pub use dialogs::{TerminalDialogs, UpdateDialogs};
pub use installation::InstallationLocator;
pub use release::{LauncherRelease, ReleaseAsset, ReleaseSource};
pub use resolver::{SelfUpdateResolver, UpdateOutcome, UpdateState};
pub use version::LauncherVersion;
