use std::path::Path;

use console::Term;
use url::Url;

use crate::output::{bright, bright_yellow, cyan, dim};

use super::LauncherRelease;

/// User-facing callbacks the update flow needs from its host application.
pub trait UpdateDialogs: Send + Sync {
    /// Report a problem the user has to know about.
    fn show_error(&self, message: &str);

    /// Show `release` and ask whether to update the launcher in `installation_dir`.
    fn confirm_update(&self, installation_dir: &Path, release: &LauncherRelease) -> bool;

    /// Ask the host to open `uri`, e.g. in a browser.
    fn open_uri(&self, uri: &Url);
}

/// Dialogs on the controlling terminal.
pub struct TerminalDialogs {
    term: Term,
    assume_yes: bool,
}

impl TerminalDialogs {
    /// With `assume_yes` every confirmation is answered with yes without prompting.
    pub fn new(assume_yes: bool) -> Self {
        Self {
            term: Term::stderr(),
            assume_yes,
        }
    }
}

impl UpdateDialogs for TerminalDialogs {
    fn show_error(&self, message: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {message}", bright_yellow("✗")));
    }

    fn confirm_update(&self, installation_dir: &Path, release: &LauncherRelease) -> bool {
        let _ = self.term.write_line(&format!(
            "{} {}",
            bright("⬆️  Launcher update available:"),
            cyan(&release.name)
        ));
        let _ = self.term.write_line(&format!(
            "   {} {}",
            dim("Installed in"),
            installation_dir.display()
        ));
        for line in release.changelog.lines().filter(|l| !l.trim().is_empty()) {
            let _ = self.term.write_line(&format!("   {}", dim(line)));
        }

        if self.assume_yes {
            return true;
        }
        if !self.term.is_term() {
            log::info!("Not a terminal, skipping update confirmation");
            return false;
        }

        let _ = self.term.write_str("   Update now? [y/N] ");
        match self.term.read_line() {
            Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                log::warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }

    fn open_uri(&self, uri: &Url) {
        let _ = self.term.write_line(&format!(
            "{} {}",
            bright("Download the new launcher from"),
            cyan(uri)
        ));
    }
}
