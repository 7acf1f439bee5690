mod exports;
mod progress;
mod releases;
mod styling;
mod tables;

pub use exports::export_releases;
pub use progress::FetchProgress;
pub use releases::render_releases;
pub use styling::{bright, bright_green, bright_yellow, cyan, dim, magenta_bold};

/// Prints the buildscout banner to stderr.
///
/// Displays the tool name, version, and description at the start of execution.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("🚀 buildscout"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("Game release discovery & launcher updates")
    );
}
