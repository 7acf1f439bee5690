use anyhow::Result;
use std::io::Write;

use crate::config::OutputFormat;
use crate::model::GameRelease;

use super::releases::render_releases;

/// Writes releases in the requested format.
///
/// - Table: human-readable terminal output
/// - JSON: programmatic access, e.g. by a GUI front end
pub fn export_releases(
    releases: &[GameRelease],
    format: OutputFormat,
    pretty: bool,
    output: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(output, "{}", render_releases(releases))?;
            Ok(())
        }
        OutputFormat::Json => export_json(releases, pretty, output),
    }
}

fn export_json(releases: &[GameRelease], pretty: bool, output: &mut dyn Write) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(releases)?
    } else {
        serde_json::to_string(releases)?
    };
    writeln!(output, "{}", json)?;
    Ok(())
}
