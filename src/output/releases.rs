use std::fmt::Write;

use comfy_table::Cell;

use crate::model::GameRelease;

use super::styling::{bright, dim};
use super::tables::{channel_cell, create_table, header_cells};

pub fn render_releases(releases: &[GameRelease]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} {}", bright("📦"), bright("Game Releases").underlined());

    if releases.is_empty() {
        let _ = writeln!(output, "  {}", dim("No releases found"));
        return output;
    }

    let mut table = create_table();
    table.set_header(header_cells(&["Profile", "Channel", "Build", "Built", "Download"]));

    for release in releases {
        let id = release.id();
        table.add_row(vec![
            Cell::new(id.profile),
            channel_cell(id.channel),
            Cell::new(format!("#{}", id.build)),
            Cell::new(release.timestamp().format("%Y-%m-%d %H:%M")),
            Cell::new(release.url()),
        ]);
    }

    let _ = writeln!(output, "{table}");
    let _ = write!(output, "  {}", dim(format!("{} releases", releases.len())));
    output
}
