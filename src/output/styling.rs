use std::fmt::Display;

use console::{style, StyledObject};

/// Terminal styling for banners, headings and status lines.
fn styled(text: impl Display) -> StyledObject<String> {
    style(text.to_string())
}

pub fn bright(text: impl Display) -> StyledObject<String> {
    styled(text).bright()
}

pub fn bright_yellow(text: impl Display) -> StyledObject<String> {
    bright(text).yellow()
}

pub fn bright_green(text: impl Display) -> StyledObject<String> {
    bright(text).green()
}

pub fn cyan(text: impl Display) -> StyledObject<String> {
    styled(text).cyan()
}

pub fn dim(text: impl Display) -> StyledObject<String> {
    styled(text).dim()
}

pub fn magenta_bold(text: impl Display) -> StyledObject<String> {
    styled(text).magenta().bold()
}
