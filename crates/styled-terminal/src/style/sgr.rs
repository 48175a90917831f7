//! SGR (Select Graphic Rendition) escape sequences used by styles.

/// Ends a styled region. `apply` also splits on it to resume an outer style
/// after a nested one.
pub const END_SEQUENCE: &str = "\x1b[0m";

pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const LIGHT: &str = "\x1b[2m";
pub(crate) const NORMAL: &str = "\x1b[21m\x1b[22m";

pub(crate) const ITALIC: &str = "\x1b[3m";
pub(crate) const NO_ITALIC: &str = "\x1b[23m";

pub(crate) const UNDERLINE: &str = "\x1b[4m";
pub(crate) const NO_UNDERLINE: &str = "\x1b[24m";

pub(crate) const STRIKETHROUGH: &str = "\x1b[9m";
pub(crate) const NO_STRIKETHROUGH: &str = "\x1b[29m";

pub(crate) const INVERT: &str = "\x1b[7m";
pub(crate) const NO_INVERT: &str = "\x1b[27m";

pub(crate) const HIDDEN: &str = "\x1b[8m";
pub(crate) const REVEAL: &str = "\x1b[28m";

pub(crate) const DEFAULT_FG: &str = "\x1b[39m";
pub(crate) const DEFAULT_BG: &str = "\x1b[49m";

pub(crate) fn foreground(color_code: &str) -> String {
    format!("\x1b[38;{}m", color_code)
}

pub(crate) fn background(color_code: &str) -> String {
    format!("\x1b[48;{}m", color_code)
}
