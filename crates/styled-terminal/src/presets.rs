//! Ready-made text effects.

use crate::color::convert::hsl_to_rgb;
use crate::color::Color;
use crate::style::Style;

const SPECTRUM: u32 = 360;

/// Colors each character along the hue circle.
///
/// The hue step spreads the whole text over one turn (or advances one degree
/// per character for texts longer than 360 characters). With `per_line`, each
/// line starts again from red. Whitespace is left unstyled.
///
/// ```rust
/// use styled_terminal::presets::rainbow;
///
/// let out = rainbow("ab", false);
/// assert_eq!(out, "\x1b[38;2;255;0;0ma\x1b[0m\x1b[38;2;0;255;255mb\x1b[0m");
/// ```
pub fn rainbow(text: &str, per_line: bool) -> String {
    let length = text.chars().count() as u32;
    if length == 0 {
        return String::new();
    }

    let step = if length <= SPECTRUM {
        (SPECTRUM as f64 / length as f64).round() as u32
    } else {
        1
    };

    let mut out = String::with_capacity(text.len() * 16);
    let mut counter: u32 = 0;
    let mut buf = [0u8; 4];

    for c in text.chars() {
        if c == '\n' && per_line {
            counter = 0;
            out.push(c);
            continue;
        }
        if c.is_whitespace() {
            out.push(c);
        } else {
            out.push_str(&hue_style(counter % SPECTRUM).apply(c.encode_utf8(&mut buf)));
        }
        counter += step;
    }
    out
}

/// Fully saturated, medium lightness. `hue` is always below 360 here.
fn hue_style(hue: u32) -> Style {
    let (red, green, blue) = hsl_to_rgb(f64::from(hue), 100.0, 50.0);
    Style::new().fg(Color::true_color(red, green, blue))
}

/// Runs a preset by name: `rainbow`, `rainbow_lines` or `money`.
///
/// Returns `None` for unknown names.
pub fn preset(name: &str, text: &str) -> Option<String> {
    match name {
        "rainbow" => Some(rainbow(text, false)),
        "rainbow_lines" => Some(rainbow(text, true)),
        "money" => Some(money(text)),
        _ => None,
    }
}

/// Groups the leading integer of `text` with thousands separators.
///
/// Text without a leading non-zero integer comes back unchanged.
///
/// ```rust
/// use styled_terminal::presets::money;
///
/// assert_eq!(money("1234567"), "1,234,567");
/// assert_eq!(money("-0042000 EUR"), "-42,000");
/// assert_eq!(money("abc"), "abc");
/// ```
pub fn money(text: &str) -> String {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest[..end].trim_start_matches('0');
    if digits.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
