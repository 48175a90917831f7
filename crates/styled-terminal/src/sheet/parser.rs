//! YAML stylesheet parsing.
//!
//! The optional top-level `colors` entry names colors for the rest of the
//! sheet. Every other entry becomes either a concrete [`Style`] or an alias.
//! The value decides which:
//!
//! - a mapping is a full definition (`fg`, `bg`, `weight`, ...)
//! - a string with several tokens is shorthand (`"bold red on black"`)
//! - a single word is shorthand when it is a modifier keyword or a color,
//!   and an alias otherwise
//!
//! Alias targets are not checked here. [`Styles::from_yaml`] validates them
//! once every entry is known.

use serde_yaml::{Mapping, Value};

use super::palette::{self, random_tone, tone_word, Palette, Tone};
use super::registry::Styles;
use crate::color::Color;
use crate::error::{StyleError, StylesheetError};
use crate::style::Style;

/// Top-level key holding the color table.
pub(crate) const COLORS_KEY: &str = "colors";

/// Parses YAML into a registry without validating aliases.
pub(crate) fn parse_stylesheet(yaml: &str) -> Result<Styles, StylesheetError> {
    let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
        message: e.to_string(),
    })?;

    let mut styles = Styles::new();

    let mapping = match &root {
        Value::Null => return Ok(styles),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(StylesheetError::Parse {
                message: "stylesheet must be a YAML mapping".to_string(),
            })
        }
    };

    let palette = match mapping.get(COLORS_KEY) {
        Some(colors) => parse_palette(colors)?,
        None => Palette::new(),
    };

    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
            message: format!("style name must be a string, got {:?}", key),
        })?;
        if name == COLORS_KEY {
            continue;
        }

        match parse_definition(value, name, &palette)? {
            Definition::Style(style) => styles.insert(name, style),
            Definition::Alias(target) => styles.insert(name, target),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        styles = styles.len(),
        colors = palette.len(),
        "parsed stylesheet"
    );

    for (name, color) in palette {
        styles.insert_color(name, color);
    }
    Ok(styles)
}

/// Reads the `colors` table. Entries may refer to names defined above them.
fn parse_palette(value: &Value) -> Result<Palette, StylesheetError> {
    let mut palette = Palette::new();
    let entries = match value {
        Value::Null => return Ok(palette),
        Value::Mapping(entries) => entries,
        other => {
            return Err(StylesheetError::InvalidDefinition {
                style: COLORS_KEY.to_string(),
                message: format!("expected a mapping of color names, got {:?}", other),
            })
        }
    };

    for (key, value) in entries {
        let name = key.as_str().ok_or_else(|| StylesheetError::InvalidDefinition {
            style: COLORS_KEY.to_string(),
            message: format!("color name must be a string, got {:?}", key),
        })?;
        let label = format!("{}.{}", COLORS_KEY, name);

        let color = match color_setting(value, &label, &palette)? {
            ColorSetting::Color(color) => color,
            ColorSetting::Reset | ColorSetting::Auto => {
                return Err(StylesheetError::InvalidColor {
                    style: label,
                    value: render(value),
                    source: StyleError::invalid("color", "a concrete color, not reset or auto"),
                })
            }
        };
        palette.insert(name.to_string(), color);
    }
    Ok(palette)
}

#[derive(Debug, PartialEq, Eq)]
enum Definition {
    Style(Style),
    Alias(String),
}

fn parse_definition(
    value: &Value,
    name: &str,
    palette: &Palette,
) -> Result<Definition, StylesheetError> {
    match value {
        Value::String(s) => parse_string(s, name, palette),
        Value::Mapping(map) => parse_mapping(map, name, palette).map(Definition::Style),
        _ => Err(StylesheetError::InvalidDefinition {
            style: name.to_string(),
            message: format!("expected string or mapping, got {:?}", value),
        }),
    }
}

fn parse_string(s: &str, name: &str, palette: &Palette) -> Result<Definition, StylesheetError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(StylesheetError::InvalidDefinition {
            style: name.to_string(),
            message: "empty style definition".to_string(),
        });
    }

    let tokens = tokenize(s);
    if tokens.len() == 1 && is_alias(tokens[0], palette) {
        return Ok(Definition::Alias(tokens[0].to_string()));
    }
    parse_shorthand(&tokens, name, palette).map(Definition::Style)
}

/// A single word names another style unless it reads as a keyword or color.
fn is_alias(word: &str, palette: &Palette) -> bool {
    if keyword(word).is_some() || word.eq_ignore_ascii_case("on") {
        return false;
    }
    if palette.contains_key(word) || random_tone(word).is_some() {
        return false;
    }
    if word.starts_with('#') || word.contains('(') || word.contains(';') {
        return false;
    }
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    Color::parse(word).is_err()
}

/// Splits on whitespace, keeping parenthesized groups such as
/// `rgb(1, 2, 3)` in one token.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&s[begin..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        tokens.push(&s[begin..]);
    }
    tokens
}

fn keyword(word: &str) -> Option<fn(&Style) -> Style> {
    let apply: fn(&Style) -> Style = match word.to_ascii_lowercase().as_str() {
        "bold" => Style::bold,
        "light" | "dim" => Style::light,
        "normal" => Style::normal,
        "italic" => Style::italic,
        "underline" => Style::underline,
        "strikethrough" => Style::strikethrough,
        "invert" | "reverse" => Style::invert,
        "hidden" => Style::hidden,
        "reveal" => Style::reveal,
        _ => return None,
    };
    Some(apply)
}

/// `bright` or `dim` right after a bare `random` picks the tone, so
/// `random dim` is a dim color and `light random` a faint random one.
fn parse_shorthand(
    tokens: &[&str],
    name: &str,
    palette: &Palette,
) -> Result<Style, StylesheetError> {
    let mut style = Style::new();
    let mut rest = tokens.iter().copied().peekable();

    while let Some(token) = rest.next() {
        let background = token.eq_ignore_ascii_case("on");
        let word = if background {
            rest.next().ok_or_else(|| StylesheetError::InvalidDefinition {
                style: name.to_string(),
                message: "'on' must be followed by a color".to_string(),
            })?
        } else if let Some(apply) = keyword(token) {
            style = apply(&style);
            continue;
        } else {
            token
        };

        let tone = match random_tone(word) {
            Some(Tone::Any) => rest.next_if(|next| tone_word(next).is_some()).and_then(tone_word),
            _ => None,
        };
        let color = match tone {
            Some(tone) => tone.draw().map_err(|source| invalid_color(name, word, source))?,
            None => color_from_str(word, name, palette)?,
        };

        style = if background {
            style.bg(color)
        } else {
            style.fg(color)
        };
    }
    Ok(style)
}

fn color_from_str(value: &str, name: &str, palette: &Palette) -> Result<Color, StylesheetError> {
    palette::resolve(palette, value).map_err(|source| invalid_color(name, value, source))
}

fn invalid_color(name: &str, value: &str, source: StyleError) -> StylesheetError {
    StylesheetError::InvalidColor {
        style: name.to_string(),
        value: value.to_string(),
        source,
    }
}

/// Builds a style from a full definition mapping.
///
/// `name` only labels errors. Color strings resolve against `palette`.
pub(crate) fn parse_mapping(
    map: &Mapping,
    name: &str,
    palette: &Palette,
) -> Result<Style, StylesheetError> {
    let mut style = Style::new();

    for (key, value) in map {
        let attribute = key.as_str().ok_or_else(|| StylesheetError::InvalidDefinition {
            style: name.to_string(),
            message: format!("attribute name must be a string, got {:?}", key),
        })?;

        style = match attribute {
            "fg" => match color_setting(value, name, palette)? {
                ColorSetting::Reset => style.reset_fg(),
                ColorSetting::Auto => style.auto_fg(),
                ColorSetting::Color(color) => style.fg(color),
            },
            "bg" => match color_setting(value, name, palette)? {
                ColorSetting::Reset => style.reset_bg(),
                ColorSetting::Auto => style.auto_bg(),
                ColorSetting::Color(color) => style.bg(color),
            },
            "weight" => match word(value, attribute, name)? {
                "bold" => style.bold(),
                "light" => style.light(),
                "normal" => style.normal(),
                "auto" => style.auto_font_weight(),
                other => return Err(bad_value(name, attribute, other)),
            },
            "visibility" => match word(value, attribute, name)? {
                "hidden" => style.hidden(),
                "reveal" => style.reveal(),
                "auto" => style.auto_visibility(),
                other => return Err(bad_value(name, attribute, other)),
            },
            "italic" => toggle(value, attribute, name)?.pick(
                &style,
                Style::italic,
                Style::no_italic,
                Style::auto_italic,
            ),
            "underline" => toggle(value, attribute, name)?.pick(
                &style,
                Style::underline,
                Style::no_underline,
                Style::auto_underline,
            ),
            "strikethrough" => toggle(value, attribute, name)?.pick(
                &style,
                Style::strikethrough,
                Style::no_strikethrough,
                Style::auto_strikethrough,
            ),
            "invert" => toggle(value, attribute, name)?.pick(
                &style,
                Style::invert,
                Style::no_invert,
                Style::auto_invert,
            ),
            _ => {
                return Err(StylesheetError::UnknownAttribute {
                    style: name.to_string(),
                    attribute: attribute.to_string(),
                })
            }
        };
    }
    Ok(style)
}

enum ColorSetting {
    Reset,
    Auto,
    Color(Color),
}

const CHANNELS: [&str; 3] = ["red", "green", "blue"];

fn color_setting(
    value: &Value,
    name: &str,
    palette: &Palette,
) -> Result<ColorSetting, StylesheetError> {
    // Non-integers are reported as themselves, not as an out-of-range number.
    let not_integer = |offending: &Value, param: &str| {
        invalid_color(
            name,
            &render(offending),
            StyleError::invalid(param, "an integer"),
        )
    };

    match value {
        Value::String(s) => match s.trim() {
            "reset" => Ok(ColorSetting::Reset),
            "auto" => Ok(ColorSetting::Auto),
            other => color_from_str(other, name, palette).map(ColorSetting::Color),
        },
        Value::Number(n) => {
            let index = n.as_i64().ok_or_else(|| not_integer(value, "index"))?;
            Color::from_palette_index(index)
                .map(ColorSetting::Color)
                .map_err(|source| invalid_color(name, &render(value), source))
        }
        Value::Sequence(channels) if channels.len() == CHANNELS.len() => {
            let mut rgb = [0i64; 3];
            for ((slot, channel), param) in rgb.iter_mut().zip(channels).zip(CHANNELS) {
                *slot = channel.as_i64().ok_or_else(|| not_integer(channel, param))?;
            }
            Color::from_rgb(rgb[0], rgb[1], rgb[2])
                .map(ColorSetting::Color)
                .map_err(|source| invalid_color(name, &render(value), source))
        }
        _ => Err(invalid_color(
            name,
            &render(value),
            StyleError::invalid(
                "color",
                "a color name, palette index, hex code, rgb(...), hsl(...), [r, g, b], random, reset or auto",
            ),
        )),
    }
}

enum Toggle {
    On,
    Off,
    Auto,
}

impl Toggle {
    fn pick(
        self,
        style: &Style,
        on: fn(&Style) -> Style,
        off: fn(&Style) -> Style,
        auto: fn(&Style) -> Style,
    ) -> Style {
        match self {
            Toggle::On => on(style),
            Toggle::Off => off(style),
            Toggle::Auto => auto(style),
        }
    }
}

fn toggle(value: &Value, attribute: &str, name: &str) -> Result<Toggle, StylesheetError> {
    match value {
        Value::Bool(true) => Ok(Toggle::On),
        Value::Bool(false) => Ok(Toggle::Off),
        Value::String(s) if s.trim() == "auto" => Ok(Toggle::Auto),
        other => Err(bad_value(name, attribute, &render(other))),
    }
}

fn word<'a>(value: &'a Value, attribute: &str, name: &str) -> Result<&'a str, StylesheetError> {
    value
        .as_str()
        .map(str::trim)
        .ok_or_else(|| bad_value(name, attribute, &render(value)))
}

fn bad_value(name: &str, attribute: &str, value: &str) -> StylesheetError {
    StylesheetError::InvalidDefinition {
        style: name.to_string(),
        message: format!("invalid value '{}' for '{}'", value, attribute),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
