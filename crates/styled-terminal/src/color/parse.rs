//! Parsing colors from text, and the serde representation of [`Color`].
//!
//! Accepted forms:
//!
//! - Named colors: `red`, `bright_red`, `coral`, ...
//! - Hex codes: `#ff6b35` or `#fff`
//! - Functional notation: `rgb(255, 107, 53)`, `hsl(20, 100%, 60%)`
//! - Palette index: `208`
//! - Raw fragments: `5;208`, `2;255;107;53`

use std::fmt;
use std::str::FromStr;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Color, ColorCode};
use crate::error::{Result, StyleError};

const COLOR_FORMS: &str =
    "a color name, hex code, rgb(r, g, b), hsl(h, s%, l%), palette index or raw color code";

impl Color {
    /// Parses a color from any of its textual forms.
    ///
    /// ```rust
    /// use styled_terminal::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::RED);
    /// assert_eq!(Color::parse("#fff").unwrap(), Color::from_rgb(255, 255, 255).unwrap());
    /// assert_eq!(Color::parse("rgb(90, 90, 90)").unwrap(), Color::from_rgb(90, 90, 90).unwrap());
    /// assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap(), Color::from_rgb(255, 0, 0).unwrap());
    /// assert_eq!(Color::parse("208").unwrap(), Color::from_palette_index(208).unwrap());
    /// assert!(Color::parse("purple-ish").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let lower = s.to_lowercase();

        if let Some(args) = function_args(&lower, "rgb") {
            let [r, g, b] = split_args(args, "rgb(red, green, blue)")?;
            return Self::from_rgb(
                parse_int(r, "rgb(red, green, blue)")?,
                parse_int(g, "rgb(red, green, blue)")?,
                parse_int(b, "rgb(red, green, blue)")?,
            );
        }

        if let Some(args) = function_args(&lower, "hsl") {
            let [h, sat, light] = split_args(args, "hsl(hue, saturation%, lightness%)")?;
            return Self::from_hsl(
                parse_float(h, "hsl(hue, saturation%, lightness%)")?,
                parse_float(percent(sat), "hsl(hue, saturation%, lightness%)")?,
                parse_float(percent(light), "hsl(hue, saturation%, lightness%)")?,
            );
        }

        if lower.starts_with('#') {
            return Self::from_hex(&lower);
        }

        if let Some(color) = Self::named(&lower) {
            return Ok(color);
        }

        if !lower.is_empty() && lower.bytes().all(|b| b.is_ascii_digit()) {
            return Self::from_palette_index(parse_int(&lower, COLOR_FORMS)?);
        }

        if lower.contains(';') {
            return Self::from_code(&lower);
        }

        Err(StyleError::invalid("color", COLOR_FORMS))
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args<'a>(args: &'a str, legal: &str) -> Result<[&'a str; 3]> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match parts.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(StyleError::invalid("color", legal)),
    }
}

fn percent(s: &str) -> &str {
    s.strip_suffix('%').unwrap_or(s).trim_end()
}

fn parse_int(s: &str, legal: &str) -> Result<i64> {
    s.parse().map_err(|_| StyleError::invalid("color", legal))
}

fn parse_float(s: &str, legal: &str) -> Result<f64> {
    s.parse().map_err(|_| StyleError::invalid("color", legal))
}

// =============================================================================
// serde
// =============================================================================

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.kind() {
            ColorCode::Palette(index) => serializer.serialize_u8(index),
            ColorCode::Rgb(r, g, b) => {
                serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", r, g, b))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, or an [r, g, b] sequence", COLOR_FORMS)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Color, E> {
        Color::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Color, E> {
        let index = i64::try_from(v).unwrap_or(i64::MAX);
        Color::from_palette_index(index).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Color, E> {
        Color::from_palette_index(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Color, A::Error> {
        let mut channels = [0i64; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }
        Color::from_rgb(channels[0], channels[1], channels[2]).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Text forms
    // =========================================================================

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("blue").unwrap(), Color::BLUE);
        assert_eq!(Color::parse("  Bright_Blue ").unwrap(), Color::BRIGHT_BLUE);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            "rgb(1,2,3)".parse::<Color>().unwrap(),
            Color::from_rgb(1, 2, 3).unwrap()
        );
        assert_eq!(
            "RGB ( 10 , 20 , 30 )".parse::<Color>().unwrap(),
            Color::from_rgb(10, 20, 30).unwrap()
        );
        assert_eq!(Color::parse("rgb(256, 0, 0)").unwrap_err().param(), "red");
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("rgb(a, b, c)").is_err());
    }

    #[test]
    fn test_parse_hsl_function() {
        assert_eq!(
            Color::parse("hsl(240, 100%, 50%)").unwrap(),
            Color::from_hsl(240.0, 100.0, 50.0).unwrap()
        );
        assert_eq!(
            Color::parse("hsl(0,50,25)").unwrap(),
            Color::from_rgb(96, 32, 32).unwrap()
        );
        assert_eq!(
            Color::parse("hsl(0, 0%, 150%)").unwrap_err().param(),
            "lightness"
        );
    }

    #[test]
    fn test_parse_index_and_code() {
        assert_eq!(Color::parse("240").unwrap().code(), "5;240");
        assert!(Color::parse("256").is_err());
        assert_eq!(Color::parse("2;1;2;3").unwrap().code(), "2;1;2;3");
        assert_eq!(Color::parse("5;300").unwrap_err().param(), "code");
    }

    #[test]
    fn test_parse_unknown() {
        let err = Color::parse("purple").unwrap_err();
        assert_eq!(err.param(), "color");
        assert!(Color::parse("").is_err());
    }

    // =========================================================================
    // serde
    // =========================================================================

    #[test]
    fn test_serialize_forms() {
        assert_eq!(serde_json::to_string(&Color::RED).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Color::CORAL).unwrap(),
            "\"#ff7f50\""
        );
    }

    #[test]
    fn test_deserialize_forms() {
        let c: Color = serde_json::from_str("\"#ff7f50\"").unwrap();
        assert_eq!(c, Color::CORAL);
        let c: Color = serde_json::from_str("208").unwrap();
        assert_eq!(c.palette_index(), Some(208));
        let c: Color = serde_json::from_str("[255, 107, 53]").unwrap();
        assert_eq!(c.rgb(), Some((255, 107, 53)));
        let c: Color = serde_json::from_str("\"cyan\"").unwrap();
        assert_eq!(c, Color::CYAN);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Color>("256").is_err());
        assert!(serde_json::from_str::<Color>("-1").is_err());
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Color>("[1, 2, 3, 4]").is_err());
        assert!(serde_json::from_str::<Color>("[256, 0, 0]").is_err());
    }

    #[test]
    fn test_serde_round_trip_yaml() {
        let colors = vec![Color::BRIGHT_CYAN, Color::GOLD];
        let yaml = serde_yaml::to_string(&colors).unwrap();
        let back: Vec<Color> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, colors);
    }
}
