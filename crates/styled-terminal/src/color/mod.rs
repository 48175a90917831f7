//! Terminal colors.
//!
//! A [`Color`] is a validated, immutable color fragment that can be embedded
//! into a foreground or background SGR sequence. Two encodings exist:
//!
//! - 256-color palette: `5;N` with `N` in 0–255
//! - True color: `2;R;G;B` with each channel in 0–255
//!
//! Colors can be created from a palette index, RGB channels, HSL values, a hex
//! code, a raw fragment, or one of the named constants.
//!
//! # Example
//!
//! ```rust
//! use styled_terminal::Color;
//!
//! let orange = Color::from_hex("#ff6b35").unwrap();
//! assert_eq!(orange.code(), "2;255;107;53");
//!
//! let gray = Color::from_palette_index(240).unwrap();
//! assert_eq!(gray.code(), "5;240");
//!
//! assert!(Color::from_rgb(300, 0, 0).is_err());
//! ```

pub(crate) mod convert;
mod named;
mod parse;
mod random;

use std::fmt;

use crate::error::{Result, StyleError};

pub use random::RandomSource;

const CHANNEL_RANGE: &str = "a number between 0-255";

/// The two color encodings understood by terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    /// Index into the 256-color lookup table.
    Palette(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

/// A validated terminal color.
///
/// Colors are `Copy` and never change after construction. Every constructor
/// either returns a valid color or fails with
/// [`StyleError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    code: ColorCode,
}

impl Color {
    pub(crate) const fn palette(index: u8) -> Self {
        Self {
            code: ColorCode::Palette(index),
        }
    }

    pub(crate) const fn true_color(red: u8, green: u8, blue: u8) -> Self {
        Self {
            code: ColorCode::Rgb(red, green, blue),
        }
    }

    /// Chooses an entry of the 256-color lookup table.
    ///
    /// - 0–7: black..white
    /// - 8–15: bright black..bright white
    /// - 16–231: 6 × 6 × 6 cube, `16 + 36r + 6g + b`
    /// - 232–255: grayscale from dark to light
    pub fn from_palette_index(index: i64) -> Result<Self> {
        let index =
            u8::try_from(index).map_err(|_| StyleError::invalid("index", CHANNEL_RANGE))?;
        Ok(Self::palette(index))
    }

    /// Creates a true color from red, green and blue channels.
    pub fn from_rgb(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self::true_color(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Creates a true color from hue (0–360), saturation (0–100) and
    /// lightness (0–100).
    ///
    /// ```rust
    /// use styled_terminal::Color;
    ///
    /// let dim_red = Color::from_hsl(0.0, 50.0, 25.0).unwrap();
    /// assert_eq!(dim_red, Color::from_rgb(96, 32, 32).unwrap());
    /// ```
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        if !(0.0..=360.0).contains(&hue) {
            return Err(StyleError::invalid("hue", "a number between 0-360"));
        }
        if !(0.0..=100.0).contains(&saturation) {
            return Err(StyleError::invalid("saturation", "a number between 0-100"));
        }
        if !(0.0..=100.0).contains(&lightness) {
            return Err(StyleError::invalid("lightness", "a number between 0-100"));
        }

        let (red, green, blue) = convert::hsl_to_rgb(hue, saturation, lightness);
        Self::from_rgb(red.into(), green.into(), blue.into())
    }

    /// Creates a true color from a 3 or 6 digit hex code, with or without `#`.
    ///
    /// The 3 digit shorthand duplicates each digit, so `#f80` is `#ff8800`.
    pub fn from_hex(code: &str) -> Result<Self> {
        let (red, green, blue) = convert::parse_hex(code)
            .ok_or_else(|| StyleError::invalid("hexCode", "a valid hex color code"))?;
        Self::from_rgb(red.into(), green.into(), blue.into())
    }

    /// Validates a raw color fragment, `5;N` or `2;R;G;B`.
    ///
    /// ```rust
    /// use styled_terminal::Color;
    ///
    /// assert_eq!(Color::from_code("5;9").unwrap(), Color::BRIGHT_RED);
    /// assert!(Color::from_code("5;256").is_err());
    /// assert!(Color::from_code("2;1;2").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self> {
        convert::parse_code(code).map(|code| Self { code }).ok_or_else(|| {
            StyleError::invalid("code", "in the format '5;[0-255]' or '2;[red];[green];[blue]'")
        })
    }

    /// Returns the color fragment embedded into SGR sequences.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Returns the encoding of this color.
    pub fn kind(&self) -> ColorCode {
        self.code
    }

    /// Returns the channels of a true color, `None` for palette colors.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self.code {
            ColorCode::Rgb(r, g, b) => Some((r, g, b)),
            ColorCode::Palette(_) => None,
        }
    }

    /// Returns the lookup table index of a palette color, `None` for true colors.
    pub fn palette_index(&self) -> Option<u8> {
        match self.code {
            ColorCode::Palette(index) => Some(index),
            ColorCode::Rgb(..) => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ColorCode::Palette(index) => write!(f, "5;{}", index),
            ColorCode::Rgb(r, g, b) => write!(f, "2;{};{};{}", r, g, b),
        }
    }
}

fn channel(param: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| StyleError::invalid(param, CHANNEL_RANGE))
}
