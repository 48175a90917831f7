//! User color names and the `random` color keywords.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::StyleError;

/// Colors registered by name, looked up before the built-in forms.
pub(crate) type Palette = HashMap<String, Color>;

/// Which random draw a `random` keyword asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Any,
    Bright,
    Dim,
}

impl Tone {
    pub(crate) fn draw(self) -> Result<Color, StyleError> {
        let mut rng = rand::rng();
        match self {
            Tone::Any => Color::random(&mut rng),
            Tone::Bright => Color::random_bright(&mut rng),
            Tone::Dim => Color::random_dim(&mut rng),
        }
    }
}

/// Reads `random`, `rand`, `random bright`, `random_dim` and similar.
pub(crate) fn random_tone(text: &str) -> Option<Tone> {
    let lower = text.trim().to_ascii_lowercase();
    let mut words = lower
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty());

    if !matches!(words.next(), Some("random" | "rand")) {
        return None;
    }
    let tone = match words.next() {
        None => Tone::Any,
        Some(word) => tone_word(word)?,
    };
    words.next().is_none().then_some(tone)
}

/// The word that may follow a bare `random` in shorthand.
pub(crate) fn tone_word(word: &str) -> Option<Tone> {
    if word.eq_ignore_ascii_case("bright") {
        Some(Tone::Bright)
    } else if word.eq_ignore_ascii_case("dim") {
        Some(Tone::Dim)
    } else {
        None
    }
}

/// Palette name first, then a random keyword, then [`Color::parse`].
pub(crate) fn resolve(palette: &Palette, text: &str) -> Result<Color, StyleError> {
    let text = text.trim();
    if let Some(color) = palette.get(text) {
        return Ok(*color);
    }
    match random_tone(text) {
        Some(tone) => tone.draw(),
        None => Color::parse(text),
    }
}
