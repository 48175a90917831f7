//! The style chain.
//!
//! A [`Style`] is a fixed record of eight slots, one per [`Modifier`]
//! category. Every accessor returns a new style with exactly one slot
//! replaced; the receiver is never modified, so a style can be shared and
//! extended in several directions.
//!
//! Each slot is in one of three states (see [`Slot`]):
//!
//! - unset: never touched
//! - auto: explicitly left to the terminal, emits nothing
//! - a concrete escape sequence
//!
//! The last accessor applied to a category wins, so `bold().light()` is light
//! and `bold().auto_font_weight()` emits no weight at all.
//!
//! # Nested styles
//!
//! [`Style::apply`] wraps text in the style's prefix and a trailing
//! [`END_SEQUENCE`]. When the text already contains styled regions, each of
//! those ends with `END_SEQUENCE` too, and the outer prefix is re-emitted right
//! after it so the outer style resumes:
//!
//! ```rust
//! use styled_terminal::Style;
//!
//! let inner = Style::new().italic().apply("inner");
//! let outer = Style::new().bold().apply(&format!("a {} b", inner));
//!
//! assert_eq!(outer, "\x1b[1ma \x1b[3minner\x1b[0m\x1b[1m b\x1b[0m");
//! ```

mod sgr;
mod slot;

use std::fmt;

use crate::color::Color;

pub use sgr::END_SEQUENCE;
pub use slot::{Modifier, Slot};

/// An immutable terminal text style.
///
/// ```rust
/// use styled_terminal::{Color, Style};
///
/// let warning = Style::new().bold().fg(Color::YELLOW);
/// assert_eq!(warning.apply("careful"), "\x1b[1m\x1b[38;5;3mcareful\x1b[0m");
///
/// // The base style is untouched by further chaining.
/// let loud = warning.underline();
/// assert_ne!(loud, warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    slots: [Slot; Modifier::COUNT],
}

impl Style {
    /// Creates a style with every slot unset.
    pub const fn new() -> Self {
        Self {
            slots: [
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
                Slot::Unset,
            ],
        }
    }

    fn with(&self, modifier: Modifier, slot: Slot) -> Self {
        let mut next = self.clone();
        next.slots[modifier.index()] = slot;
        next
    }

    fn with_code(&self, modifier: Modifier, code: &'static str) -> Self {
        self.with(modifier, Slot::Code(code.into()))
    }

    /// Returns a brand-new empty style, discarding every slot of `self`.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new()
    }

    // [Font weight]

    #[must_use]
    pub fn bold(&self) -> Self {
        self.with_code(Modifier::FontWeight, sgr::BOLD)
    }

    #[must_use]
    pub fn light(&self) -> Self {
        self.with_code(Modifier::FontWeight, sgr::LIGHT)
    }

    /// Forces normal intensity, cancelling bold and light.
    #[must_use]
    pub fn normal(&self) -> Self {
        self.with_code(Modifier::FontWeight, sgr::NORMAL)
    }

    #[must_use]
    pub fn auto_font_weight(&self) -> Self {
        self.with(Modifier::FontWeight, Slot::Auto)
    }

    // [Italic]

    #[must_use]
    pub fn italic(&self) -> Self {
        self.with_code(Modifier::Italic, sgr::ITALIC)
    }

    #[must_use]
    pub fn no_italic(&self) -> Self {
        self.with_code(Modifier::Italic, sgr::NO_ITALIC)
    }

    #[must_use]
    pub fn auto_italic(&self) -> Self {
        self.with(Modifier::Italic, Slot::Auto)
    }

    // [Underline]

    #[must_use]
    pub fn underline(&self) -> Self {
        self.with_code(Modifier::Underline, sgr::UNDERLINE)
    }

    #[must_use]
    pub fn no_underline(&self) -> Self {
        self.with_code(Modifier::Underline, sgr::NO_UNDERLINE)
    }

    #[must_use]
    pub fn auto_underline(&self) -> Self {
        self.with(Modifier::Underline, Slot::Auto)
    }

    // [Strikethrough]

    #[must_use]
    pub fn strikethrough(&self) -> Self {
        self.with_code(Modifier::Strikethrough, sgr::STRIKETHROUGH)
    }

    #[must_use]
    pub fn no_strikethrough(&self) -> Self {
        self.with_code(Modifier::Strikethrough, sgr::NO_STRIKETHROUGH)
    }

    #[must_use]
    pub fn auto_strikethrough(&self) -> Self {
        self.with(Modifier::Strikethrough, Slot::Auto)
    }

    // [Colors]

    /// Sets the foreground color.
    #[must_use]
    pub fn fg(&self, color: Color) -> Self {
        self.with(
            Modifier::ForegroundColor,
            Slot::Code(sgr::foreground(&color.code()).into()),
        )
    }

    /// Forces the terminal's default foreground color.
    #[must_use]
    pub fn reset_fg(&self) -> Self {
        self.with_code(Modifier::ForegroundColor, sgr::DEFAULT_FG)
    }

    #[must_use]
    pub fn auto_fg(&self) -> Self {
        self.with(Modifier::ForegroundColor, Slot::Auto)
    }

    /// Sets the background color.
    #[must_use]
    pub fn bg(&self, color: Color) -> Self {
        self.with(
            Modifier::BackgroundColor,
            Slot::Code(sgr::background(&color.code()).into()),
        )
    }

    /// Forces the terminal's default background color.
    #[must_use]
    pub fn reset_bg(&self) -> Self {
        self.with_code(Modifier::BackgroundColor, sgr::DEFAULT_BG)
    }

    #[must_use]
    pub fn auto_bg(&self) -> Self {
        self.with(Modifier::BackgroundColor, Slot::Auto)
    }

    // [Invert]

    /// Swaps foreground and background colors.
    #[must_use]
    pub fn invert(&self) -> Self {
        self.with_code(Modifier::Invert, sgr::INVERT)
    }

    #[must_use]
    pub fn no_invert(&self) -> Self {
        self.with_code(Modifier::Invert, sgr::NO_INVERT)
    }

    #[must_use]
    pub fn auto_invert(&self) -> Self {
        self.with(Modifier::Invert, Slot::Auto)
    }

    // [Visibility]

    #[must_use]
    pub fn hidden(&self) -> Self {
        self.with_code(Modifier::Visibility, sgr::HIDDEN)
    }

    /// Forces hidden text to show.
    #[must_use]
    pub fn reveal(&self) -> Self {
        self.with_code(Modifier::Visibility, sgr::REVEAL)
    }

    #[must_use]
    pub fn auto_visibility(&self) -> Self {
        self.with(Modifier::Visibility, Slot::Auto)
    }

    // [Composition]

    /// Overlays `other` onto this style.
    ///
    /// Slots that are set in `other` (auto or concrete) win; unset slots keep
    /// this style's value.
    ///
    /// ```rust
    /// use styled_terminal::{Color, Style};
    ///
    /// let base = Style::new().bold().fg(Color::RED);
    /// let merged = base.merge(&Style::new().fg(Color::BLUE).auto_font_weight());
    /// assert_eq!(merged, Style::new().auto_font_weight().fg(Color::BLUE));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Style) -> Self {
        let mut next = self.clone();
        for (slot, over) in next.slots.iter_mut().zip(&other.slots) {
            if !over.is_unset() {
                *slot = over.clone();
            }
        }
        next
    }

    /// Returns the slot for a modifier category.
    pub fn slot(&self, modifier: Modifier) -> &Slot {
        &self.slots[modifier.index()]
    }

    /// The combined escape prefix, slots concatenated in category order.
    pub fn prefix(&self) -> String {
        self.slots.iter().map(Slot::as_str).collect()
    }

    /// True when this style emits no escape codes.
    pub fn is_plain(&self) -> bool {
        self.slots.iter().all(|slot| slot.as_str().is_empty())
    }

    // [Application]

    /// Applies this style to `text`.
    ///
    /// Plain styles and empty text return `text` unchanged. Otherwise every
    /// segment between embedded [`END_SEQUENCE`]s is prefixed with this
    /// style, and one `END_SEQUENCE` terminates the result.
    pub fn apply(&self, text: &str) -> String {
        let prefix = self.prefix();
        if prefix.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let mut segments: Vec<&str> = text.split(END_SEQUENCE).collect();
        if segments.last() == Some(&"") {
            segments.pop();
        }

        #[cfg(feature = "tracing")]
        if segments.len() > 1 {
            tracing::trace!(
                segments = segments.len(),
                "resuming style after nested end sequences"
            );
        }

        let mut out = String::with_capacity(
            text.len() + segments.len() * (prefix.len() + END_SEQUENCE.len()),
        );
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push_str(END_SEQUENCE);
            }
            out.push_str(&prefix);
            out.push_str(segment);
        }
        out.push_str(END_SEQUENCE);
        out
    }

    /// Joins `parts` with single spaces and applies this style to the result.
    ///
    /// ```rust
    /// use styled_terminal::Style;
    ///
    /// assert_eq!(Style::new().apply_all(["a", "b", "c"]), "a b c");
    /// ```
    pub fn apply_all<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                joined.push(' ');
            }
            joined.push_str(part.as_ref());
        }
        self.apply(&joined)
    }
}

/// Writes the style's prefix.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            f.write_str(slot.as_str())?;
        }
        Ok(())
    }
}
