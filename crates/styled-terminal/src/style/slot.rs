//! Style slots: one per modifier category.

use std::borrow::Cow;

/// The modifier categories of a [`Style`](super::Style), in slot order.
///
/// The prefix emitted by a style concatenates the slots in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Bold, light and normal.
    FontWeight,
    Italic,
    Underline,
    Strikethrough,
    ForegroundColor,
    BackgroundColor,
    /// Swapped foreground and background.
    Invert,
    /// Hidden and revealed text.
    Visibility,
}

impl Modifier {
    /// Number of slots in a style.
    pub const COUNT: usize = 8;

    /// Every category, in slot order.
    pub const ALL: [Modifier; Modifier::COUNT] = [
        Modifier::FontWeight,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Strikethrough,
        Modifier::ForegroundColor,
        Modifier::BackgroundColor,
        Modifier::Invert,
        Modifier::Visibility,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// The state of one modifier category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    /// Never touched; the terminal's ambient state applies.
    #[default]
    Unset,
    /// Explicitly left to the terminal. Emits nothing.
    Auto,
    /// A concrete escape sequence.
    Code(Cow<'static, str>),
}

impl Slot {
    /// The escape text this slot contributes to a prefix.
    pub fn as_str(&self) -> &str {
        match self {
            Slot::Unset | Slot::Auto => "",
            Slot::Code(code) => code,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Slot::Unset)
    }
}
