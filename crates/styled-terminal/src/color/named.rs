//! Named colors.
//!
//! The 16 ANSI colors map to palette slots 0–15 so they follow the user's
//! terminal theme. The extended names are fixed true colors.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Color;

impl Color {
    // [ANSI colors]

    pub const BLACK: Color = Color::palette(0);
    pub const RED: Color = Color::palette(1);
    pub const GREEN: Color = Color::palette(2);
    pub const YELLOW: Color = Color::palette(3);
    pub const BLUE: Color = Color::palette(4);
    pub const MAGENTA: Color = Color::palette(5);
    pub const CYAN: Color = Color::palette(6);
    pub const WHITE: Color = Color::palette(7);

    pub const BRIGHT_BLACK: Color = Color::palette(8);
    pub const BRIGHT_RED: Color = Color::palette(9);
    pub const BRIGHT_GREEN: Color = Color::palette(10);
    pub const BRIGHT_YELLOW: Color = Color::palette(11);
    pub const BRIGHT_BLUE: Color = Color::palette(12);
    pub const BRIGHT_MAGENTA: Color = Color::palette(13);
    pub const BRIGHT_CYAN: Color = Color::palette(14);
    pub const BRIGHT_WHITE: Color = Color::palette(15);

    // [Extended colors]

    pub const CRIMSON: Color = Color::true_color(220, 20, 60);
    pub const SCARLET: Color = Color::true_color(255, 36, 0);
    pub const RUBY: Color = Color::true_color(224, 17, 95);
    pub const CARMINE: Color = Color::true_color(150, 0, 24);
    pub const VERMILION: Color = Color::true_color(227, 66, 52);
    pub const CORAL: Color = Color::true_color(255, 127, 80);
    pub const TANGERINE: Color = Color::true_color(242, 133, 0);
    pub const AMBER: Color = Color::true_color(255, 191, 0);
    pub const GOLD: Color = Color::true_color(255, 215, 0);
    pub const CHARTREUSE: Color = Color::true_color(127, 255, 0);
    pub const LIME: Color = Color::true_color(50, 205, 50);
    pub const EMERALD: Color = Color::true_color(80, 200, 120);
    pub const JADE: Color = Color::true_color(0, 168, 107);
    pub const TEAL: Color = Color::true_color(0, 128, 128);
    pub const AQUAMARINE: Color = Color::true_color(127, 255, 212);
    pub const AZURE: Color = Color::true_color(0, 127, 255);
    pub const ELECTRIC_BLUE: Color = Color::true_color(44, 117, 255);
    pub const COBALT: Color = Color::true_color(0, 71, 171);
    pub const SAPPHIRE: Color = Color::true_color(15, 82, 186);
    pub const INDIGO: Color = Color::true_color(75, 0, 130);
    pub const VIOLET: Color = Color::true_color(143, 0, 255);
    pub const FUCHSIA: Color = Color::true_color(255, 0, 160);
    pub const PLUM: Color = Color::true_color(221, 160, 221);
    pub const ROSE: Color = Color::true_color(255, 0, 127);
    pub const LAVENDER: Color = Color::true_color(230, 230, 250);
    pub const SILVER: Color = Color::true_color(192, 192, 192);

    /// Looks up a named color, ignoring case.
    ///
    /// Names are snake_case (`bright_red`, `electric_blue`). `gray` and `grey`
    /// are aliases of `bright_black`.
    ///
    /// ```rust
    /// use styled_terminal::Color;
    ///
    /// assert_eq!(Color::named("Bright_Red"), Some(Color::BRIGHT_RED));
    /// assert_eq!(Color::named("coral"), Some(Color::CORAL));
    /// assert_eq!(Color::named("purple"), None);
    /// ```
    pub fn named(name: &str) -> Option<Color> {
        NAMED_COLORS.get(name.to_lowercase().as_str()).copied()
    }

    /// All known color names, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMES.iter().map(|(name, _)| *name)
    }
}

const NAMES: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("yellow", Color::YELLOW),
    ("blue", Color::BLUE),
    ("magenta", Color::MAGENTA),
    ("cyan", Color::CYAN),
    ("white", Color::WHITE),
    ("bright_black", Color::BRIGHT_BLACK),
    ("bright_red", Color::BRIGHT_RED),
    ("bright_green", Color::BRIGHT_GREEN),
    ("bright_yellow", Color::BRIGHT_YELLOW),
    ("bright_blue", Color::BRIGHT_BLUE),
    ("bright_magenta", Color::BRIGHT_MAGENTA),
    ("bright_cyan", Color::BRIGHT_CYAN),
    ("bright_white", Color::BRIGHT_WHITE),
    ("gray", Color::BRIGHT_BLACK),
    ("grey", Color::BRIGHT_BLACK),
    ("crimson", Color::CRIMSON),
    ("scarlet", Color::SCARLET),
    ("ruby", Color::RUBY),
    ("carmine", Color::CARMINE),
    ("vermilion", Color::VERMILION),
    ("coral", Color::CORAL),
    ("tangerine", Color::TANGERINE),
    ("amber", Color::AMBER),
    ("gold", Color::GOLD),
    ("chartreuse", Color::CHARTREUSE),
    ("lime", Color::LIME),
    ("emerald", Color::EMERALD),
    ("jade", Color::JADE),
    ("teal", Color::TEAL),
    ("aquamarine", Color::AQUAMARINE),
    ("azure", Color::AZURE),
    ("electric_blue", Color::ELECTRIC_BLUE),
    ("cobalt", Color::COBALT),
    ("sapphire", Color::SAPPHIRE),
    ("indigo", Color::INDIGO),
    ("violet", Color::VIOLET),
    ("fuchsia", Color::FUCHSIA),
    ("plum", Color::PLUM),
    ("rose", Color::ROSE),
    ("lavender", Color::LAVENDER),
    ("silver", Color::SILVER),
];

static NAMED_COLORS: Lazy<HashMap<&'static str, Color>> =
    Lazy::new(|| NAMES.iter().copied().collect());
