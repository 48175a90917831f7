//! Named styles and YAML stylesheets.
//!
//! [`Styles`] maps names to styles so callers can write
//! `styles.apply("error", msg)` instead of repeating the chain everywhere.
//! Entries can alias other entries, which lets a semantic name point at a
//! presentation style.
//!
//! # Stylesheet format
//!
//! A stylesheet is a YAML mapping from style names to definitions, plus an
//! optional `colors` table. A definition is one of three forms:
//!
//! ```yaml
//! # Named colors, usable anywhere a color is expected below.
//! # An entry may use names defined above it.
//! colors:
//!   brand: "#ff8800"
//!   accent: brand
//!   deep: [0, 0, 80]
//!
//! # Full mapping
//! header:
//!   fg: brand          # name, palette index, hex, rgb(...), hsl(...), [r, g, b], random, reset, auto
//!   bg: 17
//!   weight: bold       # bold, light, normal, auto
//!   italic: true       # true, false, auto
//!   underline: false
//!   strikethrough: auto
//!   invert: false
//!   visibility: reveal # hidden, reveal, auto
//!
//! # Shorthand: modifier keywords, a foreground color, "on <background>"
//! error: bold red
//! banner: white on deep
//! confetti: bold random bright
//!
//! # Alias to another entry
//! title: header
//! ```
//!
//! Shorthand keywords are `bold`, `light` (or `dim`), `normal`, `italic`,
//! `underline`, `strikethrough`, `invert` (or `reverse`), `hidden` and
//! `reveal`. Any other single word that is not a color is treated as an
//! alias. The key `colors` is reserved for the color table.
//!
//! `random` draws a true color each time the stylesheet is loaded.
//! `random bright` and `random dim` (also written `random_bright`) pick a
//! fully saturated light or a muted dark color.
//!
//! # Templates
//!
//! [`Styles::render`] expands `<@name>..</name>` tags with registry styles,
//! `<#rainbow>..</rainbow>` and `<#money>..</money>` with the presets,
//! `<!fg="red">..</!>` with an inline style, and `{key}` from a data map.
//!
//! ```rust
//! use styled_terminal::{Color, Style, Styles};
//!
//! let styles = Styles::from_yaml("
//! error: bold red
//! failure: error
//! ").unwrap();
//!
//! assert_eq!(styles.get("failure"), Some(&Style::new().bold().fg(Color::RED)));
//! ```

mod palette;
mod parser;
mod registry;
mod template;
mod value;

pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
