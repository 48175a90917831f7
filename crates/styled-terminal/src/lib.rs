//! # styled-terminal - Fluent ANSI styling for terminal text
//!
//! `styled-terminal` builds SGR escape sequences from an immutable, chainable
//! [`Style`] and wraps text with them. Styles nest: text that was already
//! styled keeps its own formatting, and the outer style resumes after each
//! inner region.
//!
//! ## Core Concepts
//!
//! - [`Style`]: eight modifier slots (weight, italic, underline,
//!   strikethrough, foreground, background, invert, visibility)
//! - [`Color`]: a validated palette or true-color fragment, built from an
//!   index, RGB, HSL, hex, a name or a random source
//! - [`Styles`]: a registry of named styles and colors, loadable from YAML,
//!   that also renders `<@name>..</name>` markup templates
//! - [`presets`]: ready-made effects such as [`rainbow`]
//!
//! ## Quick Start
//!
//! ```rust
//! use styled_terminal::{Color, Style};
//!
//! let error = Style::new().bold().fg(Color::RED);
//! let path = Style::new().underline().apply("/etc/hosts");
//!
//! let line = error.apply(&format!("cannot open {} for reading", path));
//! assert_eq!(
//!     line,
//!     "\x1b[1m\x1b[38;5;1mcannot open \x1b[4m/etc/hosts\x1b[0m\x1b[1m\x1b[38;5;1m for reading\x1b[0m"
//! );
//! ```
//!
//! ## Stylesheets
//!
//! ```rust
//! use styled_terminal::Styles;
//!
//! let styles = Styles::from_yaml("
//! warning: bold yellow
//! notice: warning
//! ").unwrap();
//!
//! println!("{}", styles.apply("notice", "disk almost full"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for stylesheet loading, random color
//!   draws and nested styling.

pub mod color;
mod error;
pub mod presets;
pub mod sheet;
pub mod style;

pub use color::{Color, ColorCode, RandomSource};
pub use error::{RenderError, Result, StyleError, StylesheetError};
pub use presets::{money, rainbow};
pub use sheet::{StyleValue, Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use style::{Modifier, Slot, Style, END_SEQUENCE};
