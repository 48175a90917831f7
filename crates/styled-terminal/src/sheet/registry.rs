//! Registry of named styles.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::palette::{self, Palette};
use super::parser::parse_stylesheet;
use super::value::StyleValue;
use crate::color::Color;
use crate::error::{StyleError, StylesheetError};
use crate::style::Style;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles, plus a table of named colors.
///
/// Entries are concrete styles or aliases to other entries. Applying an
/// unknown name prepends an indicator to the text so typos are visible.
/// Color names registered with [`add_color`](Self::add_color) (or under
/// `colors:` in YAML) are looked up before the built-in color names.
///
/// ```rust
/// use styled_terminal::{Color, Style, Styles};
///
/// let styles = Styles::new()
///     .add("error", Style::new().bold().fg(Color::RED))
///     .add("dim", Style::new().light())
///     .add("muted", "dim");
///
/// assert_eq!(styles.apply("muted", "quiet"), "\x1b[2mquiet\x1b[0m");
/// assert_eq!(styles.apply("typo", "Hello"), "(!?) Hello");
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    styles: HashMap<String, StyleValue>,
    colors: Palette,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            colors: Palette::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    /// Creates an empty registry with the default missing style indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML stylesheet and validates its aliases.
    ///
    /// See the [module documentation](crate::sheet) for the schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let styles = parse_stylesheet(yaml)?;
        styles.validate()?;
        Ok(styles)
    }

    /// Loads a YAML stylesheet from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StylesheetError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), bytes = content.len(), "loading stylesheet");

        Self::from_yaml(&content)
    }

    /// Sets the indicator prepended when a style name is not found.
    ///
    /// An empty indicator leaves unknown-style text untouched.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style or alias, replacing any entry with the same name.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub(crate) fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) {
        self.styles.insert(name.to_string(), value.into());
    }

    /// Names a color, replacing any earlier color with the same name.
    ///
    /// A registered name shadows the built-in color of the same name.
    pub fn add_color(mut self, name: &str, color: Color) -> Self {
        self.insert_color(name.to_string(), color);
        self
    }

    pub(crate) fn insert_color(&mut self, name: String, color: Color) {
        self.colors.insert(name, color);
    }

    /// Looks up a registered color name.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Registered color names, sorted.
    pub fn color_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Turns color text into a [`Color`]: a registered name, then
    /// `random` (optionally `bright` or `dim`), then [`Color::parse`].
    ///
    /// ```rust
    /// use styled_terminal::{Color, Styles};
    ///
    /// let styles = Styles::new().add_color("brand", Color::CORAL);
    /// assert_eq!(styles.resolve_color("brand").unwrap(), Color::CORAL);
    /// assert_eq!(styles.resolve_color("#000").unwrap(), Color::from_rgb(0, 0, 0).unwrap());
    /// assert!(styles.resolve_color("random bright").is_ok());
    /// ```
    pub fn resolve_color(&self, text: &str) -> Result<Color, StyleError> {
        palette::resolve(&self.colors, text)
    }

    pub(crate) fn palette(&self) -> &Palette {
        &self.colors
    }

    /// Resolves a name to a concrete style, following aliases.
    ///
    /// Returns `None` for unknown names and alias cycles. Use
    /// [`validate`](Self::validate) for the reason.
    pub fn get(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.styles.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(next) => current = next,
            }
        }
    }

    /// Checks that every alias resolves, reporting the first problem.
    ///
    /// Names are checked in sorted order so the reported error is stable.
    pub fn validate(&self) -> Result<(), StylesheetError> {
        for name in self.names() {
            let mut path = vec![name.to_string()];
            let mut current = name;

            while let Some(StyleValue::Alias(target)) = self.styles.get(current) {
                if path.iter().any(|seen| seen == target) {
                    path.push(target.clone());
                    return Err(StylesheetError::CycleDetected { path });
                }
                if !self.styles.contains_key(target) {
                    return Err(StylesheetError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.clone(),
                    });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies a named style to `text`.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.get(name) {
            Some(style) => style.apply(text),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Entry names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the raw entry for a name, without following aliases.
    pub fn entry(&self, name: &str) -> Option<&StyleValue> {
        self.styles.get(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
