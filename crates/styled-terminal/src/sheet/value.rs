//! Registry entries: concrete styles or aliases.

use crate::style::Style;

/// A registry entry that is either a concrete style or an alias to another
/// entry.
///
/// Aliases let semantic names (`timestamp`) point at presentation names
/// (`muted`) that hold the actual formatting.
///
/// ```rust
/// use styled_terminal::{Style, Styles};
///
/// let styles = Styles::new()
///     .add("muted", Style::new().light())
///     .add("timestamp", "muted");
/// assert_eq!(styles.get("timestamp"), Some(&Style::new().light()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A style with actual formatting.
    Concrete(Style),
    /// The name of another entry.
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_from_style() {
        let value: StyleValue = Style::new().bold().into();
        assert!(matches!(value, StyleValue::Concrete(_)));
    }

    #[test]
    fn test_style_value_from_str() {
        let value: StyleValue = "target".into();
        assert_eq!(value, StyleValue::Alias("target".to_string()));
    }

    #[test]
    fn test_style_value_from_string() {
        let value: StyleValue = String::from("target").into();
        assert_eq!(value, StyleValue::Alias("target".to_string()));
    }
}
