//! Error types for styled-terminal.
//!
//! Color and style construction share a single failure mode, an invalid
//! parameter. Stylesheet loading has its own error type that wraps it.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised when a constructor receives a value outside its legal range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A parameter was malformed or out of range.
    #[error("[styled-terminal] The parameter '{param}' is invalid. It should be {legal}.")]
    InvalidParameter {
        /// Name of the offending parameter.
        param: String,
        /// Human-readable description of the legal values.
        legal: String,
    },
}

impl StyleError {
    /// Shorthand for building an [`InvalidParameter`](StyleError::InvalidParameter).
    pub fn invalid(param: impl Into<String>, legal: impl Into<String>) -> Self {
        StyleError::InvalidParameter {
            param: param.into(),
            legal: legal.into(),
        }
    }

    /// Returns the name of the offending parameter.
    pub fn param(&self) -> &str {
        match self {
            StyleError::InvalidParameter { param, .. } => param,
        }
    }
}

/// Result type for color and style construction.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors from parsing or loading a stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The YAML could not be parsed, or its root is not a mapping.
    #[error("failed to parse stylesheet: {message}")]
    Parse { message: String },

    /// A style entry has the wrong shape.
    #[error("invalid definition for style '{style}': {message}")]
    InvalidDefinition { style: String, message: String },

    /// A color value was rejected.
    #[error("invalid color '{value}' for style '{style}'")]
    InvalidColor {
        style: String,
        value: String,
        #[source]
        source: StyleError,
    },

    /// A mapping key is not a known attribute.
    #[error("unknown attribute '{attribute}' in style '{style}'")]
    UnknownAttribute { style: String, attribute: String },

    /// An alias points at a style that does not exist.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },

    /// Alias resolution loops back on itself.
    #[error("cycle detected in style aliases: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from expanding a template with [`Styles::render`](crate::Styles::render).
#[derive(Debug, Error)]
pub enum RenderError {
    /// A tag's attribute list is not a series of `key="value"` pairs.
    #[error("malformed attributes in tag {tag}: {message}")]
    InvalidTag { tag: String, message: String },

    /// A tag's attributes do not describe a valid style.
    #[error("invalid style in tag {tag}")]
    InvalidStyle {
        tag: String,
        #[source]
        source: StylesheetError,
    },

    /// A `<#name>` tag names no preset.
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    /// The template file could not be read.
    #[error("failed to read template {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = StyleError::invalid("index", "a number between 0-255");
        assert_eq!(
            err.to_string(),
            "[styled-terminal] The parameter 'index' is invalid. It should be a number between 0-255."
        );
        assert_eq!(err.param(), "index");
    }

    #[test]
    fn test_cycle_detected_display() {
        let err = StylesheetError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_invalid_color_has_source() {
        use std::error::Error as _;

        let err = StylesheetError::InvalidColor {
            style: "title".to_string(),
            value: "#zzz".to_string(),
            source: StyleError::invalid("hex", "a valid hex color code"),
        };
        assert!(err.to_string().contains("title"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_render_error_chains_stylesheet_error() {
        use std::error::Error as _;

        let err = RenderError::InvalidStyle {
            tag: "<!>".to_string(),
            source: StylesheetError::UnknownAttribute {
                style: "<!>".to_string(),
                attribute: "blink".to_string(),
            },
        };
        assert_eq!(err.to_string(), "invalid style in tag <!>");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("unknown attribute 'blink' in style '<!>'"));
    }
}
