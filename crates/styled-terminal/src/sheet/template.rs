//! Inline markup over a [`Styles`] registry.
//!
//! ```text
//! <@name>text</name>               style `name` from the registry
//! <#preset>text</preset>           rainbow, rainbow_lines or money
//! <!fg="red" weight="bold">text</!>  an inline style
//! {key}                            replaced from the data map
//! ```
//!
//! `@` and `#` tags take the same attributes as `<!..>`, applied over the
//! styled or preset output. Attribute names are the stylesheet mapping keys,
//! and values are quoted strings (`true` and `false` become booleans).
//!
//! Parsing is lenient: a tag without a matching close, a stray close tag and
//! anything else that is not a well-formed tag are kept as literal text.
//! Closing an outer tag closes any tags still open inside it.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::parser::parse_mapping;
use super::registry::Styles;
use crate::error::RenderError;
use crate::presets;
use crate::style::Style;

impl Styles {
    /// Expands tags and `{key}` placeholders in `template`.
    ///
    /// Placeholders are filled before styling, so preset tags see the data
    /// (`<#money>{total}</money>`). Data values are never read as markup.
    /// Unknown keys are left as written.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use styled_terminal::Styles;
    ///
    /// let styles = Styles::from_yaml("error: bold red").unwrap();
    /// let data = HashMap::from([("count", "3")]);
    ///
    /// let out = styles.render("<@error>{count} failed</error>", &data).unwrap();
    /// assert_eq!(out, "\x1b[1m\x1b[38;5;1m3 failed\x1b[0m");
    /// ```
    pub fn render(
        &self,
        template: &str,
        data: &HashMap<&str, &str>,
    ) -> Result<String, RenderError> {
        let tokens: Vec<Token<'_>> = Tokenizer::new(template).collect();
        let mut root = String::with_capacity(template.len());
        let mut stack: Vec<Frame<'_>> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Text(text) => substitute(text, data, current(&mut stack, &mut root)),
                Token::Open {
                    kind,
                    name,
                    attrs,
                    raw,
                } => {
                    if has_matching_close(&tokens[i + 1..], name) {
                        stack.push(Frame {
                            kind,
                            name,
                            attrs,
                            content: String::new(),
                        });
                    } else {
                        current(&mut stack, &mut root).push_str(raw);
                    }
                }
                Token::Close { name, raw } => {
                    if stack.iter().any(|frame| frame.name == name) {
                        // Closes everything opened inside `name` as well.
                        while let Some(frame) = stack.pop() {
                            let last = frame.name == name;
                            let out = self.close(frame)?;
                            current(&mut stack, &mut root).push_str(&out);
                            if last {
                                break;
                            }
                        }
                    } else {
                        current(&mut stack, &mut root).push_str(raw);
                    }
                }
            }
        }

        while let Some(frame) = stack.pop() {
            let out = self.close(frame)?;
            current(&mut stack, &mut root).push_str(&out);
        }
        Ok(root)
    }

    /// Reads a template from disk and renders it.
    pub fn render_file<P: AsRef<Path>>(
        &self,
        path: P,
        data: &HashMap<&str, &str>,
    ) -> Result<String, RenderError> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path).map_err(|source| RenderError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), bytes = template.len(), "rendering template");

        self.render(&template, data)
    }

    fn close(&self, frame: Frame<'_>) -> Result<String, RenderError> {
        let tag = frame.label();
        let inline = self.inline_style(frame.attrs, &tag)?;

        let content = match frame.kind {
            Kind::Style => self.apply(frame.name, &frame.content),
            Kind::Preset => presets::preset(frame.name, &frame.content).ok_or_else(|| {
                RenderError::UnknownPreset {
                    name: frame.name.to_string(),
                }
            })?,
            Kind::Inline => frame.content,
        };
        Ok(inline.apply(&content))
    }

    fn inline_style(&self, attrs: &str, tag: &str) -> Result<Style, RenderError> {
        if attrs.trim().is_empty() {
            return Ok(Style::new());
        }
        let map = parse_attrs(attrs, tag)?;
        parse_mapping(&map, tag, self.palette()).map_err(|source| RenderError::InvalidStyle {
            tag: tag.to_string(),
            source,
        })
    }
}

/// The buffer text currently goes into: the innermost open tag, or the output.
fn current<'s>(stack: &'s mut [Frame<'_>], root: &'s mut String) -> &'s mut String {
    match stack.last_mut() {
        Some(frame) => &mut frame.content,
        None => root,
    }
}

fn has_matching_close(tokens: &[Token<'_>], name: &str) -> bool {
    let mut depth = 1;
    for token in tokens {
        match token {
            Token::Open { name: open, .. } if *open == name => depth += 1,
            Token::Close { name: close, .. } if *close == name => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

fn substitute(text: &str, data: &HashMap<&str, &str>, out: &mut String) {
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let found = after
            .find('}')
            .and_then(|close| data.get(&after[..close]).map(|value| (close, *value)));

        match found {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
}

/// Reads `key="value"` pairs (single quotes work too) into a style mapping.
fn parse_attrs(attrs: &str, tag: &str) -> Result<Mapping, RenderError> {
    let malformed = |message: String| RenderError::InvalidTag {
        tag: tag.to_string(),
        message,
    };

    let mut map = Mapping::new();
    let mut rest = attrs.trim_start();

    while !rest.is_empty() {
        let (key, after) = rest
            .split_once('=')
            .ok_or_else(|| malformed(format!("expected key=\"value\", got '{}'", rest)))?;
        let key = key.trim_end();
        if !is_name(key) {
            return Err(malformed(format!("invalid attribute name '{}'", key)));
        }

        let after = after.trim_start();
        let quote = match after.chars().next() {
            Some(quote @ ('"' | '\'')) => quote,
            _ => return Err(malformed(format!("value for '{}' must be quoted", key))),
        };
        let body = &after[1..];
        let end = body
            .find(quote)
            .ok_or_else(|| malformed(format!("unterminated value for '{}'", key)))?;

        let value = match &body[..end] {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::String(other.to_string()),
        };
        map.insert(Value::String(key.to_string()), value);
        rest = body[end + 1..].trim_start();
    }
    Ok(map)
}

/// Letter or underscore, then letters, digits, underscores and hyphens.
fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// `<@name>`
    Style,
    /// `<#name>`
    Preset,
    /// `<!attrs>`, closed by `</!>`
    Inline,
}

/// An open tag collecting its content.
struct Frame<'a> {
    kind: Kind,
    name: &'a str,
    attrs: &'a str,
    content: String,
}

impl Frame<'_> {
    fn label(&self) -> String {
        match self.kind {
            Kind::Style => format!("<@{}>", self.name),
            Kind::Preset => format!("<#{}>", self.name),
            Kind::Inline => "<!>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    /// `name` is `!` for inline tags. `raw` is the tag as written.
    Open {
        kind: Kind,
        name: &'a str,
        attrs: &'a str,
        raw: &'a str,
    },
    Close {
        name: &'a str,
        raw: &'a str,
    },
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// `raw` runs from `<` to the first `>`.
    fn tag(raw: &'a str) -> Option<Token<'a>> {
        let inner = &raw[1..raw.len() - 1];
        if inner.contains('<') {
            return None;
        }

        if let Some(name) = inner.strip_prefix('/') {
            return (name == "!" || is_name(name)).then_some(Token::Close { name, raw });
        }

        let kind = match inner.chars().next()? {
            '@' => Kind::Style,
            '#' => Kind::Preset,
            '!' => Kind::Inline,
            _ => return None,
        };
        let body = &inner[1..];
        let (name, attrs) = match kind {
            Kind::Inline => ("!", body),
            Kind::Style | Kind::Preset => {
                let end = body.find(char::is_whitespace).unwrap_or(body.len());
                (&body[..end], &body[end..])
            }
        };
        if name != "!" && !is_name(name) {
            return None;
        }
        Some(Token::Open {
            kind,
            name,
            attrs,
            raw,
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = &self.input[self.pos..];
        if remaining.is_empty() {
            return None;
        }

        match remaining.find('<') {
            None => {
                self.pos = self.input.len();
                Some(Token::Text(remaining))
            }
            Some(start) if start > 0 => {
                self.pos += start;
                Some(Token::Text(&remaining[..start]))
            }
            Some(_) => {
                let tag = remaining
                    .find('>')
                    .and_then(|end| Self::tag(&remaining[..=end]).map(|token| (end, token)));
                match tag {
                    Some((end, token)) => {
                        self.pos += end + 1;
                        Some(token)
                    }
                    // Not a tag: emit the `<` alone and carry on after it.
                    None => {
                        self.pos += 1;
                        Some(Token::Text(&remaining[..1]))
                    }
                }
            }
        }
    }
}
