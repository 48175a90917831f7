//! Loading stylesheets from YAML text and files.

use std::collections::HashMap;
use std::fs;

use styled_terminal::{
    Color, ColorCode, Modifier, RenderError, Slot, Style, StyleValue, Styles, StylesheetError,
};
use tempfile::TempDir;

const SHEET: &str = r##"
# Visual layer
accent:
  fg: "#ff8800"
  weight: bold
muted: light
danger: bold red on black
code:
  fg: [200, 200, 200]
  bg: 236
  italic: false

# Semantic layer
title: accent
error: danger
timestamp: muted
"##;

fn write_sheet(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_from_yaml_resolves_layers() {
    let styles = Styles::from_yaml(SHEET).unwrap();

    assert_eq!(styles.len(), 7);
    assert_eq!(
        styles.get("title"),
        Some(&Style::new().fg(Color::from_hex("ff8800").unwrap()).bold())
    );
    assert_eq!(
        styles.get("error"),
        Some(&Style::new().bold().fg(Color::RED).bg(Color::BLACK))
    );
    assert_eq!(styles.get("timestamp"), Some(&Style::new().light()));
    assert!(matches!(styles.entry("title"), Some(StyleValue::Alias(t)) if t == "accent"));
}

#[test]
fn test_from_yaml_apply_output() {
    let styles = Styles::from_yaml(SHEET).unwrap();
    assert_eq!(
        styles.apply("code", "x"),
        "\x1b[23m\x1b[38;2;200;200;200m\x1b[48;5;236mx\x1b[0m"
    );
    assert_eq!(styles.apply("nope", "x"), "(!?) x");
}

#[test]
fn test_from_yaml_rejects_dangling_alias() {
    let err = Styles::from_yaml("title: header").unwrap_err();
    match err {
        StylesheetError::UnresolvedAlias { from, to } => {
            assert_eq!(from, "title");
            assert_eq!(to, "header");
        }
        other => panic!("Expected UnresolvedAlias, got {:?}", other),
    }
}

#[test]
fn test_from_yaml_rejects_cycle() {
    let err = Styles::from_yaml("a: b\nb: a").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cycle detected in style aliases: a -> b -> a"
    );
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "theme.yaml", SHEET);

    let styles = Styles::from_file(&path).unwrap();
    assert_eq!(styles.names().len(), 7);
    assert!(styles.get("error").is_some());
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");

    match Styles::from_file(&path) {
        Err(StylesheetError::Load { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Load error, got {:?}", other),
    }
}

#[test]
fn test_from_file_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "broken.yaml", "accent: {fg: [1, 2");

    assert!(matches!(
        Styles::from_file(&path),
        Err(StylesheetError::Parse { .. })
    ));
}

#[test]
fn test_from_file_bad_color_reports_style() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "colors.yaml", "accent:\n  fg: hsl(400, 50, 50)\n");

    match Styles::from_file(&path) {
        Err(StylesheetError::InvalidColor { style, source, .. }) => {
            assert_eq!(style, "accent");
            assert_eq!(source.param(), "hue");
        }
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

// =============================================================================
// Color table
// =============================================================================

const THEMED: &str = r##"
colors:
  brand: "#ff8800"
  night: [10, 10, 40]
  accent: brand
banner: bold brand on night
panel:
  fg: accent
  bg: night
notice: panel
"##;

#[test]
fn test_colors_section_resolves_everywhere() {
    let styles = Styles::from_yaml(THEMED).unwrap();
    let brand = Color::from_hex("ff8800").unwrap();
    let night = Color::from_rgb(10, 10, 40).unwrap();

    assert_eq!(styles.len(), 3);
    assert_eq!(styles.get("banner"), Some(&Style::new().bold().fg(brand).bg(night)));
    assert_eq!(styles.get("notice"), Some(&Style::new().fg(brand).bg(night)));
    assert_eq!(styles.color("accent"), Some(brand));
    assert!(styles.entry("colors").is_none());
}

#[test]
fn test_add_color_shadows_builtin_names() {
    let styles = Styles::new().add_color("red", Color::CORAL);
    assert_eq!(styles.resolve_color("red").unwrap(), Color::CORAL);
    assert_eq!(styles.resolve_color("green").unwrap(), Color::GREEN);
}

#[test]
fn test_random_color_keyword() {
    let styles = Styles::from_yaml("confetti:\n  fg: random\nflash: random bright on random dim\n").unwrap();

    for (name, modifiers) in [
        ("confetti", vec![Modifier::ForegroundColor]),
        ("flash", vec![Modifier::ForegroundColor, Modifier::BackgroundColor]),
    ] {
        let style = styles.get(name).unwrap();
        for modifier in modifiers {
            match style.slot(modifier) {
                Slot::Code(code) => assert!(code.contains("8;2;"), "{} {:?}: {}", name, modifier, code),
                other => panic!("Expected a color code, got {:?}", other),
            }
        }
    }

    let drawn = styles.resolve_color("rand").unwrap();
    assert!(matches!(drawn.kind(), ColorCode::Rgb(..)));
}

#[test]
fn test_invalid_color_table_entry() {
    match Styles::from_yaml("colors:\n  brand: rgb(1, 2)\ntitle: brand\n") {
        Err(StylesheetError::InvalidColor { style, value, .. }) => {
            assert_eq!(style, "colors.brand");
            assert_eq!(value, "rgb(1, 2)");
        }
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

#[test]
fn test_non_integer_channel_reported() {
    match Styles::from_yaml("accent:\n  fg: [255, 12.5, 0]\n") {
        Err(StylesheetError::InvalidColor { style, value, source }) => {
            assert_eq!(style, "accent");
            assert_eq!(value, "12.5");
            assert_eq!(source.param(), "green");
        }
        other => panic!("Expected InvalidColor, got {:?}", other),
    }
}

// =============================================================================
// Templates
// =============================================================================

#[test]
fn test_render_with_stylesheet_colors() {
    let styles = Styles::from_yaml(THEMED).unwrap();
    let data = HashMap::from([("user", "ada"), ("balance", "1500000")]);

    let out = styles
        .render(
            r#"<@notice>{user}</@notice> owes <!fg="brand" weight="bold"><#money>{balance}</money></!>"#,
            &data,
        )
        .unwrap();
    assert_eq!(
        out,
        "<@notice>ada</@notice> owes \x1b[1m\x1b[38;2;255;136;0m1,500,000\x1b[0m"
    );

    let out = styles.render("<@notice>{user}</notice>", &data).unwrap();
    assert_eq!(out, "\x1b[38;2;255;136;0m\x1b[48;2;10;10;40mada\x1b[0m");
}

#[test]
fn test_render_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sheet(&dir, "motd.txt", "Welcome <@title>{name}</title>!\n");
    let styles = Styles::from_yaml(SHEET).unwrap();
    let data = HashMap::from([("name", "ops")]);

    let out = styles.render_file(&path, &data).unwrap();
    assert_eq!(out, "Welcome \x1b[1m\x1b[38;2;255;136;0mops\x1b[0m!\n");
}

#[test]
fn test_render_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    match Styles::new().render_file(&path, &HashMap::new()) {
        Err(RenderError::Load { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Load error, got {:?}", other),
    }
}
