//! Property-based tests for colors and style application.

use console::strip_ansi_codes;
use proptest::prelude::*;
use styled_terminal::{Color, Style, END_SEQUENCE};

// ============================================================================
// Strategies
// ============================================================================

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        (0i64..=255).prop_map(|i| Color::from_palette_index(i).unwrap()),
        (0i64..=255, 0i64..=255, 0i64..=255).prop_map(|(r, g, b)| Color::from_rgb(r, g, b).unwrap()),
    ]
}

/// Styles with at least one concrete code, so the prefix is never empty.
fn visible_style_strategy() -> impl Strategy<Value = Style> {
    (
        prop::sample::select(vec!["bold", "light", "italic", "underline", "invert"]),
        prop::option::of(color_strategy()),
        prop::option::of(color_strategy()),
    )
        .prop_map(|(modifier, fg, bg)| {
            let mut style = match modifier {
                "bold" => Style::new().bold(),
                "light" => Style::new().light(),
                "italic" => Style::new().italic(),
                "underline" => Style::new().underline(),
                _ => Style::new().invert(),
            };
            if let Some(fg) = fg {
                style = style.fg(fg);
            }
            if let Some(bg) = bg {
                style = style.bg(bg);
            }
            style
        })
}

/// Printable text that never contains an escape character.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:!?-]{1,40}"
}

// ============================================================================
// Colors
// ============================================================================

proptest! {
    /// Every palette index round-trips into its fragment.
    #[test]
    fn palette_index_round_trips(index in 0i64..=255) {
        let color = Color::from_palette_index(index).unwrap();
        prop_assert_eq!(color.code(), format!("5;{}", index));
        prop_assert_eq!(color.palette_index(), Some(index as u8));
    }

    /// Indices outside the table always fail.
    #[test]
    fn palette_index_out_of_range_fails(
        index in prop_oneof![i64::MIN..0i64, 256i64..=i64::MAX],
    ) {
        prop_assert!(Color::from_palette_index(index).is_err());
    }

    /// RGB channels appear in order in the fragment.
    #[test]
    fn rgb_round_trips(r in 0i64..=255, g in 0i64..=255, b in 0i64..=255) {
        let color = Color::from_rgb(r, g, b).unwrap();
        prop_assert_eq!(color.code(), format!("2;{};{};{}", r, g, b));
    }

    /// A single channel out of range is enough to fail.
    #[test]
    fn rgb_out_of_range_fails(
        good in 0i64..=255,
        bad in prop_oneof![-1000i64..0, 256i64..1000],
        position in 0usize..3,
    ) {
        let mut channels = [good; 3];
        channels[position] = bad;
        prop_assert!(Color::from_rgb(channels[0], channels[1], channels[2]).is_err());
    }

    /// Hex decoding inverts hex encoding.
    #[test]
    fn hex_is_left_inverse(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        let expected = Color::from_rgb(r.into(), g.into(), b.into()).unwrap();
        prop_assert_eq!(Color::from_hex(&hex).unwrap(), expected);
        prop_assert_eq!(Color::from_hex(&hex.to_uppercase()).unwrap(), expected);
    }

    /// Three-digit shorthand duplicates each digit.
    #[test]
    fn hex_shorthand_duplicates_digits(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("{:x}{:x}{:x}", r, g, b);
        let long = format!("{:x}{:x}{:x}{:x}{:x}{:x}", r, r, g, g, b, b);
        prop_assert_eq!(Color::from_hex(&short).unwrap(), Color::from_hex(&long).unwrap());
    }

    /// HSL inputs inside the documented ranges always produce a color.
    #[test]
    fn hsl_in_range_succeeds(h in 0.0f64..=360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let color = Color::from_hsl(h, s, l).unwrap();
        prop_assert!(color.rgb().is_some());
    }
}

// ============================================================================
// Style application
// ============================================================================

proptest! {
    /// An empty style never changes text.
    #[test]
    fn empty_style_is_identity(text in ".*") {
        prop_assert_eq!(Style::new().apply(&text), text);
    }

    /// Reset discards everything chained before it.
    #[test]
    fn reset_yields_empty_style(style in visible_style_strategy()) {
        prop_assert_eq!(style.reset(), Style::new());
    }

    /// Marker-free text is wrapped in prefix and one end sequence.
    #[test]
    fn apply_wraps_plain_text(style in visible_style_strategy(), text in plain_text()) {
        let expected = format!("{}{}{}", style.prefix(), text, END_SEQUENCE);
        prop_assert_eq!(style.apply(&text), expected);
    }

    /// The outer prefix is restored right after a nested region ends.
    #[test]
    fn nested_apply_restores_outer(
        outer in visible_style_strategy(),
        inner in visible_style_strategy(),
        a in plain_text(),
        b in plain_text(),
        c in plain_text(),
    ) {
        let nested = format!("{} {} {}", a, inner.apply(&b), c);
        let out = outer.apply(&nested);

        let resumed = format!("{}{} {}", END_SEQUENCE, outer.prefix(), c);
        prop_assert!(out.contains(&resumed));
        prop_assert!(out.starts_with(&outer.prefix()));
        prop_assert!(out.ends_with(END_SEQUENCE));
        prop_assert_eq!(strip_ansi_codes(&out), format!("{} {} {}", a, b, c));
    }

    /// Styling never alters the visible characters.
    #[test]
    fn apply_preserves_visible_text(style in visible_style_strategy(), text in plain_text()) {
        let styled = style.apply(&text);
        prop_assert_eq!(strip_ansi_codes(&styled), text);
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_bold_palette_scenario() {
    let style = Style::new().bold().fg(Color::from_palette_index(1).unwrap());
    assert_eq!(style.apply("x"), "\x1b[1m\x1b[38;5;1mx\x1b[0m");
}

#[test]
fn test_reset_scenario() {
    let style = Style::new().bold().fg(Color::CYAN).reset();
    assert_eq!(style.apply("x"), "x");
}

#[test]
fn test_hsl_matches_manual_conversion() {
    // h=0, s=0.5, l=0.25: chroma spans 0.125..0.375 of full scale.
    let color = Color::from_hsl(0.0, 50.0, 25.0).unwrap();
    assert_eq!(color, Color::from_rgb(96, 32, 32).unwrap());
}
