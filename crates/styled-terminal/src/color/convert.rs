//! Color-space conversions and fragment parsing.

use super::ColorCode;

/// Converts HSL to RGB channels.
///
/// `hue` is in degrees (0–360), `saturation` and `lightness` are percentages
/// (0–100). Callers validate the ranges. Each channel is rounded to the
/// nearest integer.
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let a = s * l.min(1.0 - l);
    let k = |n: f64| (n + hue / 30.0) % 12.0;
    let f = |n: f64| {
        let k = k(n);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    (to_channel(f(0.0)), to_channel(f(8.0)), to_channel(f(4.0)))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parses `rgb`/`rrggbb` hex digits with an optional leading `#`.
pub(crate) fn parse_hex(code: &str) -> Option<(u8, u8, u8)> {
    let digits = code.strip_prefix('#').unwrap_or(code);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
            let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
            let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parses a raw `5;N` or `2;R;G;B` fragment.
pub(crate) fn parse_code(code: &str) -> Option<ColorCode> {
    let mut parts = code.split(';');
    let kind = parts.next()?;
    let values = parts.map(parse_code_value).collect::<Option<Vec<u8>>>()?;

    match (kind, values.as_slice()) {
        ("5", &[index]) => Some(ColorCode::Palette(index)),
        ("2", &[r, g, b]) => Some(ColorCode::Rgb(r, g, b)),
        _ => None,
    }
}

/// A decimal 0–255 without sign, padding or leading zeros.
fn parse_code_value(value: &str) -> Option<u8> {
    let well_formed = !value.is_empty()
        && value.len() <= 3
        && value.bytes().all(|b| b.is_ascii_digit())
        && !(value.len() > 1 && value.starts_with('0'));
    if !well_formed {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_secondaries() {
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), (255, 255, 0));
        assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), (0, 255, 255));
        assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0), (255, 0, 255));
    }

    #[test]
    fn test_parse_hex_shorthand_duplicates_digits() {
        assert_eq!(parse_hex("abc"), parse_hex("aabbcc"));
        assert_eq!(parse_hex("#000"), Some((0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_non_ascii() {
        assert_eq!(parse_hex("é12"), None);
        assert_eq!(parse_hex("+12"), None);
    }

    #[test]
    fn test_parse_code_value() {
        assert_eq!(parse_code_value("0"), Some(0));
        assert_eq!(parse_code_value("255"), Some(255));
        assert_eq!(parse_code_value("256"), None);
        assert_eq!(parse_code_value("007"), None);
        assert_eq!(parse_code_value("+7"), None);
    }
}
