//! Hex color utilities.
//!
//! Converts between hex strings, 24-bit integers, and RGB(A) channel
//! tuples. Every function takes the prefix as an argument (`"#"`,
//! `"0x"`), and only the low 24 bits of integer input are read.

use crate::format_number;

/// RGB channels extracted from a 24-bit color.
pub type RgbTuple = [u8; 3];

/// RGB channels plus an alpha component in `0.0..=1.0`.
pub type RgbaTuple = (u8, u8, u8, f64);

/// A color argument: a 24-bit integer or a hex string.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Number(u32),
    Text(String),
}

impl From<u32> for ColorInput {
    fn from(value: u32) -> Self {
        ColorInput::Number(value)
    }
}

impl From<i32> for ColorInput {
    fn from(value: i32) -> Self {
        ColorInput::Number(value as u32)
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        ColorInput::Text(value)
    }
}

/// Whether `value` is a prefixed three-digit hex string like `#fff`.
/// The prefix must be present; a bare `fff` is not short hex.
pub fn is_short_hex(value: &str, prefix: &str) -> bool {
    match value.strip_prefix(prefix) {
        Some(body) => body.len() == 3,
        None => false,
    }
}

/// Expand a short hex string by doubling each digit (`#abc` → `#aabbcc`).
/// Anything that is not short hex passes through unchanged.
pub fn short_to_long_hex(value: &str, prefix: &str) -> String {
    if !is_short_hex(value, prefix) {
        return value.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + 6);
    out.push_str(prefix);
    for ch in value[prefix.len()..].chars() {
        out.push(ch);
        out.push(ch);
    }
    out
}

/// Parse a hex string into its 24-bit integer value.
///
/// Short form expands first, then the prefix is stripped and the rest
/// parses base-16. Unparseable input yields 0.
pub fn to_hex_number(value: &str, prefix: &str) -> u32 {
    let expanded = if is_short_hex(value, prefix) {
        short_to_long_hex(value, prefix)
    } else {
        value.to_string()
    };
    let body = expanded.strip_prefix(prefix).unwrap_or(&expanded);
    u32::from_str_radix(body, 16).unwrap_or(0)
}

/// Render a 24-bit integer as a prefixed six-digit hex string.
///
/// Always zero-padded, so the output is never itself short form and
/// `to_hex_number` reads it back exactly.
pub fn to_hex_string(value: u32, prefix: &str) -> String {
    format!("{prefix}{value:06x}")
}

/// Extract the RGB channels of a color.
pub fn to_rgb_tuple(value: impl Into<ColorInput>, prefix: &str) -> RgbTuple {
    let t = match value.into() {
        ColorInput::Number(n) => n,
        ColorInput::Text(s) => to_hex_number(&s, prefix),
    };
    let r = ((t & 0xFF0000) >> 16) as u8;
    let g = ((t & 0xFF00) >> 8) as u8;
    let b = (t & 0xFF) as u8;
    [r, g, b]
}

/// Render the RGB channels joined with commas, e.g. `"255,128,0"`.
pub fn to_rgb_string(value: impl Into<ColorInput>, prefix: &str) -> String {
    to_rgb_tuple(value, prefix).map(|c| c.to_string()).join(",")
}

/// Extract the RGB channels plus a caller-supplied alpha.
pub fn to_rgba_tuple(value: impl Into<ColorInput>, alpha: f64, prefix: &str) -> RgbaTuple {
    let [r, g, b] = to_rgb_tuple(value, prefix);
    (r, g, b, alpha)
}

/// Render the RGBA components joined with commas, e.g. `"255,128,0,0.5"`.
pub fn to_rgba_string(value: impl Into<ColorInput>, alpha: f64, prefix: &str) -> String {
    let (r, g, b, a) = to_rgba_tuple(value, alpha, prefix);
    format!("{r},{g},{b},{}", format_number(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Short hex detection and expansion
    // =========================================================================

    #[test]
    fn test_is_short_hex() {
        assert!(is_short_hex("#fff", "#"));
        assert!(is_short_hex("0xabc", "0x"));
        assert!(!is_short_hex("#ffffff", "#"));
        assert!(!is_short_hex("#ff", "#"));
    }

    #[test]
    fn test_is_short_hex_requires_prefix() {
        assert!(!is_short_hex("fff", "#"));
        assert!(!is_short_hex("#fff", "0x"));
    }

    #[test]
    fn test_short_to_long_hex() {
        assert_eq!(short_to_long_hex("#fff", "#"), "#ffffff");
        assert_eq!(short_to_long_hex("#abc", "#"), "#aabbcc");
        assert_eq!(short_to_long_hex("0x123", "0x"), "0x112233");
    }

    #[test]
    fn test_short_to_long_hex_passthrough() {
        assert_eq!(short_to_long_hex("#aabbcc", "#"), "#aabbcc");
        assert_eq!(short_to_long_hex("fff", "#"), "fff");
    }

    // =========================================================================
    // Hex <-> integer
    // =========================================================================

    #[test]
    fn test_to_hex_number() {
        assert_eq!(to_hex_number("#ffffff", "#"), 0xFFFFFF);
        assert_eq!(to_hex_number("#fff", "#"), 0xFFFFFF);
        assert_eq!(to_hex_number("0xfff", "0x"), 0xFFFFFF);
        assert_eq!(to_hex_number("#000000", "#"), 0);
    }

    #[test]
    fn test_to_hex_number_unprefixed_body() {
        assert_eq!(to_hex_number("aabbcc", "#"), 0xAABBCC);
        assert_eq!(to_hex_number("fff", "#"), 0xFFF);
    }

    #[test]
    fn test_to_hex_number_invalid_is_zero() {
        assert_eq!(to_hex_number("not-a-color", "#"), 0);
        assert_eq!(to_hex_number("", "#"), 0);
    }

    #[test]
    fn test_to_hex_string_zero_pads() {
        assert_eq!(to_hex_string(0xFFFFFF, "#"), "#ffffff");
        assert_eq!(to_hex_string(0xABC, "#"), "#000abc");
        assert_eq!(to_hex_string(0, "#"), "#000000");
        assert_eq!(to_hex_string(0xF, "0x"), "0x00000f");
    }

    #[test]
    fn test_hex_roundtrip() {
        for value in [0x000000, 0x00000F, 0x000ABC, 0x123456, 0xABCDEF, 0xFFFFFF] {
            let s = to_hex_string(value, "#");
            assert_eq!(to_hex_number(&s, "#"), value, "value {value:#x}");
        }
    }

    // =========================================================================
    // Channel extraction
    // =========================================================================

    #[test]
    fn test_to_rgb_tuple() {
        assert_eq!(to_rgb_tuple(0xFFFFFF, "#"), [255, 255, 255]);
        assert_eq!(to_rgb_tuple(0x000000, "#"), [0, 0, 0]);
        assert_eq!(to_rgb_tuple(0xFF8000, "#"), [255, 128, 0]);
    }

    #[test]
    fn test_to_rgb_tuple_from_string() {
        assert_eq!(to_rgb_tuple("#fff", "#"), [255, 255, 255]);
        assert_eq!(to_rgb_tuple("#ff8000", "#"), [255, 128, 0]);
    }

    #[test]
    fn test_to_rgb_tuple_reads_low_24_bits() {
        assert_eq!(to_rgb_tuple(0x01FF8000, "#"), [255, 128, 0]);
    }

    #[test]
    fn test_to_rgb_string() {
        assert_eq!(to_rgb_string(0xFF8000, "#"), "255,128,0");
        assert_eq!(to_rgb_string("#fff", "#"), "255,255,255");
    }

    #[test]
    fn test_to_rgba_tuple() {
        assert_eq!(to_rgba_tuple(0xFF8000, 0.5, "#"), (255, 128, 0, 0.5));
    }

    #[test]
    fn test_to_rgba_string() {
        assert_eq!(to_rgba_string(0xFF8000, 0.5, "#"), "255,128,0,0.5");
        assert_eq!(to_rgba_string(0xFFFFFF, 1.0, "#"), "255,255,255,1");
    }
}
