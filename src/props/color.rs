//! Fill color parsing: `0xRRGGBBAA`, decimal, `#RGB`, `#RGBA`, `#RRGGBB`,
//! `#RRGGBBAA` and a handful of names.

use crate::config::FillColor;

/// Parse a fill color.
///
/// Accepts:
/// - `0xRRGGBBAA`: the packed value itself, 1 to 8 hex digits
/// - `4278190335`: the packed value in decimal
/// - `#RGB` / `#RGBA`: short hex, each nibble doubled, alpha defaults to `FF`
/// - `#RRGGBB` / `#RRGGBBAA`: long hex, alpha defaults to `FF`
/// - `black`, `white`, `transparent`, `red`, `green`, `blue` (case-insensitive)
pub(crate) fn parse_color(s: &str) -> Option<FillColor> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_css_hex(hex);
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || hex.len() > 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(FillColor);
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u32>().ok().map(FillColor);
    }

    lookup_named(s)
}

fn parse_css_hex(hex: &str) -> Option<FillColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let b = hex.as_bytes();

    match b.len() {
        3 => Some(FillColor::from_rgba(
            expand_nibble(b[0])?,
            expand_nibble(b[1])?,
            expand_nibble(b[2])?,
            0xFF,
        )),
        4 => Some(FillColor::from_rgba(
            expand_nibble(b[0])?,
            expand_nibble(b[1])?,
            expand_nibble(b[2])?,
            expand_nibble(b[3])?,
        )),
        6 => Some(FillColor::from_rgba(
            parse_byte(b[0], b[1])?,
            parse_byte(b[2], b[3])?,
            parse_byte(b[4], b[5])?,
            0xFF,
        )),
        8 => Some(FillColor::from_rgba(
            parse_byte(b[0], b[1])?,
            parse_byte(b[2], b[3])?,
            parse_byte(b[4], b[5])?,
            parse_byte(b[6], b[7])?,
        )),
        _ => None,
    }
}

/// 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn lookup_named(name: &str) -> Option<FillColor> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| name.eq_ignore_ascii_case(n))
        .map(|&(_, c)| c)
}

/// CSS values for the supported names.
const NAMED_COLORS: &[(&str, FillColor)] = &[
    ("black", FillColor::BLACK),
    ("blue", FillColor::from_rgba(0, 0, 255, 255)),
    ("green", FillColor::from_rgba(0, 128, 0, 255)),
    ("red", FillColor::from_rgba(255, 0, 0, 255)),
    ("transparent", FillColor::TRANSPARENT),
    ("white", FillColor::WHITE),
];
