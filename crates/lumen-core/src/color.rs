//! sRGB color math: hex conversion, relative luminance and WCAG contrast.
//!
//! The free functions mirror the loose behavior of the page controls: they
//! never fail, and malformed input simply produces meaningless numbers.
//! `Color::parse_hex` is the strict entry point for callers that want to
//! know about bad input.

use crate::{Error, Result};

const RED: f64 = 0.2126;
const GREEN: f64 = 0.7152;
const BLUE: f64 = 0.0722;
const GAMMA: f64 = 2.4;

/// Opaque sRGB color, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    /// Lenient parse, see [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Self {
        let (r, g, b) = hex_to_rgb(hex);
        Color(r, g, b)
    }

    /// Strict parse of `#rrggbb` (either case).
    pub fn parse_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Color(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn to_hex(self) -> String {
        rgb_to_hex(self.0 as f64, self.1 as f64, self.2 as f64)
    }

    pub fn luminance(self) -> f64 {
        luminance(self.0, self.1, self.2)
    }

    pub fn contrast_ratio(self, other: Color) -> f64 {
        ratio_of(self.luminance(), other.luminance())
    }

    /// Collapses the color to a gray whose channel value is its luminance
    /// scaled to 0..=255 (truncated).
    ///
    /// This is a single-channel approximation, it does not model any
    /// particular color vision deficiency.
    pub fn to_gray(self) -> Color {
        let level = self.luminance() * 255.0;
        Color::from_hex(&rgb_to_hex(level, level, level))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse_hex(s)
    }
}

/// Splits `#rrggbb` into its three channels.
///
/// The first character is skipped unchecked and the longest run of leading
/// hex digits after it is decoded (modulo 2^32). Nothing is validated: an
/// empty run decodes as zero and extra digits shift garbage into the channels.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let value = hex
        .chars()
        .skip(1)
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d));
    (
        ((value >> 16) & 255) as u8,
        ((value >> 8) & 255) as u8,
        (value & 255) as u8,
    )
}

/// Formats three channels as lowercase `#rrggbb`.
///
/// Inputs are truncated toward zero and only their low byte is kept.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    fn channel(v: f64) -> u8 {
        ((v.trunc() as i64) & 0xff) as u8
    }
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Relative luminance of an sRGB color in `0.0..=1.0`.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linear(v: u8) -> f64 {
        let v = v as f64 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(GAMMA)
        }
    }
    linear(r) * RED + linear(g) * GREEN + linear(b) * BLUE
}

/// WCAG contrast ratio between two hex colors, from 1.0 up to 21.0.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    Color::from_hex(a).contrast_ratio(Color::from_hex(b))
}

fn ratio_of(la: f64, lb: f64) -> f64 {
    let brightest = la.max(lb);
    let darkest = la.min(lb);
    (brightest + 0.05) / (darkest + 0.05)
}

/// Drops everything past `digits` decimal places without rounding.
pub fn truncate_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).trunc() / scale
}
