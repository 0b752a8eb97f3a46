//! Hex color parsing.
//!
//! Accepts lowercase `rrggbb` and the short form `rgb` (each digit doubled).
//! Callers strip any leading `#` first, see [`strip_hash`]. The parsed
//! [`Color`] carries its canonical six-digit string, which doubles as the
//! output file stem.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use image::Rgba;
use regex::Regex;
use thiserror::Error;

/// Alpha channel of every generated color.
pub const OPAQUE: u8 = 255;

// Tried in order: long form first, then the short form.
static HEX_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid hex pattern"),
        Regex::new(r"^([0-9a-f])([0-9a-f])([0-9a-f])$").expect("valid short hex pattern"),
    ]
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("{0:?} is not a hex color")]
    NotHex(String),
}

/// An opaque RGB color and its canonical lowercase hex form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    hex: String,
}

impl Color {
    /// Parse `hex` (without a leading `#`) as a 6- or 3-digit lowercase hex
    /// color.
    ///
    /// # Errors
    /// Returns [`ColorError::NotHex`] when the input matches neither form,
    /// e.g. wrong length, uppercase digits, or non-hex characters.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        let caps = HEX_PATTERNS
            .iter()
            .find_map(|re| re.captures(hex))
            .ok_or_else(|| ColorError::NotHex(hex.to_string()))?;

        let mut channels = [0u8; 3];
        let mut canonical = String::with_capacity(6);
        for (channel, group) in channels.iter_mut().zip(caps.iter().skip(1).flatten()) {
            let digits = group.as_str();
            let pair = if digits.len() == 1 {
                digits.repeat(2)
            } else {
                digits.to_string()
            };
            // The pattern only admits hex digits, so this cannot fail.
            *channel = u8::from_str_radix(&pair, 16)
                .map_err(|_| ColorError::NotHex(hex.to_string()))?;
            canonical.push_str(&pair);
        }

        let [red, green, blue] = channels;
        Ok(Self {
            red,
            green,
            blue,
            hex: canonical,
        })
    }

    /// The canonical six lowercase hex digits, e.g. `aabbcc`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgba(&self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, OPAQUE])
    }

    /// Output file name for this color: `<hex>.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Remove every leading `#` from a raw input line.
pub fn strip_hash(raw: &str) -> &str {
    raw.trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form() {
        let c = Color::parse("1a2b3c").unwrap();
        assert_eq!((c.red, c.green, c.blue), (0x1a, 0x2b, 0x3c));
        assert_eq!(c.rgba().0[3], OPAQUE);
        assert_eq!(c.hex(), "1a2b3c");
        assert_eq!(c.file_name(), "1a2b3c.png");
    }

    #[test]
    fn doubles_short_form() {
        let c = Color::parse("abc").unwrap();
        assert_eq!((c.red, c.green, c.blue), (0xaa, 0xbb, 0xcc));
        assert_eq!(c.hex(), "aabbcc");
        assert_eq!(c.rgba(), Rgba([0xaa, 0xbb, 0xcc, 255]));
    }

    #[test]
    fn rejects_uppercase_length_and_garbage() {
        for bad in ["ABC", "FFfFFF", "ab", "abcd", "abcdef0", "", "ggg", "12 34 5", "fff "] {
            assert_eq!(
                Color::parse(bad),
                Err(ColorError::NotHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn canonical_form_reparses_to_same_color() {
        for input in ["f00", "000000", "ffffff", "09c", "7f7f80"] {
            let first = Color::parse(input).unwrap();
            let second: Color = first.to_string().parse().unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn strip_hash_removes_all_leading_hashes() {
        assert_eq!(strip_hash("#fff"), "fff");
        assert_eq!(strip_hash("##fff"), "fff");
        assert_eq!(strip_hash("fff"), "fff");
        assert_eq!(strip_hash("f#ff"), "f#ff");
        assert!(Color::parse(strip_hash("#ffffff")).is_ok());
    }
}
