//! Output image dimensions.
//!
//! A [`Size`] is parsed from a `<width>x<height>` string such as `800x600`.
//! Both numbers must be positive and written without a leading zero; the
//! pattern must cover the whole string.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9][0-9]*)x([1-9][0-9]*)$").expect("valid size pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("failed to parse size {0:?}, expected <width>x<height>")]
    Syntax(String),
    #[error("failed to parse width {value:?}")]
    Width {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to parse height {value:?}")]
    Height {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Pixel dimensions of a generated image. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Parse `s` as `<width>x<height>`.
    pub fn parse(s: &str) -> Result<Self, SizeError> {
        let caps = SIZE_PATTERN
            .captures(s)
            .ok_or_else(|| SizeError::Syntax(s.to_string()))?;
        let (w, h) = (&caps[1], &caps[2]);
        let width = w.parse().map_err(|source| SizeError::Width {
            value: w.to_string(),
            source,
        })?;
        let height = h.parse().map_err(|source| SizeError::Height {
            value: h.to_string(),
            source,
        })?;
        Ok(Self { width, height })
    }

    /// Number of pixels covered by this size.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
