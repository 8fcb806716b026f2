//! Colours and the severity palette

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;
use crate::severity::Severity;

/// An RGBA colour with 8 bits per channel.
///
/// Formats as upper-case `RRGGBBAA` hex and parses from `RRGGBB` or
/// `RRGGBBAA`, with an optional leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Colour {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConsoleError::InvalidColour(s.to_string());
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());

        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { channel(6)? } else { 0xFF };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Colour {
    type Error = ConsoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

/// Colours used to annotate each non-info severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityPalette {
    pub warning: Colour,
    pub assertion: Colour,
    pub error: Colour,
    pub exception: Colour,
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            warning: Colour::rgb(0xFF, 0xFF, 0x00),
            assertion: Colour::rgb(0xFF, 0x80, 0x00),
            error: Colour::rgb(0xFF, 0x00, 0x00),
            exception: Colour::rgb(0xFF, 0x00, 0xFF),
        }
    }
}

impl SeverityPalette {
    /// Resolve the annotation colour for a severity; `None` means unannotated
    pub fn colour_for(&self, severity: Severity) -> Option<Colour> {
        match severity {
            Severity::Info => None,
            Severity::Warning => Some(self.warning),
            Severity::Assertion => Some(self.assertion),
            Severity::Error => Some(self.error),
            Severity::Exception => Some(self.exception),
        }
    }
}
