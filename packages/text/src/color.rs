//! RGBA colors with 8-bit channels.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors that can occur when parsing a hex color string.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// A character that is not a hex digit was encountered at the specified index.
    #[error("Invalid character at index {0} '{1}'")]
    InvalidCharacter(usize, char),
    /// The hex string is not 3, 4, 6 or 8 digits long.
    #[error("Hex string has invalid length {0}")]
    InvalidLength(usize),
}

/// A color with red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha channel (0-255), 255 being fully opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
    /// Black.
    pub const BLACK: Self = Self::gray(0);
    /// One-third white.
    pub const DARK_GRAY: Self = Self::gray(85);
    /// Half white.
    pub const GRAY: Self = Self::gray(128);
    /// Two-thirds white.
    pub const LIGHT_GRAY: Self = Self::gray(170);
    /// White.
    pub const WHITE: Self = Self::gray(255);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    /// A color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque gray with all three channels set to `white`.
    #[must_use]
    pub const fn gray(white: u8) -> Self {
        Self::rgb(white, white, white)
    }

    /// The same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Parses `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA` hex, with an optional `#` prefix and
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// * `ParseColorError::InvalidCharacter` - If a character is not a hex digit.
    /// * `ParseColorError::InvalidLength` - If the digit count is not 3, 4, 6 or 8.
    pub fn try_from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let digits = hex
            .chars()
            .enumerate()
            .map(|(i, c)| {
                c.to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(ParseColorError::InvalidCharacter(i, c))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let channels = match digits.len() {
            3 | 4 => digits.iter().map(|d| (d << 4) | d).collect::<Vec<_>>(),
            6 | 8 => digits
                .chunks(2)
                .map(|pair| (pair[0] << 4) | pair[1])
                .collect(),
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels.get(3).copied().unwrap_or(u8::MAX),
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}
