//! Parsing and formatting of `#RRGGBB` and `#RRGGBBAA` text.

use std::fmt;
use std::str::FromStr;

use crate::{color::Color, error::HexError};

/// Parse a hex color, with or without a leading `#`. Six digits give an
/// opaque color, eight digits include alpha.
pub fn parse_hex(text: &str) -> Result<Color, HexError> {
    let digits = text.strip_prefix('#').unwrap_or(text);

    if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(invalid));
    }

    // Every character is a hex digit at this point, so parsing cannot fail.
    let value = |digits: &str| {
        u32::from_str_radix(digits, 16).map_err(|_| HexError::InvalidLength(digits.len()))
    };

    match digits.len() {
        6 => {
            let [_, red, green, blue] = value(digits)?.to_be_bytes();
            Ok(Color::new(red, green, blue, 255))
        }
        8 => {
            let [red, green, blue, alpha] = value(digits)?.to_be_bytes();
            Ok(Color::new(red, green, blue, alpha))
        }
        len => Err(HexError::InvalidLength(len)),
    }
}

impl Color {
    /// Format as `#RRGGBBAA` with upper case digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
