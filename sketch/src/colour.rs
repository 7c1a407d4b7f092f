use std::str::FromStr;

use serde_derive::Deserialize;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ColourError {
    #[error("colour must look like #RRGGBB, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in colour {0:?}")]
    Digits(String),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(try_from = "String")]
pub struct Colour(pub [f32; 4]);

impl Colour {
    pub const BLACK: Colour = Colour([0.0, 0.0, 0.0, 1.0]);
    pub const RED: Colour = Colour([1.0, 0.0, 0.0, 1.0]);
    pub const TRANSPARENT: Colour = Colour([0.0, 0.0, 0.0, 0.0]);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour([r, g, b, a])
    }

    pub fn raw(self) -> [f32; 4] {
        self.0
    }

    pub fn arr(&self) -> &[f32] {
        &self.0
    }

    /// Parse a `#RRGGBB` colour as produced by an HTML colour input. There is
    /// no alpha channel; the result is always opaque.
    pub fn from_hex(hex: &str) -> Result<Colour, ColourError> {
        let digits = match hex.strip_prefix('#') {
            Some(d) if d.len() == 6 && d.is_ascii() => d,
            _ => return Err(ColourError::Format(hex.to_string())),
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColourError::Digits(hex.to_string()));
        }

        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColourError::Digits(hex.to_string()))?;

        let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
        Ok(Colour([channel(16), channel(8), channel(0), 1.0]))
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::RED
    }
}

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s.trim())
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
