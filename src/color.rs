// filepath: src/color.rs
//! Color values and their hexadecimal encoding
//!
//! Colors are plain RGB triples with channels normalized to `0.0..=1.0`.
//! The `#rrggbb` form is what the config file uses, and the byte helpers
//! produce what the shared-memory buffer expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not exactly six hex digits after an optional `#`
    #[error("invalid hex color {0:?}: expected 6 hexadecimal digits")]
    InvalidFormat(String),
}

/// An opaque RGB color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
}

/// Const-friendly 8-bit constructor.
macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::color::Color {
            r: $r as f64 / 255.0,
            g: $g as f64 / 255.0,
            b: $b as f64 / 255.0,
        }
    };
}
pub(crate) use rgb8;

pub const BLACK: Color = rgb8!(0, 0, 0);
pub const GRAY: Color = rgb8!(128, 128, 128);
pub const RED: Color = rgb8!(255, 0, 0);
pub const ORANGE: Color = rgb8!(255, 165, 0);
pub const CORNSILK: Color = rgb8!(255, 248, 220);
pub const CORAL: Color = rgb8!(255, 127, 80);
pub const GREEN: Color = rgb8!(0, 128, 0);
pub const TEAL: Color = rgb8!(0, 128, 128);
pub const CYAN: Color = rgb8!(0, 255, 255);
pub const BLUE: Color = rgb8!(0, 0, 255);
pub const MAGENTA: Color = rgb8!(255, 0, 255);
pub const WHITE: Color = rgb8!(255, 255, 255);

impl Color {
    /// Build a color from normalized channels, clamping each into range.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        rgb8!(r, g, b)
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }

    /// Opaque pixel in the byte order of a little-endian `Argb8888` buffer.
    pub fn to_bgra(&self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [b, g, r, 0xff]
    }

    /// Encode as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f64, ColorError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ColorError::InvalidFormat(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
