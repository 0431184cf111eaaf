//! RGBA color type
//!
//! [`Color`] is the single input and output type of the color module. Every
//! channel is a normalized `f64` and every transform returns a new value.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color with red, green, blue and alpha channels.
///
/// Channels are normalized to 0.0..=1.0. The type is a plain value: two
/// colors are equal when their channels are equal.
///
/// Constructors do not clamp. Inputs are expected to be in range; the
/// transforms in this crate clamp their own parameters but otherwise pass
/// channels through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from normalized channels.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0)
    /// * `g` - Green channel (0.0..=1.0)
    /// * `b` - Blue channel (0.0..=1.0)
    /// * `a` - Alpha channel (0.0..=1.0)
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from normalized channels.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// let red = Color::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit channel values including alpha.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to `[R, G, B, A]` bytes.
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// let color = Color::new(1.0, 0.5, 0.0, 1.0);
    /// assert_eq!(color.to_rgba8(), [255, 128, 0, 255]);
    /// ```
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            to_byte(self.a),
        ]
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// The alpha channel.
    #[inline]
    pub fn opacity(self) -> f64 {
        self.a
    }

    /// Format as an uppercase hex string.
    ///
    /// Opaque colors use `#RRGGBB`; anything else includes alpha as
    /// `#RRGGBBAA`.
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// assert_eq!(Color::from_u8(51, 102, 204).to_hex(), "#3366CC");
    /// assert_eq!(Color::from_rgba8(0, 0, 0, 128).to_hex(), "#00000080");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RGB` - shorthand, each digit doubled
    /// - `#RRGGBB` - opaque color
    /// - `#RRGGBBAA` - color with alpha
    ///
    /// The leading `#` is optional, parsing is case-insensitive, and leading
    /// and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let white: Color = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Color::WHITE);
    ///
    /// let red: Color = "f00".parse().unwrap();
    /// assert_eq!(red, Color::from_u8(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&s[range], 16);

        match s.len() {
            3 => {
                // 0xF -> 0xFF
                let r = byte(0..1)? * 17;
                let g = byte(1..2)? * 17;
                let b = byte(2..3)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => Ok(Self::from_u8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
