//! Brightness, saturation and hue adjustments in HSB space
//!
//! Each adjustment converts to [`Hsb`], changes one component, and converts
//! back. Alpha is always preserved. Parameters are clamped, never rejected.

use super::hsb::{wrap_unit, Hsb};
use super::rgba::Color;

/// Clamp into `0.0..=1.0`.
#[inline]
pub(crate) fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

impl Color {
    #[inline]
    fn map_hsb(self, f: impl FnOnce(Hsb) -> Hsb) -> Color {
        Color::from(f(Hsb::from(self)))
    }

    /// Add `amount` to HSB brightness, clamped to `0.0..=1.0`.
    ///
    /// # Arguments
    /// * `amount` - Brightness delta, typically `-1.0..=1.0`
    pub fn adjust_brightness(self, amount: f64) -> Color {
        self.map_hsb(|hsb| Hsb {
            brightness: unit(hsb.brightness + amount),
            ..hsb
        })
    }

    /// Force HSB brightness into `minimum..=maximum`.
    ///
    /// An inverted range (`minimum > maximum`) collapses to `maximum`.
    ///
    /// # Example
    /// ```
    /// use tint_core::{Color, Hsb};
    /// let dim = Color::rgb(0.1, 0.05, 0.0).clamped_brightness(0.3, 0.8);
    /// assert!((Hsb::from(dim).brightness - 0.3).abs() < 1e-9);
    /// ```
    pub fn clamped_brightness(self, minimum: f64, maximum: f64) -> Color {
        self.map_hsb(|hsb| Hsb {
            brightness: hsb.brightness.max(minimum).min(maximum),
            ..hsb
        })
    }

    /// Add `amount` to HSB saturation, clamped to `0.0..=1.0`.
    pub fn increased_saturation(self, amount: f64) -> Color {
        self.map_hsb(|hsb| Hsb {
            saturation: unit(hsb.saturation + amount),
            ..hsb
        })
    }

    /// Subtract `amount` from HSB saturation, clamped to `0.0..=1.0`.
    pub fn desaturated(self, amount: f64) -> Color {
        self.map_hsb(|hsb| Hsb {
            saturation: unit(hsb.saturation - amount),
            ..hsb
        })
    }

    /// Drop hue and saturation, keep HSB brightness.
    ///
    /// Unlike [`grayscale`](Self::grayscale) the result's grey level is the
    /// largest channel, not the channel average.
    pub fn grayscale_preserving_brightness(self) -> Color {
        self.map_hsb(|hsb| Hsb {
            hue: 0.0,
            saturation: 0.0,
            ..hsb
        })
    }

    /// Replace HSB brightness with `1 - brightness`.
    pub fn inverted_brightness(self) -> Color {
        self.map_hsb(|hsb| Hsb {
            brightness: 1.0 - hsb.brightness,
            ..hsb
        })
    }

    /// Set HSB brightness to exactly 0.5.
    pub fn normalized_brightness(self) -> Color {
        self.map_hsb(|hsb| Hsb {
            brightness: 0.5,
            ..hsb
        })
    }

    /// Rotate hue by `degrees`; the result wraps into `0.0..1.0` turns.
    ///
    /// # Example
    /// ```
    /// use tint_core::{Color, Hsb};
    /// let green = Color::rgb(1.0, 0.0, 0.0).hue_rotated(120.0);
    /// assert!((Hsb::from(green).hue_degrees() - 120.0).abs() < 1e-9);
    /// ```
    pub fn hue_rotated(self, degrees: f64) -> Color {
        self.map_hsb(|hsb| Hsb {
            hue: wrap_unit(hsb.hue + degrees / 360.0),
            ..hsb
        })
    }
}
