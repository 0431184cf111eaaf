//! Hue / saturation / brightness representation
//!
//! HSB (also called HSV) is the cylindrical form of RGB used by the
//! brightness, saturation and hue transforms in [`adjust`](super::adjust).
//! Hue is stored as a fraction of a full turn so that `0.0..1.0` maps onto
//! `0..360` degrees.

use super::rgba::Color;

/// A color expressed as hue, saturation, brightness and alpha.
///
/// # Components
///
/// - `hue`: fraction of a full turn, `0.0..1.0` (red = 0.0, green = 1/3, blue = 2/3)
/// - `saturation`: 0.0 (grey) to 1.0 (fully saturated)
/// - `brightness`: 0.0 (black) to 1.0 (maximum channel value)
/// - `alpha`: carried through unchanged
///
/// # Note
///
/// For achromatic colors hue is undefined; the conversion reports 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a full turn (0.0..1.0)
    pub hue: f64,
    /// Saturation (0.0..=1.0)
    pub saturation: f64,
    /// Brightness, the largest RGB channel (0.0..=1.0)
    pub brightness: f64,
    /// Opacity (0.0..=1.0)
    pub alpha: f64,
}

impl Hsb {
    /// Create a new HSB color.
    #[inline]
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Hue in degrees (0.0..360.0).
    #[inline]
    pub fn hue_degrees(self) -> f64 {
        self.hue * 360.0
    }
}

impl From<Color> for Hsb {
    /// Convert RGB to HSB.
    ///
    /// # Example
    ///
    /// ```
    /// use tint_core::{Color, Hsb};
    ///
    /// let hsb = Hsb::from(Color::rgb(0.0, 1.0, 0.0));
    /// assert!((hsb.hue_degrees() - 120.0).abs() < 1e-9);
    /// assert_eq!(hsb.saturation, 1.0);
    /// assert_eq!(hsb.brightness, 1.0);
    /// ```
    fn from(c: Color) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if delta <= 0.0 {
            0.0
        } else if max == c.r {
            ((c.g - c.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == c.g {
            ((c.b - c.r) / delta + 2.0) / 6.0
        } else {
            ((c.r - c.g) / delta + 4.0) / 6.0
        };

        Self {
            hue: wrap_unit(hue),
            saturation,
            brightness: max,
            alpha: c.a,
        }
    }
}

impl From<Hsb> for Color {
    /// Convert HSB back to RGB.
    ///
    /// Hue outside `0.0..1.0` wraps around.
    fn from(hsb: Hsb) -> Self {
        let v = hsb.brightness;
        let s = hsb.saturation;

        let sector = wrap_unit(hsb.hue) * 6.0;
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::new(r, g, b, hsb.alpha)
    }
}

/// Wrap a turn fraction into `0.0..1.0`.
#[inline]
pub(crate) fn wrap_unit(turns: f64) -> f64 {
    let wrapped = turns.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
