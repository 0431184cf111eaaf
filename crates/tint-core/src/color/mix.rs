//! Channel-wise mixing in RGB space
//!
//! Tints, shades, blends and the simple per-channel transforms. Unlike
//! [`adjust`](super::adjust) nothing here goes through HSB.

use super::adjust::unit;
use super::rgba::Color;

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    // this form hits both endpoints exactly at t = 0 and t = 1
    from * (1.0 - t) + to * t
}

impl Color {
    /// Tint toward white for positive `weight`, shade toward black for negative.
    ///
    /// `weight` is clamped to `-1.0..=1.0`. A positive weight interpolates
    /// each RGB channel toward 1.0; a negative weight scales each channel by
    /// `1 + weight`. Alpha is preserved.
    pub fn tinted_or_shaded(self, weight: f64) -> Color {
        let weight = weight.clamp(-1.0, 1.0);
        if weight >= 0.0 {
            self.brightened(weight)
        } else {
            let scale = 1.0 + weight;
            Color::new(self.r * scale, self.g * scale, self.b * scale, self.a)
        }
    }

    /// Interpolate RGB toward white by `amount` (clamped to `0.0..=1.0`).
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// let white = Color::rgb(0.2, 0.4, 0.6).brightened(1.0);
    /// assert_eq!(white, Color::WHITE);
    /// ```
    pub fn brightened(self, amount: f64) -> Color {
        let t = unit(amount);
        Color::new(
            lerp(self.r, 1.0, t),
            lerp(self.g, 1.0, t),
            lerp(self.b, 1.0, t),
            self.a,
        )
    }

    /// Interpolate RGB toward black by `amount` (clamped to `0.0..=1.0`).
    pub fn darkened(self, amount: f64) -> Color {
        let t = unit(amount);
        Color::new(
            lerp(self.r, 0.0, t),
            lerp(self.g, 0.0, t),
            lerp(self.b, 0.0, t),
            self.a,
        )
    }

    /// Interpolate every channel, alpha included, from `self` to `other`.
    ///
    /// `ratio` is clamped to `0.0..=1.0`; 0.0 returns `self`, 1.0 returns `other`.
    pub fn blended(self, other: Color, ratio: f64) -> Color {
        let t = unit(ratio);
        Color::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
            lerp(self.a, other.a, t),
        )
    }

    /// Euclidean distance between two colors in RGB, ignoring alpha.
    ///
    /// Ranges from 0.0 (identical) to √3 (black vs white).
    pub fn distance(self, other: Color) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// `1 - channel` for red, green and blue. Alpha is preserved.
    #[inline]
    pub fn inverted(self) -> Color {
        Color::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Grey at the average of the RGB channels.
    pub fn grayscale(self) -> Color {
        let gray = (self.r + self.g + self.b) / 3.0;
        Color::new(gray, gray, gray, self.a)
    }

    /// Push a color away from the middle.
    ///
    /// Dark colors (channel average below 0.5) are scaled by 1.2, everything
    /// else by 0.8. Channels are capped at 1.0.
    pub fn high_contrast(self) -> Color {
        let average = (self.r + self.g + self.b) / 3.0;
        let factor = if average < 0.5 { 1.2 } else { 0.8 };
        Color::new(
            (self.r * factor).min(1.0),
            (self.g * factor).min(1.0),
            (self.b * factor).min(1.0),
            self.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(a: Color, b: Color) {
        let close = (a.r - b.r).abs() < TOLERANCE
            && (a.g - b.g).abs() < TOLERANCE
            && (a.b - b.b).abs() < TOLERANCE
            && (a.a - b.a).abs() < TOLERANCE;
        assert!(close, "expected {:?}, got {:?}", b, a);
    }

    #[test]
    fn test_tint_and_shade() {
        let color = Color::new(0.2, 0.4, 0.6, 0.5);

        assert_close(color.tinted_or_shaded(0.5), Color::new(0.6, 0.7, 0.8, 0.5));
        assert_close(color.tinted_or_shaded(-0.5), Color::new(0.1, 0.2, 0.3, 0.5));
        assert_eq!(color.tinted_or_shaded(0.0), color);
    }

    #[test]
    fn test_tint_weight_is_clamped() {
        let color = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(color.tinted_or_shaded(3.0), Color::WHITE);
        assert_eq!(color.tinted_or_shaded(-3.0), Color::BLACK);
    }

    #[test]
    fn test_brightened_and_darkened_endpoints() {
        let color = Color::new(0.25, 0.5, 0.75, 0.3);

        assert_eq!(color.brightened(0.0), color);
        assert_eq!(color.brightened(1.0), Color::WHITE.with_alpha(0.3));
        assert_eq!(color.darkened(0.0), color);
        assert_eq!(color.darkened(1.0), Color::BLACK.with_alpha(0.3));

        // out of range amounts clamp
        assert_eq!(color.brightened(7.0), Color::WHITE.with_alpha(0.3));
        assert_eq!(color.darkened(-1.0), color);
    }

    #[test]
    fn test_blended() {
        let a = Color::new(0.0, 0.2, 1.0, 1.0);
        let b = Color::new(1.0, 0.4, 0.0, 0.0);

        assert_eq!(a.blended(b, 0.0), a);
        assert_eq!(a.blended(b, 1.0), b);
        assert_close(a.blended(b, 0.5), Color::new(0.5, 0.3, 0.5, 0.5));
        assert_eq!(a.blended(b, 1.5), b);
        assert_eq!(a.blended(b, -0.5), a);
    }

    #[test]
    fn test_distance() {
        let a = Color::rgb(0.1, 0.2, 0.3);
        let b = Color::rgb(0.4, 0.6, 0.3);

        assert_eq!(a.distance(a), 0.0);
        assert!((a.distance(b) - 0.5).abs() < TOLERANCE);
        assert_eq!(a.distance(b), b.distance(a));
        assert!((Color::BLACK.distance(Color::WHITE) - 3f64.sqrt()).abs() < TOLERANCE);
        // alpha does not count
        assert_eq!(a.distance(a.with_alpha(0.0)), 0.0);
    }

    #[test]
    fn test_inverted() {
        let color = Color::new(0.2, 0.5, 0.9, 0.4);
        assert_close(color.inverted(), Color::new(0.8, 0.5, 0.1, 0.4));
        assert_close(color.inverted().inverted(), color);
    }

    #[test]
    fn test_grayscale_average() {
        let color = Color::new(0.3, 0.6, 0.9, 0.8);
        assert_close(color.grayscale(), Color::new(0.6, 0.6, 0.6, 0.8));
    }

    #[test]
    fn test_high_contrast() {
        let dark = Color::rgb(0.1, 0.2, 0.3);
        assert_close(dark.high_contrast(), Color::rgb(0.12, 0.24, 0.36));

        let light = Color::rgb(0.5, 0.75, 1.0);
        assert_close(light.high_contrast(), Color::rgb(0.4, 0.6, 0.8));

        // dark average but one hot channel gets capped
        let hot = Color::rgb(0.95, 0.1, 0.1);
        assert_eq!(hot.high_contrast().r, 1.0);
    }
}
