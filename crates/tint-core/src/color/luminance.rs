//! Brightness, luminance and contrast
//!
//! Two deliberately different weightings live here:
//!
//! | Function | Weights | Gamma | Used by |
//! |----------|---------|-------|---------|
//! | [`Color::perceived_brightness`] | 0.299 / 0.587 / 0.114 (BT.601) | none | [`Color::is_light`], [`Color::contrasting_text_color`] |
//! | [`Color::relative_luminance`] | 0.2126 / 0.7152 / 0.0722 (WCAG 2.x) | sRGB decode | [`Color::contrast_ratio`] and everything built on it |
//!
//! They must not be merged: swapping one for the other changes which text
//! color a light/dark check picks and breaks WCAG ratio guarantees.

use super::rgba::Color;

/// Minimum contrast ratio for normal body text (WCAG 2.x AA).
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum contrast ratio for large text (WCAG 2.x AA).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

/// Minimum contrast ratio for normal body text (WCAG 2.x AAA).
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;

/// WCAG 2.x sRGB decode threshold. Note this is the WCAG value, not the
/// 0.04045 of IEC 61966-2-1.
const WCAG_LINEAR_THRESHOLD: f64 = 0.03928;

/// Decode one gamma-encoded channel to linear light, WCAG 2.x variant.
#[inline]
pub fn linearize(channel: f64) -> f64 {
    if channel <= WCAG_LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG conformance level reached by a contrast ratio for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContrastLevel {
    /// Below 3:1
    Fail,
    /// At least 3:1, enough for large text only
    AaLarge,
    /// At least 4.5:1
    Aa,
    /// At least 7:1
    Aaa,
}

impl ContrastLevel {
    /// Classify a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA_NORMAL_TEXT {
            ContrastLevel::Aaa
        } else if ratio >= WCAG_AA_NORMAL_TEXT {
            ContrastLevel::Aa
        } else if ratio >= WCAG_AA_LARGE_TEXT {
            ContrastLevel::AaLarge
        } else {
            ContrastLevel::Fail
        }
    }

    /// Short label, e.g. `"AA"`.
    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::Fail => "fail",
            ContrastLevel::AaLarge => "AA large",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
        }
    }
}

impl Color {
    /// Perceived brightness using BT.601 weights, without gamma decoding.
    ///
    /// `0.299·r + 0.587·g + 0.114·b`. Alpha is ignored.
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// assert_eq!(Color::BLACK.perceived_brightness(), 0.0);
    /// assert!((Color::WHITE.perceived_brightness() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn perceived_brightness(self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// WCAG relative luminance: sRGB-decoded channels weighted
    /// 0.2126 / 0.7152 / 0.0722. Alpha is ignored.
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// `true` when [`perceived_brightness`](Self::perceived_brightness) is above 0.5.
    #[inline]
    pub fn is_light(self) -> bool {
        self.perceived_brightness() > 0.5
    }

    /// Black text for light colors, white text for dark ones.
    ///
    /// Decided by [`is_light`](Self::is_light), not by contrast ratio. See
    /// [`best_contrasting_color`](Self::best_contrasting_color) for the
    /// ratio-based choice.
    #[inline]
    pub fn contrasting_text_color(self) -> Color {
        if self.is_light() {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Black or white, whichever has the higher contrast ratio against `self`.
    ///
    /// Ties go to white.
    pub fn best_contrasting_color(self) -> Color {
        let against_black = self.contrast_ratio(Color::BLACK);
        let against_white = self.contrast_ratio(Color::WHITE);
        if against_black > against_white {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`.
    ///
    /// `(max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)` over
    /// [`relative_luminance`](Self::relative_luminance). Symmetric.
    ///
    /// # Example
    /// ```
    /// use tint_core::Color;
    /// let ratio = Color::BLACK.contrast_ratio(Color::WHITE);
    /// assert!((ratio - 21.0).abs() < 1e-6);
    /// ```
    pub fn contrast_ratio(self, other: Color) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// `true` when the contrast ratio reaches the WCAG AA body-text threshold (4.5).
    #[inline]
    pub fn has_sufficient_contrast(self, other: Color) -> bool {
        self.contrast_ratio(other) >= WCAG_AA_NORMAL_TEXT
    }

    /// WCAG level reached by `self` drawn on `background`.
    #[inline]
    pub fn contrast_level(self, background: Color) -> ContrastLevel {
        ContrastLevel::from_ratio(self.contrast_ratio(background))
    }

    /// Keep `self` if it is readable on `background`, otherwise invert it.
    ///
    /// Readable means a contrast ratio of at least 4.5. The inversion is the
    /// plain RGB [`inverted`](Self::inverted), which is not guaranteed to
    /// pass either.
    pub fn adaptive_contrast(self, background: Color) -> Color {
        if self.contrast_ratio(background) < WCAG_AA_NORMAL_TEXT {
            self.inverted()
        } else {
            self
        }
    }
}
