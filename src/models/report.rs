//! Serializable summaries of colors and color pairs.

use clap::ValueEnum;
use serde::Serialize;
use tint_core::{Color, ContrastLevel, Hsb};

/// Everything worth knowing about a single color
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorReport {
    pub hex: String,
    pub rgba: [u8; 4],
    pub hsb: HsbReport,
    pub opacity: f64,
    pub perceived_brightness: f64,
    pub relative_luminance: f64,
    pub is_light: bool,
    pub contrasting_text_color: String,
    pub best_contrasting_color: String,
    pub contrast_on_white: f64,
    pub contrast_on_black: f64,
}

/// HSB components with hue in degrees
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HsbReport {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl From<Hsb> for HsbReport {
    fn from(hsb: Hsb) -> Self {
        Self {
            hue: hsb.hue_degrees(),
            saturation: hsb.saturation,
            brightness: hsb.brightness,
        }
    }
}

impl ColorReport {
    pub fn new(color: Color) -> Self {
        Self {
            hex: color.to_hex(),
            rgba: color.to_rgba8(),
            hsb: Hsb::from(color).into(),
            opacity: color.opacity(),
            perceived_brightness: color.perceived_brightness(),
            relative_luminance: color.relative_luminance(),
            is_light: color.is_light(),
            contrasting_text_color: color.contrasting_text_color().to_hex(),
            best_contrasting_color: color.best_contrasting_color().to_hex(),
            contrast_on_white: color.contrast_ratio(Color::WHITE),
            contrast_on_black: color.contrast_ratio(Color::BLACK),
        }
    }
}

/// Contrast verdict for a foreground/background pair
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    /// Meets the 4.5:1 body text threshold
    pub sufficient: bool,
    pub level: &'static str,
    /// The foreground, inverted when it fails against the background
    pub adaptive_foreground: String,
}

impl ContrastReport {
    pub fn new(foreground: Color, background: Color) -> Self {
        let ratio = foreground.contrast_ratio(background);
        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio,
            sufficient: foreground.has_sufficient_contrast(background),
            level: ContrastLevel::from_ratio(ratio).label(),
            adaptive_foreground: foreground.adaptive_contrast(background).to_hex(),
        }
    }
}

/// Single-color transforms selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Adjustment {
    /// Add `amount` to HSB brightness
    Brightness,
    /// Clamp HSB brightness into `min..=max`
    ClampBrightness,
    /// Add `amount` to saturation
    Saturate,
    /// Subtract `amount` from saturation
    Desaturate,
    /// Drop saturation, keep brightness
    Grayscale,
    /// Channel average
    Average,
    /// Brightness := 1 - brightness
    InvertBrightness,
    /// Brightness := 0.5
    NormalizeBrightness,
    /// Rotate hue by `amount` degrees
    HueRotate,
    /// Mix toward white (positive `amount`) or shade toward black (negative)
    Tint,
    /// Mix toward white by `amount`
    Brighten,
    /// Mix toward black by `amount`
    Darken,
    /// Invert RGB channels
    Invert,
    /// Push channels away from mid-grey
    HighContrast,
}

impl Adjustment {
    /// Apply the transform. `min` and `max` are only read by
    /// [`Adjustment::ClampBrightness`].
    pub fn apply(self, color: Color, amount: f64, min: f64, max: f64) -> Color {
        match self {
            Self::Brightness => color.adjust_brightness(amount),
            Self::ClampBrightness => color.clamped_brightness(min, max),
            Self::Saturate => color.increased_saturation(amount),
            Self::Desaturate => color.desaturated(amount),
            Self::Grayscale => color.grayscale_preserving_brightness(),
            Self::Average => color.grayscale(),
            Self::InvertBrightness => color.inverted_brightness(),
            Self::NormalizeBrightness => color.normalized_brightness(),
            Self::HueRotate => color.hue_rotated(amount),
            Self::Tint => color.tinted_or_shaded(amount),
            Self::Brighten => color.brightened(amount),
            Self::Darken => color.darkened(amount),
            Self::Invert => color.inverted(),
            Self::HighContrast => color.high_contrast(),
        }
    }
}

/// Result of blending two colors
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BlendReport {
    pub from: String,
    pub to: String,
    pub ratio: f64,
    pub blended: String,
    pub distance: f64,
}

impl BlendReport {
    pub fn new(from: Color, to: Color, ratio: f64) -> Self {
        Self {
            from: from.to_hex(),
            to: to.to_hex(),
            ratio,
            blended: from.blended(to, ratio).to_hex(),
            distance: from.distance(to),
        }
    }
}
