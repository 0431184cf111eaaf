//! Color types and color science utilities
//!
//! This module provides the [`Color`] value type plus pure functions that
//! derive scalars (brightness, luminance, contrast) or new colors (tints,
//! shades, HSB adjustments) from it.
//!
//! # Layout
//!
//! - [`rgba`]: the [`Color`] type, hex parsing and formatting
//! - [`hsb`]: the [`Hsb`] representation and conversions
//! - [`luminance`]: perceived brightness, WCAG luminance and contrast
//! - [`adjust`]: transforms that go through HSB
//! - [`mix`]: channel-wise RGB transforms
//!
//! # Example
//!
//! ```
//! use tint_core::Color;
//!
//! let brand: Color = "#3366CC".parse().unwrap();
//!
//! let text = brand.best_contrasting_color();
//! assert_eq!(text, Color::WHITE);
//! assert!(brand.has_sufficient_contrast(text));
//!
//! let hover = brand.brightened(0.2);
//! assert!(hover.perceived_brightness() > brand.perceived_brightness());
//! ```

pub mod adjust;
mod error;
pub mod hsb;
pub mod luminance;
pub mod mix;
pub mod rgba;

pub use error::ParseColorError;
pub use hsb::Hsb;
pub use luminance::{
    linearize, ContrastLevel, WCAG_AAA_NORMAL_TEXT, WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT,
};
pub use rgba::Color;
