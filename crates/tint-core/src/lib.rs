//! tint-core: color science and bounded pinch-scale state for UI toolkits
//!
//! This library holds the parts of a UI toolkit's convenience layer that are
//! worth testing on their own: color math (brightness, WCAG contrast, HSB
//! adjustments, mixing) and the clamped zoom factor behind a pinch gesture.
//! It has no dependencies and never touches a view tree.
//!
//! # Quick Start
//!
//! ```
//! use tint_core::{Color, PinchScale, ScaleBounds};
//!
//! let background: Color = "#1E1E2E".parse().unwrap();
//! let text = background.contrasting_text_color();
//! assert_eq!(text, Color::WHITE);
//! assert!(text.has_sufficient_contrast(background));
//!
//! let mut zoom = PinchScale::new(ScaleBounds::new(1.0, 4.0).unwrap());
//! zoom.update(3.0);
//! assert_eq!(zoom.end(3.0), 3.0);
//! ```
//!
//! # Color Science
//!
//! ## Two Brightness Measures
//!
//! | Measure | Formula | Answers |
//! |---------|---------|---------|
//! | [`Color::perceived_brightness`] | `0.299 r + 0.587 g + 0.114 b` on encoded channels | "is this a light color?" |
//! | [`Color::relative_luminance`] | `0.2126 R + 0.7152 G + 0.0722 B` on linearized channels | "how much contrast is there?" |
//!
//! The first is cheap and matches what designers expect from a light/dark
//! switch. The second is the WCAG 2.x definition and is the only one that
//! may feed [`Color::contrast_ratio`]. Call sites depend on each of them
//! independently, so they are kept as two named functions.
//!
//! ## Contrast Ratio
//!
//! ```text
//! ratio = (max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)      1.0 ..= 21.0
//! ```
//!
//! 4.5:1 is the AA threshold for body text
//! ([`Color::has_sufficient_contrast`]); see [`ContrastLevel`] for the
//! other levels.
//!
//! ## HSB vs RGB Transforms
//!
//! Brightness, saturation and hue transforms round-trip through [`Hsb`] and
//! leave the other two components alone. Tints, shades, blends and
//! inversions work on RGB channels directly. Every transform preserves
//! alpha except [`Color::blended`], which interpolates it.
//!
//! ## Out-of-range Parameters
//!
//! Nothing in this crate returns an error for a bad amount or ratio.
//! Parameters are clamped to their documented range instead.
//!
//! # Interactive Scale
//!
//! [`PinchScale`] keeps a persisted zoom factor and a live gesture factor.
//! The effective scale is `clamp(persisted × live)`; ending a gesture folds
//! the final factor into the persisted value; reset puts it back to 1.0.
//! Storage is pluggable via [`ScaleStorage`] so that a view can own the
//! value itself or hand in shared state ([`SharedScale`]).

pub mod color;
pub mod scale;


pub use color::{ContrastLevel, Color, Hsb, ParseColorError, WCAG_AA_NORMAL_TEXT};
pub use scale::{GesturePhase, PinchScale, ScaleBounds, ScaleError, ScaleStorage, SharedScale};
