//! Allowed range for an interactive scale factor.

use std::fmt;

/// Error type for scale range validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// A bound is NaN or infinite
    NonFinite,
    /// A bound is zero or negative
    NonPositive {
        /// The offending value
        value: f64,
    },
    /// Minimum is larger than maximum
    InvertedRange {
        /// Requested minimum
        min: f64,
        /// Requested maximum
        max: f64,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::NonFinite => write!(f, "scale bounds must be finite"),
            ScaleError::NonPositive { value } => {
                write!(f, "scale bounds must be positive, got {}", value)
            }
            ScaleError::InvertedRange { min, max } => {
                write!(f, "minimum scale {} exceeds maximum scale {}", min, max)
            }
        }
    }
}

impl std::error::Error for ScaleError {}

/// Inclusive `min..=max` range for a scale factor.
///
/// Both bounds are finite and positive, and `min <= max`. The only way to
/// build one is [`ScaleBounds::new`] (or [`Default`]), so [`clamp`](Self::clamp)
/// never has to handle a broken range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f64,
    max: f64,
}

impl ScaleBounds {
    /// Validate and create a range.
    ///
    /// # Example
    /// ```
    /// use tint_core::ScaleBounds;
    ///
    /// let bounds = ScaleBounds::new(1.0, 4.0).unwrap();
    /// assert_eq!(bounds.clamp(5.0), 4.0);
    ///
    /// assert!(ScaleBounds::new(4.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleError::NonFinite);
        }
        if min <= 0.0 {
            return Err(ScaleError::NonPositive { value: min });
        }
        if max <= 0.0 {
            return Err(ScaleError::NonPositive { value: max });
        }
        if min > max {
            return Err(ScaleError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `value` into the range. NaN maps to the lower bound.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// `true` if `value` lies inside the range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self { min: 1.0, max: 4.0 }
    }
}
