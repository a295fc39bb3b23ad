//! Closed value ranges with clamp reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bound a clamped value was forced onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampDirection {
    /// Value was below the range and raised to the minimum.
    Min,
    /// Value was above the range and lowered to the maximum.
    Max,
    /// Value was already inside the range.
    #[default]
    None,
}

impl ClampDirection {
    /// Lower-case label used in output and announcements.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClampDirection::Min => "min",
            ClampDirection::Max => "max",
            ClampDirection::None => "none",
        }
    }
}

impl fmt::Display for ClampDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed interval `[min, max]`.
///
/// # Examples
/// ```
/// use frontier_core::types::{ClampDirection, ValueRange};
///
/// let range = ValueRange::new(0.0, 0.3);
/// assert_eq!(range.clamp(0.5), (0.3, ClampDirection::Max));
/// assert_eq!(range.clamp(0.1), (0.1, ClampDirection::None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl ValueRange {
    /// Creates a range. `min` must not exceed `max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies inside the range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Forces `value` onto the nearest bound when it lies outside the range.
    ///
    /// Returns the resulting value together with the bound that was hit.
    /// NaN is passed through untouched with `ClampDirection::None`; callers
    /// map NaN before clamping.
    pub fn clamp(&self, value: f64) -> (f64, ClampDirection) {
        if value < self.min {
            (self.min, ClampDirection::Min)
        } else if value > self.max {
            (self.max, ClampDirection::Max)
        } else {
            (value, ClampDirection::None)
        }
    }

    /// The bound corresponding to `direction`, if any.
    pub fn bound(&self, direction: ClampDirection) -> Option<f64> {
        match direction {
            ClampDirection::Min => Some(self.min),
            ClampDirection::Max => Some(self.max),
            ClampDirection::None => None,
        }
    }
}
