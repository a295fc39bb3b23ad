//! Frontier points, axis bounds and the combined curve output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::format_percent;

/// Threshold at or below which a computed axis minimum is rendered as zero.
pub const AXIS_MIN_SNAP: f64 = 0.05;

/// One of the two risky assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// Asset A
    #[serde(rename = "Stock A")]
    A,
    /// Asset B
    #[serde(rename = "Stock B")]
    B,
}

impl Asset {
    /// Display label of the asset.
    pub fn label(&self) -> &'static str {
        match self {
            Asset::A => "Stock A",
            Asset::B => "Stock B",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single portfolio on the risk/return plane.
///
/// Invariants: `weight_a + weight_b == 1` within floating tolerance and
/// `risk >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontierPoint {
    /// Weight of asset A
    pub weight_a: f64,
    /// Weight of asset B
    pub weight_b: f64,
    /// Portfolio standard deviation (x-axis)
    pub risk: f64,
    /// Portfolio expected return (y-axis)
    #[serde(rename = "return")]
    pub expected_return: f64,
    /// Label for the pure-asset end points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Asset>,
}

impl FrontierPoint {
    /// Hover text for the point, one line per quantity.
    ///
    /// # Examples
    /// ```
    /// use frontier_core::curve::compute;
    /// use frontier_core::types::Parameters;
    ///
    /// let output = compute(&Parameters::default());
    /// let text = output.allocation_point.tooltip();
    /// assert!(text.starts_with("Stock A share: 50%\nStock B share: 50%"));
    /// assert!(text.ends_with("Portfolio standard deviation: 18.0%"));
    /// ```
    pub fn tooltip(&self) -> String {
        format!(
            "Stock A share: {}\nStock B share: {}\nExpected return: {}\nPortfolio standard deviation: {}",
            format_percent(self.weight_a, 0),
            format_percent(self.weight_b, 0),
            format_percent(self.expected_return, 1),
            format_percent(self.risk, 1),
        )
    }
}

/// Ordered frontier curve, strictly increasing in `weight_b`.
pub type Frontier = Vec<FrontierPoint>;

/// Axis extremes and tick spacing derived from a frontier.
///
/// The stored minima are the raw derived values. Renderers use
/// [`AxisBounds::effective_x_min`] / [`AxisBounds::effective_y_min`], which
/// snap small minima to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBounds {
    /// Lower risk bound
    pub x_min: f64,
    /// Upper risk bound
    pub x_max: f64,
    /// Lower return bound
    pub y_min: f64,
    /// Upper return bound
    pub y_max: f64,
    /// Risk tick spacing
    pub x_interval: f64,
    /// Return tick spacing
    pub y_interval: f64,
}

impl AxisBounds {
    /// Risk-axis minimum as it should be rendered.
    #[inline]
    pub fn effective_x_min(&self) -> f64 {
        snap_axis_min(self.x_min)
    }

    /// Return-axis minimum as it should be rendered.
    #[inline]
    pub fn effective_y_min(&self) -> f64 {
        snap_axis_min(self.y_min)
    }
}

#[inline]
fn snap_axis_min(min: f64) -> f64 {
    if min <= AXIS_MIN_SNAP {
        0.0
    } else {
        min
    }
}

/// Everything a single recomputation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveOutput {
    /// The full frontier curve
    pub frontier: Frontier,
    /// Portfolio at the current share
    pub allocation_point: FrontierPoint,
    /// Axis bounds derived from the frontier
    pub bounds: AxisBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x_min: f64, y_min: f64) -> AxisBounds {
        AxisBounds {
            x_min,
            x_max: 0.5,
            y_min,
            y_max: 0.3,
            x_interval: 0.05,
            y_interval: 0.05,
        }
    }

    #[test]
    fn test_effective_min_snaps_small_values() {
        assert_eq!(bounds(0.05, 0.0).effective_x_min(), 0.0);
        assert_eq!(bounds(0.04, 0.0).effective_x_min(), 0.0);
        assert_eq!(bounds(-0.01, 0.0).effective_x_min(), 0.0);
        assert_eq!(bounds(0.0, -0.2).effective_y_min(), 0.0);
    }

    #[test]
    fn test_effective_min_keeps_larger_values() {
        let b = bounds(0.144, 0.06);
        assert_eq!(b.effective_x_min(), 0.144);
        assert_eq!(b.effective_y_min(), 0.06);
        // raw value is not altered
        assert_eq!(b.x_min, 0.144);
    }

    #[test]
    fn test_point_serialisation() {
        let point = FrontierPoint {
            weight_a: 1.0,
            weight_b: 0.0,
            risk: 0.3,
            expected_return: 0.16,
            label: Some(Asset::A),
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"return\":0.16"));
        assert!(json.contains("\"label\":\"Stock A\""));

        let unlabelled = FrontierPoint { label: None, ..point };
        let json = serde_json::to_string(&unlabelled).unwrap();
        assert!(!json.contains("label"));
    }

    #[test]
    fn test_asset_label() {
        assert_eq!(Asset::A.to_string(), "Stock A");
        assert_eq!(Asset::B.label(), "Stock B");
    }
}
