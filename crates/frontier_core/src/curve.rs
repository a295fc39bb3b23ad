//! Frontier curve generation.
//!
//! [`compute`] maps a set of [`Parameters`] to the frontier curve, the
//! allocation point at the current share, and the axis bounds derived from
//! the curve. It is a pure function: no hidden state, no randomness, and
//! identical inputs give bit-identical outputs.
//!
//! ## Stepping
//!
//! `weight_b` walks from 0 to 1 in steps of 0.01. Each step is rounded to two
//! decimal places so accumulated drift can never yield 100 or 102 points.

use crate::math::{portfolio_return, TwoAssetMoments};
use crate::types::{Asset, AxisBounds, CurveOutput, Frontier, FrontierPoint, Parameters};

/// Increment of `weight_b` between consecutive frontier points.
pub const WEIGHT_STEP: f64 = 0.01;

/// Number of points on every frontier.
pub const FRONTIER_POINTS: usize = 101;

/// Headroom factor applied to the largest risk and return.
pub const AXIS_HEADROOM: f64 = 1.2;

/// Factor applied to the smallest risk.
pub const AXIS_FLOOR: f64 = 0.8;

/// Tick spacing on both axes.
pub const AXIS_TICK_INTERVAL: f64 = 0.05;

/// Computes frontier, allocation point and bounds in one pass.
///
/// # Examples
/// ```
/// use frontier_core::curve::compute;
/// use frontier_core::types::{Asset, Parameters};
///
/// let output = compute(&Parameters::default());
/// assert_eq!(output.frontier.len(), 101);
/// assert_eq!(output.frontier[0].label, Some(Asset::A));
/// assert_eq!(output.frontier[100].label, Some(Asset::B));
/// assert!((output.allocation_point.expected_return - 0.11).abs() < 1e-12);
/// ```
pub fn compute(params: &Parameters) -> CurveOutput {
    let frontier = frontier(params);
    let bounds = bounds(&frontier);
    CurveOutput {
        allocation_point: allocation_point(params),
        frontier,
        bounds,
    }
}

/// Builds the 101-point frontier for `weight_b = 0.00, 0.01, …, 1.00`.
pub fn frontier(params: &Parameters) -> Frontier {
    let moments = moments(params);
    let mut points = Vec::with_capacity(FRONTIER_POINTS);

    let mut weight_b = 0.0;
    while weight_b <= 1.0 {
        points.push(point_at(params, &moments, 1.0 - weight_b, weight_b));
        weight_b = round_weight(weight_b + WEIGHT_STEP);
    }

    if let Some(first) = points.first_mut() {
        first.label = Some(Asset::A);
    }
    if let Some(last) = points.last_mut() {
        last.label = Some(Asset::B);
    }
    points
}

/// Portfolio at the current share of asset A.
///
/// Evaluated directly at `weight_b = 1 - share_a` rather than looked up on the
/// stepped frontier, so shares between grid points are exact.
pub fn allocation_point(params: &Parameters) -> FrontierPoint {
    point_at(params, &moments(params), params.share_a, params.share_b())
}

/// Derives axis bounds from a frontier.
///
/// `y_max` and `x_max` get 20% headroom above the largest return and risk;
/// `x_min` sits 20% below the smallest risk. `y_min` is pinned at zero.
pub fn bounds(frontier: &[FrontierPoint]) -> AxisBounds {
    let (min_risk, max_risk, max_return) = frontier.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_risk, max_risk, max_return), p| {
            (
                min_risk.min(p.risk),
                max_risk.max(p.risk),
                max_return.max(p.expected_return),
            )
        },
    );

    AxisBounds {
        x_min: min_risk * AXIS_FLOOR,
        x_max: max_risk * AXIS_HEADROOM,
        y_min: 0.0,
        y_max: max_return * AXIS_HEADROOM,
        x_interval: AXIS_TICK_INTERVAL,
        y_interval: AXIS_TICK_INTERVAL,
    }
}

#[inline]
fn moments(params: &Parameters) -> TwoAssetMoments<f64> {
    TwoAssetMoments::new(params.std_dev_a, params.std_dev_b, params.correlation)
}

#[inline]
fn point_at(
    params: &Parameters,
    moments: &TwoAssetMoments<f64>,
    weight_a: f64,
    weight_b: f64,
) -> FrontierPoint {
    FrontierPoint {
        weight_a,
        weight_b,
        risk: moments.risk(weight_a, weight_b),
        expected_return: portfolio_return(
            weight_a,
            weight_b,
            params.expected_return_a,
            params.expected_return_b,
        ),
        label: None,
    }
}

/// Rounds a weight to two decimal places.
#[inline]
fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frontier_has_101_points() {
        let frontier = frontier(&Parameters::default());
        assert_eq!(frontier.len(), FRONTIER_POINTS);
        assert_eq!(frontier[0].weight_b, 0.0);
        assert_eq!(frontier[100].weight_b, 1.0);
    }

    #[test]
    fn test_frontier_strictly_increasing_in_weight_b() {
        let frontier = frontier(&Parameters::default());
        for pair in frontier.windows(2) {
            assert!(pair[1].weight_b > pair[0].weight_b);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let params = Parameters {
            share_a: 0.37,
            ..Parameters::default()
        };
        let output = compute(&params);
        for p in output.frontier.iter().chain(std::iter::once(&output.allocation_point)) {
            assert!((p.weight_a + p.weight_b - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_only_end_points_are_labelled() {
        let frontier = frontier(&Parameters::default());
        assert_eq!(frontier[0].label, Some(Asset::A));
        assert_eq!(frontier[100].label, Some(Asset::B));
        assert!(frontier[1..100].iter().all(|p| p.label.is_none()));
        assert!(allocation_point(&Parameters::default()).label.is_none());
    }

    #[test]
    fn test_default_scenario_allocation_point() {
        let point = allocation_point(&Parameters::default());
        assert_relative_eq!(point.risk, 0.1803, epsilon = 1e-4);
        assert_relative_eq!(point.expected_return, 0.11, epsilon = 1e-12);
        assert_eq!(point.weight_a, 0.5);
        assert_eq!(point.weight_b, 0.5);
    }

    #[test]
    fn test_allocation_point_off_grid() {
        let params = Parameters {
            share_a: 0.333,
            ..Parameters::default()
        };
        let point = allocation_point(&params);
        assert_relative_eq!(point.weight_b, 0.667, epsilon = 1e-12);
        let expected = 0.333 * 0.16 + 0.667 * 0.06;
        assert_relative_eq!(point.expected_return, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_end_points_match_pure_assets() {
        let frontier = frontier(&Parameters::default());
        assert_relative_eq!(frontier[0].risk, 0.3, epsilon = 1e-12);
        assert_relative_eq!(frontier[0].expected_return, 0.16, epsilon = 1e-12);
        assert_relative_eq!(frontier[100].risk, 0.2, epsilon = 1e-12);
        assert_relative_eq!(frontier[100].expected_return, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_default_bounds() {
        let output = compute(&Parameters::default());
        let min_risk = output
            .frontier
            .iter()
            .map(|p| p.risk)
            .fold(f64::INFINITY, f64::min);

        assert_relative_eq!(output.bounds.y_max, 0.16 * 1.2, epsilon = 1e-12);
        assert_relative_eq!(output.bounds.x_max, 0.3 * 1.2, epsilon = 1e-12);
        assert_relative_eq!(output.bounds.x_min, min_risk * 0.8, epsilon = 1e-12);
        assert_eq!(output.bounds.y_min, 0.0);
        assert_eq!(output.bounds.x_interval, 0.05);
        assert_eq!(output.bounds.y_interval, 0.05);
    }

    #[test]
    fn test_zero_volatility_does_not_fault() {
        let params = Parameters {
            std_dev_a: 0.0,
            std_dev_b: 0.0,
            ..Parameters::default()
        };
        let output = compute(&params);
        assert!(output.frontier.iter().all(|p| p.risk == 0.0));
        assert_eq!(output.allocation_point.risk, 0.0);
        assert_eq!(output.bounds.x_min, 0.0);
        assert_eq!(output.bounds.x_max, 0.0);
        assert_eq!(output.bounds.effective_x_min(), 0.0);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let params = Parameters {
            correlation: -0.35,
            std_dev_a: 0.41,
            share_a: 0.12,
            ..Parameters::default()
        };
        assert_eq!(compute(&params), compute(&params));
    }

    #[test]
    fn test_round_weight() {
        assert_eq!(round_weight(0.1 + 0.2), 0.3);
        assert_eq!(round_weight(0.99 + 0.01), 1.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn params_strategy() -> impl Strategy<Value = Parameters> {
            (
                -1.0..=1.0_f64,
                0.0..=0.3_f64,
                0.0..=0.3_f64,
                0.0..=0.6_f64,
                0.0..=0.6_f64,
                0.0..=1.0_f64,
            )
                .prop_map(|(correlation, ra, rb, sa, sb, share)| Parameters {
                    correlation,
                    expected_return_a: ra,
                    expected_return_b: rb,
                    std_dev_a: sa,
                    std_dev_b: sb,
                    share_a: share,
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_risk_non_negative(params in params_strategy()) {
                let output = compute(&params);
                prop_assert!(output.frontier.iter().all(|p| p.risk >= 0.0 && p.risk.is_finite()));
                prop_assert!(output.allocation_point.risk >= 0.0);
            }

            #[test]
            fn test_shape_and_weights(params in params_strategy()) {
                let output = compute(&params);
                prop_assert_eq!(output.frontier.len(), FRONTIER_POINTS);
                prop_assert!((output.frontier[0].weight_b).abs() < 1e-12);
                prop_assert!((output.frontier[100].weight_b - 1.0).abs() < 1e-12);
                for p in &output.frontier {
                    prop_assert!((p.weight_a + p.weight_b - 1.0).abs() < 1e-9);
                }
            }

            #[test]
            fn test_bounds_enclose_frontier(params in params_strategy()) {
                let output = compute(&params);
                for p in &output.frontier {
                    prop_assert!(p.risk <= output.bounds.x_max);
                    prop_assert!(p.risk >= output.bounds.x_min);
                    prop_assert!(p.expected_return <= output.bounds.y_max);
                }
            }

            #[test]
            fn test_pure_function(params in params_strategy()) {
                let first = compute(&params);
                let second = compute(&params);
                for (a, b) in first.frontier.iter().zip(&second.frontier) {
                    prop_assert_eq!(a.risk.to_bits(), b.risk.to_bits());
                    prop_assert_eq!(a.expected_return.to_bits(), b.expected_return.to_bits());
                }
                prop_assert_eq!(first.bounds, second.bounds);
            }
        }
    }
}
