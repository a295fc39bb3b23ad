//! Reactive parameter store.
//!
//! [`ReactiveParameterStore`] owns the current [`Parameters`] and the latest
//! [`CurveOutput`]. Each mutation recomputes exactly what the changed
//! parameter affects, as declared by [`recompute_scope`]:
//!
//! | parameter                          | recomputed                          |
//! |------------------------------------|-------------------------------------|
//! | `shareA`                           | allocation point                    |
//! | every other parameter              | frontier, allocation point, bounds  |
//!
//! The share moves continuously while a slider is dragged; keeping it away
//! from the frontier and the bounds avoids axis jitter and needless
//! full-curve work on every intermediate value.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::curve;
use crate::types::{AxisBounds, CurveOutput, Frontier, FrontierPoint, ParamName, Parameters};

/// Which outputs a change invalidates.
///
/// Ordered so that the widest scope of a batch is its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecomputeScope {
    /// Allocation point only
    Allocation,
    /// Frontier, allocation point and bounds
    Full,
}

impl RecomputeScope {
    /// Lower-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecomputeScope::Allocation => "allocation",
            RecomputeScope::Full => "full",
        }
    }
}

impl fmt::Display for RecomputeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatch table from parameter identity to recompute scope.
pub const fn recompute_scope(name: ParamName) -> RecomputeScope {
    match name {
        ParamName::ShareA => RecomputeScope::Allocation,
        ParamName::Correlation
        | ParamName::ExpectedReturnA
        | ParamName::ExpectedReturnB
        | ParamName::StdDevA
        | ParamName::StdDevB => RecomputeScope::Full,
    }
}

/// A set of parameter changes applied together.
///
/// # Examples
/// ```
/// use frontier_core::store::ParameterUpdate;
/// use frontier_core::types::ParamName;
///
/// let update = ParameterUpdate::default()
///     .with(ParamName::StdDevA, 0.4)
///     .with(ParamName::Correlation, -0.2);
/// assert_eq!(update.entries().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterUpdate {
    /// New correlation
    pub correlation: Option<f64>,
    /// New expected return of asset A
    pub expected_return_a: Option<f64>,
    /// New expected return of asset B
    pub expected_return_b: Option<f64>,
    /// New standard deviation of asset A
    pub std_dev_a: Option<f64>,
    /// New standard deviation of asset B
    pub std_dev_b: Option<f64>,
    /// New share of asset A
    pub share_a: Option<f64>,
}

impl ParameterUpdate {
    /// Returns the update with `name` set to `value`.
    pub fn with(mut self, name: ParamName, value: f64) -> Self {
        *self.slot(name) = Some(value);
        self
    }

    /// The requested changes, in parameter declaration order.
    pub fn entries(&self) -> Vec<(ParamName, f64)> {
        ParamName::ALL
            .into_iter()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    /// Returns true if no parameter is touched.
    pub fn is_empty(&self) -> bool {
        ParamName::ALL.into_iter().all(|name| self.get(name).is_none())
    }

    fn get(&self, name: ParamName) -> Option<f64> {
        match name {
            ParamName::Correlation => self.correlation,
            ParamName::ExpectedReturnA => self.expected_return_a,
            ParamName::ExpectedReturnB => self.expected_return_b,
            ParamName::StdDevA => self.std_dev_a,
            ParamName::StdDevB => self.std_dev_b,
            ParamName::ShareA => self.share_a,
        }
    }

    fn slot(&mut self, name: ParamName) -> &mut Option<f64> {
        match name {
            ParamName::Correlation => &mut self.correlation,
            ParamName::ExpectedReturnA => &mut self.expected_return_a,
            ParamName::ExpectedReturnB => &mut self.expected_return_b,
            ParamName::StdDevA => &mut self.std_dev_a,
            ParamName::StdDevB => &mut self.std_dev_b,
            ParamName::ShareA => &mut self.share_a,
        }
    }
}

/// Owner of the portfolio parameters and their derived curve.
///
/// Every recomputation bumps a monotonically increasing generation. The
/// store itself is synchronous; the generation lets an asynchronous consumer
/// drop results that a newer computation has superseded.
///
/// # Examples
/// ```
/// use frontier_core::store::{ReactiveParameterStore, RecomputeScope};
/// use frontier_core::types::ParamName;
///
/// let mut store = ReactiveParameterStore::new();
/// let bounds = *store.bounds();
///
/// assert_eq!(store.set(ParamName::ShareA, 0.8), RecomputeScope::Allocation);
/// assert_eq!(*store.bounds(), bounds);
///
/// assert_eq!(store.set(ParamName::StdDevA, 0.5), RecomputeScope::Full);
/// assert_ne!(*store.bounds(), bounds);
/// ```
#[derive(Debug, Clone)]
pub struct ReactiveParameterStore {
    params: Parameters,
    output: CurveOutput,
    generation: u64,
}

impl Default for ReactiveParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveParameterStore {
    /// Creates a store at the default parameters, fully computed.
    pub fn new() -> Self {
        Self::with_parameters(Parameters::default())
    }

    /// Creates a store at `params` (coerced into their domains), fully computed.
    pub fn with_parameters(params: Parameters) -> Self {
        let params = params.coerced();
        Self {
            output: curve::compute(&params),
            params,
            generation: 0,
        }
    }

    /// Stores `value` for `name` and recomputes the affected outputs.
    ///
    /// The value is coerced into the parameter's domain first.
    pub fn set(&mut self, name: ParamName, value: f64) -> RecomputeScope {
        self.assign(name, value);
        let scope = recompute_scope(name);
        self.recompute(scope);
        scope
    }

    /// Applies several changes with a single recomputation.
    ///
    /// The recompute scope is the widest scope among the changed
    /// parameters. Returns `None`, recomputing nothing, for an empty batch.
    pub fn set_many(&mut self, changes: &[(ParamName, f64)]) -> Option<RecomputeScope> {
        let mut widest = None;
        for &(name, value) in changes {
            self.assign(name, value);
            widest = widest.max(Some(recompute_scope(name)));
        }
        let scope = widest?;
        self.recompute(scope);
        Some(scope)
    }

    /// Applies a [`ParameterUpdate`] with a single recomputation.
    pub fn apply(&mut self, update: &ParameterUpdate) -> Option<RecomputeScope> {
        self.set_many(&update.entries())
    }

    /// Restores every parameter to its default and fully recomputes.
    pub fn reset(&mut self) -> Parameters {
        self.params = Parameters::default();
        self.recompute(RecomputeScope::Full);
        self.params
    }

    /// Current parameters.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Latest recomputed outputs.
    #[inline]
    pub fn output(&self) -> &CurveOutput {
        &self.output
    }

    /// Latest frontier.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.output.frontier
    }

    /// Latest allocation point.
    #[inline]
    pub fn allocation_point(&self) -> &FrontierPoint {
        &self.output.allocation_point
    }

    /// Latest axis bounds.
    #[inline]
    pub fn bounds(&self) -> &AxisBounds {
        &self.output.bounds
    }

    /// Number of recomputations since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if a result tagged with `generation` is still the latest.
    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    fn assign(&mut self, name: ParamName, value: f64) {
        let coerced = name.coerce(value);
        if coerced.to_bits() != value.to_bits() {
            warn!(param = %name, requested = value, applied = coerced, "value coerced into domain");
        }
        self.params.set(name, coerced);
    }

    fn recompute(&mut self, scope: RecomputeScope) {
        match scope {
            RecomputeScope::Allocation => {
                self.output.allocation_point = curve::allocation_point(&self.params);
            }
            RecomputeScope::Full => {
                self.output = curve::compute(&self.params);
            }
        }
        self.generation += 1;
        debug!(?scope, generation = self.generation, "recomputed");
    }
}
