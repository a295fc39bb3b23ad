//! Core parameter, point and error types.
//!
//! This module provides:
//! - `params`: The portfolio parameters, their identities and defaults
//! - `range`: Closed value ranges with clamp reporting
//! - `point`: Frontier points, axis bounds and the combined curve output
//! - `error`: Errors raised when parsing parameter and field names
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod params;
pub mod point;
pub mod range;

pub use error::ParamError;
pub use params::{ParamName, Parameters};
pub use point::{Asset, AxisBounds, CurveOutput, Frontier, FrontierPoint};
pub use range::{ClampDirection, ValueRange};
