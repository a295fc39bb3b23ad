//! Mathematical building blocks.
//!
//! - `two_asset`: Closed-form mean and variance of a two-asset portfolio
//!
//! The functions are generic over [`num_traits::Float`] so the same formulae
//! serve `f64` evaluation and any other floating-point type.

pub mod two_asset;

pub use two_asset::{portfolio_return, TwoAssetMoments};
