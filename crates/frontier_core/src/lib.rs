//! # frontier_core: Two-Asset Portfolio Frontier Kernel
//!
//! frontier_core computes the risk/return frontier of a portfolio built from
//! two risky assets and keeps that frontier consistent with a small set of
//! user-editable parameters.
//!
//! - Closed-form two-asset moments (`math::two_asset`)
//! - Frontier curve, allocation point and axis bounds (`curve`)
//! - Free-text input normalisation with range clamping (`input`)
//! - Reactive parameter store with scoped recomputation (`store`)
//! - "Run after the current turn" task queue (`scheduler`)
//! - Collaborator traits for the chart and the accessibility announcer (`adapters`)
//! - Input-handling session tying everything together (`session`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use frontier_core::curve::compute;
//! use frontier_core::input::{normalize, FieldKind};
//! use frontier_core::types::Parameters;
//!
//! let output = compute(&Parameters::default());
//! assert_eq!(output.frontier.len(), 101);
//! assert!((output.allocation_point.risk - 0.1803).abs() < 1e-4);
//!
//! let input = normalize("150", FieldKind::ExpectedReturnA);
//! assert!(input.was_clamped);
//! assert_eq!(input.value, 0.3);
//! ```
//!
//! ## Execution Model
//!
//! Everything in this crate is synchronous and single-owner. The only
//! deferred work is the display correction that follows a clamped input,
//! which is queued in a [`scheduler::DeferredQueue`] and executed once the
//! triggering event has been handled.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod curve;
pub mod input;
pub mod math;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;

pub use curve::compute;
pub use input::normalize;
pub use session::{Event, Session};
pub use store::{ReactiveParameterStore, RecomputeScope};
pub use types::{AxisBounds, CurveOutput, FrontierPoint, ParamName, Parameters};
