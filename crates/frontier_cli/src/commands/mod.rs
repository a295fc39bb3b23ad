//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod compute;
pub mod normalize;
pub mod session;
