//! Normalize command implementation
//!
//! Shows how a raw text entry would be read by an input field.

use std::io::Write;

use frontier_core::input::{normalize, FieldKind};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::write_normalized;
use crate::Result;

/// Run the normalize command
pub fn run<W: Write>(out: &mut W, field: &str, raw: &str, config: &CliConfig) -> Result<()> {
    let field: FieldKind = field.parse()?;
    let input = normalize(raw, field);
    debug!(%field, raw, value = input.value, clamp = %input.clamp_direction, "normalised input");

    write_normalized(out, field, raw, &input, config)
}
