//! Result formatting for stdout
//!
//! Every writer takes `impl Write` so commands can be exercised against an
//! in-memory buffer.

use std::io::Write;

use frontier_core::input::{format_percent, FieldKind, NormalizedInput};
use frontier_core::types::{AxisBounds, CurveOutput, FrontierPoint};
use serde_json::json;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Write a full curve output
pub fn write_curve<W: Write>(out: &mut W, output: &CurveOutput, config: &CliConfig) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, output)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let p = config.precision;
            let w = p + 4;
            writeln!(
                out,
                "{:>8} {:>8} {:>w$} {:>w$}  label",
                "weight_a", "weight_b", "risk", "return"
            )?;
            for point in &output.frontier {
                writeln!(
                    out,
                    "{:>8} {:>8} {:>w$.p$} {:>w$.p$}  {}",
                    format_percent(point.weight_a, 0),
                    format_percent(point.weight_b, 0),
                    point.risk,
                    point.expected_return,
                    point.label.map(|a| a.label()).unwrap_or(""),
                )?;
            }
            writeln!(out)?;
            writeln!(out, "allocation: {}", point_summary(&output.allocation_point, p))?;
            writeln!(out, "bounds:     {}", bounds_summary(&output.bounds, p))?;
        }
    }
    Ok(())
}

/// Write the result of normalising one input
pub fn write_normalized<W: Write>(
    out: &mut W,
    field: FieldKind,
    raw: &str,
    input: &NormalizedInput,
    config: &CliConfig,
) -> Result<()> {
    let announcement = input.announcement(field);
    match config.format {
        OutputFormat::Json => {
            let value = json!({
                "field": field,
                "raw": raw,
                "value": input.value,
                "wasClamped": input.was_clamped,
                "clampDirection": input.clamp_direction,
                "announcement": announcement,
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "field:     {}", field)?;
            writeln!(out, "raw:       {:?}", raw)?;
            writeln!(
                out,
                "value:     {:.p$} ({})",
                input.value,
                input.display_text(),
                p = config.precision
            )?;
            writeln!(out, "clamped:   {}", input.clamp_direction)?;
            if let Some(message) = announcement {
                writeln!(out, "announce:  {}", message)?;
            }
        }
    }
    Ok(())
}

/// One-line description of a point
pub fn point_summary(point: &FrontierPoint, precision: usize) -> String {
    format!(
        "A={} B={} risk={:.p$} return={:.p$}",
        format_percent(point.weight_a, 0),
        format_percent(point.weight_b, 0),
        point.risk,
        point.expected_return,
        p = precision
    )
}

/// One-line description of the rendered axis ranges
pub fn bounds_summary(bounds: &AxisBounds, precision: usize) -> String {
    format!(
        "x=[{:.p$}, {:.p$}] y=[{:.p$}, {:.p$}] ticks={}/{}",
        bounds.effective_x_min(),
        bounds.x_max,
        bounds.effective_y_min(),
        bounds.y_max,
        bounds.x_interval,
        bounds.y_interval,
        p = precision
    )
}
