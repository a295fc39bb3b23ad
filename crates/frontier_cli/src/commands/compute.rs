//! Compute command implementation
//!
//! Evaluates the frontier once for the given parameters.

use std::io::Write;

use frontier_core::store::{ParameterUpdate, ReactiveParameterStore};
use tracing::info;

use crate::config::CliConfig;
use crate::output::write_curve;
use crate::Result;

/// Run the compute command
pub fn run<W: Write>(out: &mut W, update: &ParameterUpdate, config: &CliConfig) -> Result<()> {
    let mut store = ReactiveParameterStore::new();
    if let Some(scope) = store.apply(update) {
        info!(%scope, changed = update.entries().len(), "applied parameter overrides");
    }

    write_curve(out, store.output(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use approx::assert_relative_eq;
    use frontier_core::types::{CurveOutput, ParamName};

    #[test]
    fn test_compute_with_overrides() {
        let update = ParameterUpdate::default()
            .with(ParamName::Correlation, -1.0)
            .with(ParamName::ShareA, 0.4);
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };

        let mut buf = Vec::new();
        run(&mut buf, &update, &config).unwrap();
        let output: CurveOutput = serde_json::from_slice(&buf).unwrap();
        assert!(output.allocation_point.risk < 1e-7);
        assert_eq!(output.allocation_point.weight_a, 0.4);
        assert_relative_eq!(output.allocation_point.expected_return, 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_compute_defaults_table() {
        let mut buf = Vec::new();
        run(&mut buf, &ParameterUpdate::default(), &CliConfig::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("risk=0.1803 return=0.1100"));
    }
}
