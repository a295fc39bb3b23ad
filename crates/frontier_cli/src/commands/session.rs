//! Session command implementation
//!
//! Replays a script of user events against an interactive session. Every
//! script line is one turn: the event is handled, deferred corrections run,
//! and the chart redraws and announcements of that turn are printed.
//!
//! ```text
//! # comments and blank lines are ignored
//! input stdDevA 75%          typed text, normalised and clamped
//! set correlation -0.4       slider / programmatic value
//! batch stdDevA=0.4 shareA=0.2
//! show
//! reset
//! quit
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use frontier_core::adapters::{ChartCall, RecordingAnnouncer, RecordingChart};
use frontier_core::input::FieldKind;
use frontier_core::session::{Event, Session};
use frontier_core::store::ParameterUpdate;
use frontier_core::types::ParamName;
use serde_json::json;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{bounds_summary, point_summary};
use crate::{CliError, Result};

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Deliver an event to the session
    Event(Event),
    /// Print the current state
    Show,
    /// Stop reading
    Quit,
}

/// Totals reported after a script finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Events dispatched
    pub turns: usize,
    /// Recomputations performed
    pub generation: u64,
}

/// Run the session command against a script file or stdin
pub fn run(script: Option<&Path>, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = match script {
        Some(path) => {
            info!(script = %path.display(), "replaying session script");
            run_script(BufReader::new(File::open(path)?), &mut out, config)?
        }
        None => run_script(std::io::stdin().lock(), &mut out, config)?,
    };

    info!(
        turns = summary.turns,
        generation = summary.generation,
        "session finished"
    );
    Ok(())
}

/// Replay `input` line by line, writing a transcript to `out`
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &CliConfig,
) -> Result<SessionSummary> {
    let mut session = Session::new(RecordingChart::new(), RecordingAnnouncer::new());
    // the initial draw belongs to no turn
    session.chart_mut().take_calls();

    let turns = run_turns(&mut session, input, out, config)?;
    Ok(SessionSummary {
        turns,
        generation: session.store().generation(),
    })
}

type ScriptSession = Session<RecordingChart, RecordingAnnouncer>;

/// Dispatch every script line to `session`. The recorders are drained after
/// each turn, so they only ever hold the current turn's calls.
fn run_turns<R: BufRead, W: Write>(
    session: &mut ScriptSession,
    input: R,
    out: &mut W,
    config: &CliConfig,
) -> Result<usize> {
    let mut turns = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = match parse_line(&line).map_err(|message| CliError::Script {
            line: index + 1,
            message,
        })? {
            Some(command) => command,
            None => continue,
        };

        match command {
            Command::Quit => break,
            Command::Show => write_state(out, session, config)?,
            Command::Event(event) => {
                let field = match &event {
                    Event::Input { field, .. } => Some(*field),
                    _ => None,
                };

                debug!(?event, "dispatching");
                let scope = session.dispatch(event);
                turns += 1;

                let calls = session.chart_mut().take_calls();
                let messages = session.announcer_mut().take_messages();
                write_turn(
                    out,
                    &line,
                    session,
                    TurnDelta {
                        scope: scope.map(|s| s.as_str()),
                        calls: &calls,
                        messages: &messages,
                        field,
                    },
                    config,
                )?;
            }
        }
    }

    Ok(turns)
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "input" => {
            let (field, raw) = rest
                .split_once(char::is_whitespace)
                .map(|(field, raw)| (field, raw.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err("input needs a field".to_string());
            }
            let field: FieldKind = field.parse().map_err(|e| format!("{}", e))?;
            Command::Event(Event::Input {
                field,
                raw: raw.to_string(),
            })
        }
        "set" => {
            let mut parts = rest.split_whitespace();
            let (param, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(param), Some(value), None) => (param, value),
                _ => return Err("usage: set <param> <value>".to_string()),
            };
            Command::Event(Event::Slider {
                param: parse_param(param)?,
                value: parse_value(value)?,
            })
        }
        "batch" => {
            let mut update = ParameterUpdate::default();
            for pair in rest.split_whitespace() {
                let (param, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("expected name=value, got {:?}", pair))?;
                update = update.with(parse_param(param)?, parse_value(value)?);
            }
            Command::Event(Event::Batch(update))
        }
        "reset" => Command::Event(Event::Reset),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {:?}", other)),
    };

    Ok(Some(command))
}

fn parse_param(s: &str) -> std::result::Result<ParamName, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_value(s: &str) -> std::result::Result<f64, String> {
    s.parse().map_err(|_| format!("invalid number {:?}", s))
}

struct TurnDelta<'a> {
    scope: Option<&'static str>,
    calls: &'a [ChartCall],
    messages: &'a [String],
    field: Option<FieldKind>,
}

fn write_turn<W: Write>(
    out: &mut W,
    line: &str,
    session: &ScriptSession,
    delta: TurnDelta<'_>,
    config: &CliConfig,
) -> Result<()> {
    let p = config.precision;
    match config.format {
        OutputFormat::Json => {
            let display = delta
                .field
                .map(|field| json!({ "field": field, "text": session.display_text(field) }));
            let value = json!({
                "command": line.trim(),
                "scope": delta.scope,
                "parameters": session.parameters(),
                "allocationPoint": session.output().allocation_point,
                "bounds": session.output().bounds,
                "announcements": delta.messages,
                "display": display,
            });
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "> {}", line.trim())?;
            for call in delta.calls {
                match call {
                    ChartCall::Allocation { point, .. } => {
                        writeln!(out, "  chart: allocation {}", point_summary(point, p))?;
                    }
                    ChartCall::Full { output, .. } => {
                        writeln!(out, "  chart: frontier {}", bounds_summary(&output.bounds, p))?;
                        writeln!(
                            out,
                            "  chart: allocation {}",
                            point_summary(&output.allocation_point, p)
                        )?;
                    }
                }
            }
            for message in delta.messages {
                writeln!(out, "  announce: {}", message)?;
            }
            if let Some(field) = delta.field {
                writeln!(out, "  display {}: {}", field, session.display_text(field))?;
            }
        }
    }
    Ok(())
}

fn write_state<W: Write>(
    out: &mut W,
    session: &ScriptSession,
    config: &CliConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let value = json!({
                "parameters": session.parameters(),
                "output": session.output(),
            });
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let params = session.parameters();
            writeln!(out, "> show")?;
            for name in ParamName::ALL {
                writeln!(out, "  {:<16} {:.p$}", name.as_str(), params.get(name), p = config.precision)?;
            }
            writeln!(out, "  bounds {}", bounds_summary(&session.output().bounds, config.precision))?;
            for line in session.output().allocation_point.tooltip().lines() {
                writeln!(out, "  {}", line)?;
            }
        }
    }
    Ok(())
}
