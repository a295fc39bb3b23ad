//! Interactive session: one user event per turn.
//!
//! A [`Session`] owns the parameter store, the chart and announcer adapters,
//! the text currently shown in each input field, and the queue of deferred
//! display corrections.
//!
//! ## Turn structure
//!
//! [`Session::dispatch`] is [`Session::handle`] followed by
//! [`Session::end_turn`]:
//!
//! 1. `handle` runs synchronously: normalise the input, store the value,
//!    recompute, redraw. A clamped input only *schedules* its correction.
//! 2. `end_turn` drains the deferred queue: each correction overwrites its
//!    own field's text with the clamped value and announces the bound.
//!
//! The field the user is typing into is therefore never rewritten while its
//! own event is still being handled. Calling `handle` again without
//! `end_turn` closes the previous turn first, so every correction lands
//! before the next event is processed.

use std::collections::BTreeMap;

use tracing::debug;

use crate::adapters::{Animation, Announcer, ChartAdapter};
use crate::input::{format_percent, normalize, FieldKind};
use crate::scheduler::DeferredQueue;
use crate::store::{ParameterUpdate, ReactiveParameterStore, RecomputeScope};
use crate::types::{CurveOutput, ParamName, Parameters};

/// Announcement emitted after every full recomputation.
pub const CHART_UPDATED: &str = "Chart updated";

/// A user-initiated event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Free text typed into an input field.
    Input {
        /// Field typed into
        field: FieldKind,
        /// Raw text as typed
        raw: String,
    },
    /// An already-valid value from a slider or programmatic source.
    Slider {
        /// Parameter moved
        param: ParamName,
        /// New value
        value: f64,
    },
    /// Several parameters changed at once.
    Batch(ParameterUpdate),
    /// Restore every default.
    Reset,
}

/// Correction queued by a clamped input.
#[derive(Debug, Clone, PartialEq)]
struct ClampCorrection {
    field: FieldKind,
    display: String,
    announcement: String,
}

/// Input-handling loop around a [`ReactiveParameterStore`].
///
/// # Examples
/// ```
/// use frontier_core::adapters::{RecordingAnnouncer, RecordingChart};
/// use frontier_core::input::FieldKind;
/// use frontier_core::session::{Event, Session};
///
/// let mut session = Session::new(RecordingChart::new(), RecordingAnnouncer::new());
/// session.dispatch(Event::Input {
///     field: FieldKind::StdDevA,
///     raw: "75%".to_string(),
/// });
///
/// assert_eq!(session.parameters().std_dev_a, 0.6);
/// assert_eq!(session.display_text(FieldKind::StdDevA), "60.0%");
/// assert_eq!(
///     session.announcer().last(),
///     Some("Standard Deviation A adjusted to maximum value 60%")
/// );
/// ```
#[derive(Debug)]
pub struct Session<C: ChartAdapter, A: Announcer> {
    store: ReactiveParameterStore,
    chart: C,
    announcer: A,
    deferred: DeferredQueue<ClampCorrection>,
    display: BTreeMap<FieldKind, String>,
}

impl<C: ChartAdapter, A: Announcer> Session<C, A> {
    /// Creates a session at the default parameters and draws the initial chart.
    pub fn new(chart: C, announcer: A) -> Self {
        Self::with_store(ReactiveParameterStore::new(), chart, announcer)
    }

    /// Creates a session around an existing store and draws its current output.
    pub fn with_store(store: ReactiveParameterStore, mut chart: C, announcer: A) -> Self {
        chart.update_all(store.output(), Animation::Immediate);
        let mut session = Self {
            store,
            chart,
            announcer,
            deferred: DeferredQueue::new(),
            display: BTreeMap::new(),
        };
        session.refresh_display(&FieldKind::ALL);
        session
    }

    /// Handles one event and then runs the deferred work it scheduled.
    pub fn dispatch(&mut self, event: Event) -> Option<RecomputeScope> {
        let scope = self.handle(event);
        self.end_turn();
        scope
    }

    /// Synchronous part of a turn. Deferred corrections stay queued until
    /// [`Session::end_turn`] or the next `handle`, whichever comes first.
    pub fn handle(&mut self, event: Event) -> Option<RecomputeScope> {
        self.end_turn();
        match event {
            Event::Input { field, raw } => Some(self.handle_input(field, raw)),
            Event::Slider { param, value } => {
                let scope = self.store.set(param, value);
                self.render(scope);
                self.refresh_display(&fields_for(&[param]));
                Some(scope)
            }
            Event::Batch(update) => {
                let scope = self.store.apply(&update)?;
                self.render(scope);
                let params: Vec<ParamName> =
                    update.entries().into_iter().map(|(name, _)| name).collect();
                self.refresh_display(&fields_for(&params));
                Some(scope)
            }
            Event::Reset => {
                self.store.reset();
                self.render(RecomputeScope::Full);
                self.refresh_display(&FieldKind::ALL);
                Some(RecomputeScope::Full)
            }
        }
    }

    /// Runs every correction scheduled so far. Returns how many ran.
    pub fn end_turn(&mut self) -> usize {
        let mut ran = 0;
        for correction in self.deferred.take() {
            debug!(field = %correction.field, display = %correction.display, "applying clamp correction");
            self.display.insert(correction.field, correction.display);
            self.announcer.announce(&correction.announcement);
            ran += 1;
        }
        ran
    }

    /// Text currently shown in `field`'s input box.
    pub fn display_text(&self, field: FieldKind) -> &str {
        self.display.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Corrections waiting for the end of the turn.
    pub fn pending_corrections(&self) -> usize {
        self.deferred.len()
    }

    /// Current parameters.
    pub fn parameters(&self) -> &Parameters {
        self.store.parameters()
    }

    /// Latest outputs.
    pub fn output(&self) -> &CurveOutput {
        self.store.output()
    }

    /// The underlying store.
    pub fn store(&self) -> &ReactiveParameterStore {
        &self.store
    }

    /// The chart adapter.
    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// The announcer.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Mutable access to the chart adapter.
    pub fn chart_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    /// Mutable access to the announcer.
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Consumes the session, returning the store and adapters.
    pub fn into_parts(self) -> (ReactiveParameterStore, C, A) {
        (self.store, self.chart, self.announcer)
    }

    fn handle_input(&mut self, field: FieldKind, raw: String) -> RecomputeScope {
        let input = normalize(&raw, field);
        self.display.insert(field, raw);

        let scope = self.store.set(field.param(), input.value);
        self.render(scope);

        if let Some(announcement) = input.announcement(field) {
            let applied = self.store.parameters().get(field.param());
            self.deferred.schedule(ClampCorrection {
                field,
                display: format_percent(applied, 1),
                announcement,
            });
        }
        scope
    }

    fn render(&mut self, scope: RecomputeScope) {
        match scope {
            RecomputeScope::Allocation => {
                self.chart
                    .update_allocation(self.store.allocation_point(), Animation::Immediate);
            }
            RecomputeScope::Full => {
                self.chart.update_all(self.store.output(), Animation::Animated);
                self.announcer.announce(CHART_UPDATED);
            }
        }
    }

    fn refresh_display(&mut self, fields: &[FieldKind]) {
        for &field in fields {
            let value = self.store.parameters().get(field.param());
            self.display.insert(field, format_percent(value, 1));
        }
    }
}

fn fields_for(params: &[ParamName]) -> Vec<FieldKind> {
    params
        .iter()
        .filter_map(|&param| FieldKind::for_param(param))
        .collect()
}
