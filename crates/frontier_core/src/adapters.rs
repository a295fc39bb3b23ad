//! Collaborator seams: the chart renderer and the accessibility announcer.
//!
//! The core never holds shared chart state. It hands immutable
//! [`CurveOutput`] values to a [`ChartAdapter`], which decides how to draw
//! them (including per-axis animation and the zero-snapping of small axis
//! minima via [`AxisBounds::effective_x_min`](crate::types::AxisBounds::effective_x_min)).

use tracing::info;

use crate::types::{CurveOutput, FrontierPoint};

/// Whether a redraw should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Transition from the previous state
    Animated,
    /// Jump straight to the new state
    Immediate,
}

impl Animation {
    /// Returns true for [`Animation::Animated`].
    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, Animation::Animated)
    }
}

/// Rendering surface for the frontier and allocation series.
pub trait ChartAdapter {
    /// Replace only the allocation-point series.
    fn update_allocation(&mut self, point: &FrontierPoint, animation: Animation);

    /// Replace both series and the axis extremes.
    fn update_all(&mut self, output: &CurveOutput, animation: Animation);
}

/// Fire-and-forget accessible text notifications.
pub trait Announcer {
    /// Emit `message` to assistive technology.
    fn announce(&mut self, message: &str);
}

impl<T: ChartAdapter + ?Sized> ChartAdapter for Box<T> {
    fn update_allocation(&mut self, point: &FrontierPoint, animation: Animation) {
        (**self).update_allocation(point, animation)
    }

    fn update_all(&mut self, output: &CurveOutput, animation: Animation) {
        (**self).update_all(output, animation)
    }
}

impl<T: Announcer + ?Sized> Announcer for Box<T> {
    fn announce(&mut self, message: &str) {
        (**self).announce(message)
    }
}

/// Announcer that forwards every message to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn announce(&mut self, message: &str) {
        info!(target: "frontier::announce", %message, "announcement");
    }
}

/// Announcer that keeps every message in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    messages: Vec<String>,
}

impl RecordingAnnouncer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages announced so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Removes and returns every message recorded so far.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// One call received by a [`RecordingChart`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCall {
    /// `update_allocation`
    Allocation {
        /// New allocation point
        point: FrontierPoint,
        /// Requested animation
        animation: Animation,
    },
    /// `update_all`
    Full {
        /// New frontier, allocation point and bounds
        output: Box<CurveOutput>,
        /// Requested animation
        animation: Animation,
    },
}

/// Chart adapter that records every update instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingChart {
    calls: Vec<ChartCall>,
}

impl RecordingChart {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn calls(&self) -> &[ChartCall] {
        &self.calls
    }

    /// Removes and returns every call recorded so far.
    pub fn take_calls(&mut self) -> Vec<ChartCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of full updates received.
    pub fn full_updates(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ChartCall::Full { .. }))
            .count()
    }

    /// Number of allocation-only updates received.
    pub fn allocation_updates(&self) -> usize {
        self.calls.len() - self.full_updates()
    }

    /// The most recent full output, if any.
    pub fn last_output(&self) -> Option<&CurveOutput> {
        self.calls.iter().rev().find_map(|call| match call {
            ChartCall::Full { output, .. } => Some(output.as_ref()),
            ChartCall::Allocation { .. } => None,
        })
    }
}

impl ChartAdapter for RecordingChart {
    fn update_allocation(&mut self, point: &FrontierPoint, animation: Animation) {
        self.calls.push(ChartCall::Allocation {
            point: point.clone(),
            animation,
        });
    }

    fn update_all(&mut self, output: &CurveOutput, animation: Animation) {
        self.calls.push(ChartCall::Full {
            output: Box::new(output.clone()),
            animation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::compute;
    use crate::types::Parameters;

    #[test]
    fn test_recording_chart_counts() {
        let output = compute(&Parameters::default());
        let mut chart = RecordingChart::new();
        chart.update_all(&output, Animation::Animated);
        chart.update_allocation(&output.allocation_point, Animation::Immediate);
        chart.update_allocation(&output.allocation_point, Animation::Immediate);

        assert_eq!(chart.calls().len(), 3);
        assert_eq!(chart.full_updates(), 1);
        assert_eq!(chart.allocation_updates(), 2);
        assert_eq!(chart.last_output(), Some(&output));
    }

    #[test]
    fn test_take_drains_recorders() {
        let output = compute(&Parameters::default());
        let mut chart = RecordingChart::new();
        chart.update_all(&output, Animation::Animated);
        chart.update_allocation(&output.allocation_point, Animation::Immediate);

        let calls = chart.take_calls();
        assert_eq!(calls.len(), 2);
        assert!(chart.calls().is_empty());
        assert_eq!(chart.last_output(), None);

        let mut announcer = RecordingAnnouncer::new();
        announcer.announce("Chart updated");
        assert_eq!(announcer.take_messages(), ["Chart updated".to_string()]);
        assert!(announcer.messages().is_empty());
    }

    #[test]
    fn test_recording_announcer() {
        let mut announcer = RecordingAnnouncer::new();
        assert_eq!(announcer.last(), None);
        announcer.announce("Chart updated");
        announcer.announce("Share A adjusted to maximum value 100%");
        assert_eq!(announcer.messages().len(), 2);
        assert_eq!(announcer.last(), Some("Share A adjusted to maximum value 100%"));
    }

    #[test]
    fn test_boxed_adapters_forward() {
        let mut announcer: Box<dyn Announcer> = Box::new(TracingAnnouncer);
        announcer.announce("forwarded");

        let mut chart: Box<RecordingChart> = Box::default();
        let output = compute(&Parameters::default());
        chart.update_all(&output, Animation::Immediate);
        assert_eq!(chart.full_updates(), 1);
        assert!(!Animation::Immediate.is_animated());
    }
}
