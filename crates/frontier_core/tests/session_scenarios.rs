//! End-to-end scenarios driving a session the way the interactive chart does.

use approx::assert_relative_eq;
use frontier_core::adapters::{ChartCall, RecordingAnnouncer, RecordingChart};
use frontier_core::input::FieldKind;
use frontier_core::session::{Event, Session, CHART_UPDATED};
use frontier_core::store::{ParameterUpdate, RecomputeScope};
use frontier_core::types::{ParamName, Parameters};

fn new_session() -> Session<RecordingChart, RecordingAnnouncer> {
    Session::new(RecordingChart::new(), RecordingAnnouncer::new())
}

fn typed(field: FieldKind, raw: &str) -> Event {
    Event::Input {
        field,
        raw: raw.to_string(),
    }
}

/// Dragging the share slider must never move the axes.
#[test]
fn test_slider_drag_keeps_axes_still() {
    let mut session = new_session();
    let bounds = session.output().bounds;

    for step in 0..=100 {
        let share = step as f64 / 100.0;
        let scope = session.dispatch(Event::Slider {
            param: ParamName::ShareA,
            value: share,
        });
        assert_eq!(scope, Some(RecomputeScope::Allocation));
        assert_eq!(session.output().bounds, bounds);
    }

    assert_eq!(session.chart().full_updates(), 1);
    assert_eq!(session.chart().allocation_updates(), 101);
    assert!(session.announcer().messages().is_empty());

    // the last allocation redraw is pure asset A
    match session.chart().calls().last() {
        Some(ChartCall::Allocation { point, .. }) => {
            assert_eq!(point.weight_a, 1.0);
            assert_relative_eq!(point.risk, 0.3, epsilon = 1e-12);
        }
        other => panic!("unexpected last call: {:?}", other),
    }
}

/// A clamped keystroke is corrected only after its own turn.
#[test]
fn test_clamp_protocol_ordering() {
    let mut session = new_session();

    session.handle(typed(FieldKind::StdDevB, "80"));
    assert_eq!(session.parameters().std_dev_b, 0.6);
    assert_eq!(session.display_text(FieldKind::StdDevB), "80");
    assert_eq!(session.announcer().last(), Some(CHART_UPDATED));

    session.end_turn();
    assert_eq!(session.display_text(FieldKind::StdDevB), "60.0%");
    assert_eq!(
        session.announcer().last(),
        Some("Standard Deviation B adjusted to maximum value 60%")
    );

    // next event starts from the corrected state
    session.dispatch(typed(FieldKind::StdDevB, "50%"));
    assert_eq!(session.parameters().std_dev_b, 0.5);
    assert_eq!(session.display_text(FieldKind::StdDevB), "50%");
}

/// Editing everything then resetting lands exactly on the default curve.
#[test]
fn test_edit_then_reset_round_trip() {
    let mut session = new_session();
    let initial = session.output().clone();

    session.dispatch(typed(FieldKind::ExpectedReturnA, "22%"));
    session.dispatch(typed(FieldKind::ExpectedReturnB, "0.09"));
    session.dispatch(typed(FieldKind::StdDevA, "41"));
    session.dispatch(typed(FieldKind::StdDevB, "12.5%"));
    session.dispatch(Event::Slider {
        param: ParamName::Correlation,
        value: 0.3,
    });
    session.dispatch(typed(FieldKind::ShareA, "65%"));
    assert_ne!(*session.output(), initial);

    session.dispatch(Event::Reset);
    assert_eq!(*session.parameters(), Parameters::default());
    assert_eq!(*session.output(), initial);
}

/// A programmatic batch produces one redraw and one announcement.
#[test]
fn test_batch_single_redraw() {
    let mut session = new_session();
    let update = ParameterUpdate::default()
        .with(ParamName::Correlation, -1.0)
        .with(ParamName::StdDevA, 0.3)
        .with(ParamName::StdDevB, 0.2)
        .with(ParamName::ShareA, 0.4);

    session.dispatch(Event::Batch(update));
    assert_eq!(session.chart().full_updates(), 2);
    assert_eq!(session.announcer().messages().len(), 1);
    assert_eq!(session.store().generation(), 1);

    // zero-risk hedge at 40% in asset A
    assert!(session.output().allocation_point.risk < 1e-7);
    assert_eq!(session.output().bounds.effective_x_min(), 0.0);
}

/// The worked example: equal split of the default assets.
#[test]
fn test_default_scenario() {
    let session = new_session();
    let point = &session.output().allocation_point;
    assert_relative_eq!(point.risk, 0.1803, epsilon = 1e-4);
    assert_relative_eq!(point.expected_return, 0.11, epsilon = 1e-12);
    assert_eq!(
        point.tooltip(),
        "Stock A share: 50%\nStock B share: 50%\nExpected return: 11.0%\nPortfolio standard deviation: 18.0%"
    );
}
