// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the alert lifecycle through the public API.

use iced_alert::config::{BUTTON_ROW_HEIGHT, CORNER_RADIUS, MESSAGE_MAX_HEIGHT, TITLE_MAX_HEIGHT};
use iced_alert::ui::alert::geometry::PathCommand;
use iced_alert::ui::alert::layout::{Layout, RoundedRegion, ShadowShape};
use iced_alert::ui::alert::{
    Action, Alert, AlertCategory, AverageAdvance, BadgeHeader, HeaderRenderer, Host, Layer,
    Message, Presentation, TextMetrics, Typeface,
};
use iced_alert::ui::design_tokens::palette;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

fn arc_count(commands: &[PathCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
        .count()
}

fn alert_with(actions: usize) -> Alert {
    let mut alert = Alert::new(AlertCategory::Notification).with_message("Body");
    for i in 0..actions {
        alert.add(Action::new(format!("Action {i}")));
    }
    alert
}

#[test]
fn up_to_three_actions_are_accepted() {
    for n in 0..=3 {
        assert_eq!(alert_with(n).actions().len(), n);
    }
}

#[test]
#[should_panic(expected = "There can't be more than 3 actions")]
fn a_fourth_action_fails_fast() {
    let mut alert = alert_with(3);
    alert.add(Action::new("One too many"));
}

#[test]
fn button_row_height_is_fixed_whenever_actions_exist() {
    let mut layer = Layer::new();
    for n in 0..=3 {
        let mut alert = alert_with(n);
        alert.show(&mut layer, None);
        let layout = alert.layout().expect("tree built on show");
        let expected = if n == 0 { 0.0 } else { BUTTON_ROW_HEIGHT };
        assert_eq!(layout.button_row.height, expected, "{n} actions");
    }
}

#[test]
fn cells_are_equal_width() {
    for n in 1..=3 {
        let layout = Layout::compute(20.0, 40.0, n);
        #[allow(clippy::cast_precision_loss)]
        let expected = layout.button_row.width / n as f32;
        for cell in &layout.cells {
            assert!((cell.width - expected).abs() < 1e-4);
        }
    }
}

#[test]
fn show_then_hide_completes_exactly_once() {
    let mut layer = Layer::new();
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    let mut alert = alert_with(1);
    let start = Instant::now();

    alert.show(
        &mut layer,
        Some(Box::new(move |_: &Alert| sink.set(sink.get() + 1))),
    );
    alert.hide(start);

    let mut at = start;
    for _ in 0..40 {
        at += Duration::from_millis(16);
        alert.tick(at, &mut layer);
    }

    assert_eq!(calls.get(), 1);
    assert_eq!(alert.presentation(), Presentation::Dismissed);
}

#[test]
fn handler_runs_before_dismiss_begins() {
    let mut host = Host::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&order);
    let action = Action::new("Go").on_tap(move |_| seen.borrow_mut().push("handler"));
    let done = Rc::clone(&order);
    let id = host.present(
        Alert::default().with_action(action),
        Some(Box::new(move |_: &Alert| done.borrow_mut().push("completion"))),
    );

    let now = Instant::now();
    host.handle_message(&Message::ActionTapped { alert: id, index: 0 }, now);
    assert_eq!(*order.borrow(), vec!["handler"]);
    assert!(host.alert(id).is_some_and(Alert::is_dismissing));

    host.handle_message(&Message::Frame(now + Duration::from_secs(1)), now);
    assert_eq!(*order.borrow(), vec!["handler", "completion"]);
}

#[test]
fn long_text_wraps_until_the_caps() {
    let metrics = TextMetrics::default();
    let layout = Layout::measure(
        Some("A short title"),
        Some("One two three four five six seven eight nine ten eleven twelve"),
        0,
        &metrics,
    );
    assert!(layout.message.height > 13.0 * 1.3, "message should wrap");
    assert!(layout.message.height < MESSAGE_MAX_HEIGHT);

    let huge = "word ".repeat(2000);
    let layout = Layout::measure(Some(&huge), Some(&huge), 0, &metrics);
    assert_eq!(layout.title.height, TITLE_MAX_HEIGHT);
    assert!(layout.message.height <= MESSAGE_MAX_HEIGHT);
}

#[test]
fn wide_glyph_message_gets_every_line_it_renders() {
    let wide = "MWMWMWMWMW MWMWMWMWMW MWMWMWMWMW MWMWMWMW";
    let line = Typeface::message().line_height();
    let mut layer = Layer::new();

    let mut shaped = Alert::default().with_message(wide);
    shaped.show(&mut layer, None);
    let message = shaped.layout().expect("tree built").message;
    assert!(message.height >= 3.0 * line - 0.01, "clipped at {}", message.height);

    let mut estimated = Alert::default()
        .with_message(wide)
        .with_metrics(TextMetrics::Estimated(AverageAdvance::default()));
    estimated.show(&mut layer, None);
    let message = estimated.layout().expect("tree built").message;
    assert!(message.height < 3.0 * line - 0.01);
}

#[test]
fn delete_confirmation_scenario() {
    let mut layer = Layer::new();
    let mut alert = Alert::new(AlertCategory::Warning)
        .with_title("Delete?")
        .with_message("This cannot be undone");
    alert.add(Action::new("Cancel"));
    alert.add(Action::new("Delete"));
    alert.show(&mut layer, None);

    assert_eq!(
        BadgeHeader.accent(alert.category()),
        palette::WARNING_500
    );

    let layout = alert.layout().expect("tree built on show");
    assert_eq!(layout.cells.len(), 2);
    assert_eq!(layout.cells[0].width, layout.cells[1].width);
    assert_eq!(layout.cells[0].y, layout.cells[1].y);

    assert_eq!(layout.rounded, RoundedRegion::ButtonRow);
    let row_mask = layout.button_row_mask().expect("button row is rounded");
    assert_eq!(arc_count(&row_mask), 2);
    assert_eq!(arc_count(&layout.content_mask()), 0);
    assert!(matches!(layout.shadow, ShadowShape::Slanted(_)));
    assert_eq!(layout.corner_radius, CORNER_RADIUS);
}

#[test]
fn saved_notice_scenario() {
    let mut layer = Layer::new();
    let mut alert = Alert::new(AlertCategory::Success).with_message("Saved.");
    alert.show(&mut layer, None);

    let layout = alert.layout().expect("tree built on show");
    assert_eq!(alert.title(), None);
    assert_eq!(layout.title.height, 0.0);
    assert_eq!(layout.button_row.height, 0.0);
    assert_eq!(layout.rounded, RoundedRegion::Content);
    assert_eq!(arc_count(&layout.content_mask()), 2);
    assert!(layout.button_row_mask().is_none());
}
