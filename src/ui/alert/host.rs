// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `Host` owns presented alerts, acts as their surface, routes button
//! taps to them and drives their dismiss transitions from frame ticks.

use super::header::{BadgeHeader, HeaderRenderer};
use super::modal::{Alert, Completion};
use super::surface::{AlertId, Layer};
use super::view;
use crate::config::FRAME_INTERVAL_MS;
use iced::widget::Stack;
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// Messages for alert state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The action at `index` of `alert` was tapped.
    ActionTapped { alert: AlertId, index: usize },
    /// Animation frame.
    Frame(Instant),
}

/// Owns presented alerts and the layer they are attached to.
#[derive(Debug)]
pub struct Host {
    layer: Layer,
    /// Presented or dismissing alerts, in presentation order.
    alerts: Vec<Alert>,
    header: Box<dyn HeaderRenderer>,
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl Host {
    /// Creates an empty host drawing headers with [`BadgeHeader`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_header(BadgeHeader)
    }

    /// Creates an empty host with a custom header renderer.
    #[must_use]
    pub fn with_header(header: impl HeaderRenderer + 'static) -> Self {
        Self {
            layer: Layer::new(),
            alerts: Vec::new(),
            header: Box::new(header),
        }
    }

    /// Shows `alert` above everything else.
    ///
    /// An alert that was already shown elsewhere is dropped with a warning.
    pub fn present(&mut self, mut alert: Alert, completion: Option<Completion>) -> AlertId {
        let id = alert.id();
        if alert.show(&mut self.layer, completion) {
            self.alerts.push(alert);
        } else {
            log::warn!("Alert {id:?} was not presented");
        }
        id
    }

    /// Starts dismissing the alert with `id`.
    ///
    /// Returns `true` if the alert was found and started its transition.
    pub fn hide(&mut self, id: AlertId, now: Instant) -> bool {
        self.alert_mut(id).is_some_and(|alert| alert.hide(now))
    }

    /// Taps the action at `index` of the alert with `id`.
    pub fn tap(&mut self, id: AlertId, index: usize, now: Instant) -> bool {
        match self.alert_mut(id) {
            Some(alert) => alert.tap(index, now),
            None => {
                log::debug!("Tap for unknown alert {id:?}");
                false
            }
        }
    }

    /// Advances every dismiss transition, then drops dismissed alerts.
    pub fn tick(&mut self, now: Instant) {
        for alert in &mut self.alerts {
            alert.tick(now, &mut self.layer);
        }
        self.alerts.retain(|alert| !alert.is_dismissed());
    }

    /// Handles an alert message. Taps use `now` as the start of the
    /// transition; frames carry their own instant.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::ActionTapped { alert, index } => {
                self.tap(*alert, *index, now);
            }
            Message::Frame(at) => {
                self.tick(*at);
            }
        }
    }

    /// Whether any alert is playing its dismiss transition.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.alerts.iter().any(Alert::is_dismissing)
    }

    /// Frame ticks, only while something is animating.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// The alert drawn on top, if any.
    #[must_use]
    pub fn topmost(&self) -> Option<&Alert> {
        self.layer.topmost().and_then(|id| self.alert(id))
    }

    #[must_use]
    pub fn alert(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id() == id)
    }

    pub fn alert_mut(&mut self, id: AlertId) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|alert| alert.id() == id)
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Number of alerts still on screen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// The topmost alert with its backdrop, in alert messages.
    pub fn overlay(&self) -> Option<Element<'_, Message>> {
        self.topmost()
            .and_then(|alert| view::overlay(alert, self.header.as_ref()))
    }

    /// Stacks the topmost alert over `base`.
    pub fn view<'a, M: 'a>(
        &'a self,
        base: Element<'a, M>,
        map: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        match self.overlay() {
            Some(overlay) => Stack::new().push(base).push(overlay.map(map)).into(),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::action::Action;
    use crate::ui::alert::category::AlertCategory;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_completion() -> (Rc<Cell<u32>>, Option<Completion>) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, Some(Box::new(move |_: &Alert| sink.set(sink.get() + 1))))
    }

    #[test]
    fn new_host_is_empty() {
        let host = Host::new();
        assert!(host.is_empty());
        assert!(host.topmost().is_none());
        assert!(!host.is_animating());
        assert!(host.overlay().is_none());
    }

    #[test]
    fn present_attaches_to_the_layer() {
        let mut host = Host::new();
        let id = host.present(Alert::default().with_message("Hi"), None);

        assert_eq!(host.len(), 1);
        assert!(host.layer().contains(id));
        assert_eq!(host.topmost().map(Alert::id), Some(id));
    }

    #[test]
    fn latest_alert_is_on_top() {
        let mut host = Host::new();
        host.present(Alert::new(AlertCategory::Error), None);
        let second = host.present(Alert::new(AlertCategory::Success), None);
        assert_eq!(host.topmost().map(Alert::id), Some(second));
    }

    #[test]
    fn tap_message_dismisses_after_the_transition() {
        let mut host = Host::new();
        let (count, completion) = counting_completion();
        let alert = Alert::default().with_action(Action::new("OK"));
        let id = host.present(alert, completion);
        let start = Instant::now();

        host.handle_message(&Message::ActionTapped { alert: id, index: 0 }, start);
        assert!(host.is_animating());

        host.handle_message(&Message::Frame(start + Duration::from_millis(50)), start);
        assert_eq!(count.get(), 0);
        assert_eq!(host.len(), 1);

        host.handle_message(&Message::Frame(start + Duration::from_millis(250)), start);
        assert_eq!(count.get(), 1);
        assert!(host.is_empty());
        assert!(host.layer().is_empty());
        assert!(!host.is_animating());
    }

    #[test]
    fn hide_of_unknown_alert_is_ignored() {
        let mut host = Host::new();
        assert!(!host.hide(AlertId::new(), Instant::now()));
        assert!(!host.tap(AlertId::new(), 0, Instant::now()));
    }

    #[test]
    fn already_dismissed_alert_is_not_presented() {
        let mut layer = Layer::new();
        let mut alert = Alert::default().with_dismiss_duration(Duration::ZERO);
        let now = Instant::now();
        alert.show(&mut layer, None);
        alert.hide(now);
        alert.tick(now, &mut layer);

        let mut host = Host::new();
        host.present(alert, None);
        assert!(host.is_empty());
    }
}
