// SPDX-License-Identifier: MPL-2.0
//! The modal alert and its presentation lifecycle.

use super::action::Action;
use super::category::AlertCategory;
use super::layout::Layout;
use super::lifecycle::{Appearance, DismissAnimation, Presentation};
use super::metrics::TextMetrics;
use super::surface::{AlertId, Surface};
use crate::config::{Config, MAX_ACTIONS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Callback run once the dismiss transition has finished.
pub type Completion = Box<dyn FnOnce(&Alert)>;

/// What `show` freezes: the layout every later frame is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub layout: Layout,
}

/// A modal popup with a category header, a title, a message and up to three
/// actions.
///
/// An alert is single-use: once dismissed it cannot be shown again.
pub struct Alert {
    id: AlertId,
    category: AlertCategory,
    title: Option<String>,
    message: Option<String>,
    actions: Vec<Action>,
    separator_color: Color,
    backdrop_color: Color,
    animation: DismissAnimation,
    metrics: TextMetrics,
    completion: Option<Completion>,
    presentation: Presentation,
    appearance: Appearance,
    tree: Option<Tree>,
}

impl Alert {
    #[must_use]
    pub fn new(category: AlertCategory) -> Self {
        Self {
            id: AlertId::new(),
            category,
            title: None,
            message: None,
            actions: Vec::with_capacity(MAX_ACTIONS),
            separator_color: palette::SEPARATOR,
            backdrop_color: palette::BACKDROP,
            animation: DismissAnimation::default(),
            metrics: TextMetrics::default(),
            completion: None,
            presentation: Presentation::Unpresented,
            appearance: Appearance::IDENTITY,
            tree: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Applies the user's appearance and animation settings.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.separator_color = config.separator_color();
        self.backdrop_color = config.backdrop_color();
        self.animation = DismissAnimation::new(config.dismiss_duration());
        self
    }

    #[must_use]
    pub fn with_backdrop_color(mut self, color: Color) -> Self {
        self.backdrop_color = color;
        self
    }

    #[must_use]
    pub fn with_dismiss_duration(mut self, duration: Duration) -> Self {
        self.animation = DismissAnimation::new(duration);
        self
    }

    /// Replaces the text measurement model used when the tree is built.
    #[must_use]
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Builder form of [`Alert::add`].
    ///
    /// # Panics
    ///
    /// Panics if the alert already has three actions.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.add(action);
        self
    }

    /// Appends an action to the button row.
    ///
    /// Actions added after the first `show` are kept but not displayed, since
    /// the visual tree is only built once.
    ///
    /// # Panics
    ///
    /// Panics if the alert already has three actions.
    pub fn add(&mut self, mut action: Action) {
        assert!(
            self.actions.len() < MAX_ACTIONS,
            "There can't be more than {MAX_ACTIONS} actions"
        );
        if self.tree.is_some() {
            log::warn!(
                "Action {:?} added to alert {:?} after it was shown; it will not be displayed",
                action.label(),
                self.id
            );
        }
        action.set_owner(self.id);
        self.actions.push(action);
    }

    /// Changes the color shown between action buttons. Takes effect on the
    /// next frame, even while presented.
    pub fn set_separator_color(&mut self, color: Color) {
        self.separator_color = color;
    }

    /// Attaches the alert to `surface` and starts presenting it.
    ///
    /// Returns `false` and does nothing if the alert was already shown.
    pub fn show(&mut self, surface: &mut dyn Surface, completion: Option<Completion>) -> bool {
        if self.presentation != Presentation::Unpresented {
            log::warn!(
                "Ignoring show for alert {:?} in state {:?}",
                self.id,
                self.presentation
            );
            return false;
        }

        if self.tree.is_none() {
            self.tree = Some(self.build_tree());
        }
        surface.attach(self.id);
        self.completion = completion;
        self.presentation = Presentation::Presented;
        self.appearance = Appearance::IDENTITY;
        log::debug!("Alert {:?} presented ({})", self.id, self.category);
        true
    }

    /// Starts the dismiss transition at `now`.
    ///
    /// Returns `false` and does nothing unless the alert is presented.
    pub fn hide(&mut self, now: Instant) -> bool {
        if self.presentation != Presentation::Presented {
            log::warn!(
                "Ignoring hide for alert {:?} in state {:?}",
                self.id,
                self.presentation
            );
            return false;
        }
        self.presentation = Presentation::Dismissing { started: now };
        log::debug!("Alert {:?} dismissing", self.id);
        true
    }

    /// Advances the dismiss transition.
    ///
    /// When it has run its course, the alert detaches from `surface` and its
    /// completion runs. Returns `true` on that tick only.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn Surface) -> bool {
        let Presentation::Dismissing { started } = self.presentation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        self.appearance = self.animation.appearance(elapsed);
        if !self.animation.is_finished(elapsed) {
            return false;
        }

        surface.detach(self.id);
        self.presentation = Presentation::Dismissed;
        log::debug!("Alert {:?} dismissed", self.id);
        if let Some(completion) = self.completion.take() {
            completion(self);
        }
        true
    }

    /// Taps the action at `index`: its handler runs, then the alert hides.
    ///
    /// Returns `false` if the alert is not presented or no displayed action
    /// sits at `index`.
    pub fn tap(&mut self, index: usize, now: Instant) -> bool {
        if self.presentation != Presentation::Presented {
            log::debug!("Ignoring tap on alert {:?} that is not presented", self.id);
            return false;
        }
        if index >= self.displayed_action_count() {
            log::warn!("Ignoring tap on missing action {index} of alert {:?}", self.id);
            return false;
        }

        let owner = self.actions[index].tap();
        if owner == Some(self.id) {
            self.hide(now)
        } else {
            false
        }
    }

    fn build_tree(&self) -> Tree {
        log::debug!(
            "Building tree for alert {:?} with {} action(s)",
            self.id,
            self.actions.len()
        );
        Tree {
            layout: Layout::measure(
                self.title.as_deref(),
                self.message.as_deref(),
                self.actions.len(),
                &self.metrics,
            ),
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> AlertCategory {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Actions that have a cell in the built tree.
    #[must_use]
    pub fn displayed_action_count(&self) -> usize {
        self.tree
            .as_ref()
            .map_or(self.actions.len(), |tree| tree.layout.action_count())
    }

    #[must_use]
    pub fn separator_color(&self) -> Color {
        self.separator_color
    }

    #[must_use]
    pub fn backdrop_color(&self) -> Color {
        self.backdrop_color
    }

    #[must_use]
    pub fn dismiss_duration(&self) -> Duration {
        self.animation.duration()
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presentation == Presentation::Presented
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        matches!(self.presentation, Presentation::Dismissing { .. })
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.presentation == Presentation::Dismissed
    }

    /// Current scale and opacity of the card.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[must_use]
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Layout of the built tree, if the alert has been shown.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.tree.as_ref().map(|tree| &tree.layout)
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::new(AlertCategory::default())
    }
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("actions", &self.actions)
            .field("presentation", &self.presentation)
            .field("has_completion", &self.completion.is_some())
            .field("built", &self.tree.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::surface::Layer;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Completion) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, Box::new(move |_: &Alert| sink.set(sink.get() + 1)))
    }

    #[test]
    fn new_alert_is_unpresented_and_unbuilt() {
        let alert = Alert::default();
        assert_eq!(alert.category(), AlertCategory::Notification);
        assert_eq!(alert.presentation(), Presentation::Unpresented);
        assert!(alert.tree().is_none());
        assert_eq!(alert.separator_color(), palette::SEPARATOR);
    }

    #[test]
    fn add_assigns_owner() {
        let mut alert = Alert::new(AlertCategory::Warning);
        alert.add(Action::new("OK"));
        assert_eq!(alert.actions()[0].owner(), Some(alert.id()));
    }

    #[test]
    #[should_panic(expected = "There can't be more than 3 actions")]
    fn fourth_action_panics() {
        let _ = Alert::default()
            .with_action(Action::new("1"))
            .with_action(Action::new("2"))
            .with_action(Action::new("3"))
            .with_action(Action::new("4"));
    }

    #[test]
    fn show_attaches_and_builds_once() {
        let mut layer = Layer::new();
        let mut alert = Alert::default().with_message("Hello");

        assert!(alert.show(&mut layer, None));
        assert!(layer.contains(alert.id()));
        let built = alert.tree().cloned();
        assert!(built.is_some());

        // A second show changes nothing.
        assert!(!alert.show(&mut layer, None));
        assert_eq!(alert.tree().cloned(), built);
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn hide_before_show_is_ignored() {
        let mut alert = Alert::default();
        assert!(!alert.hide(Instant::now()));
        assert_eq!(alert.presentation(), Presentation::Unpresented);
    }

    #[test]
    fn completion_waits_for_the_animation() {
        let mut layer = Layer::new();
        let (count, completion) = counter();
        let mut alert = Alert::default();
        let start = Instant::now();

        alert.show(&mut layer, Some(completion));
        assert!(alert.hide(start));
        assert!(!alert.hide(start), "second hide is a no-op");

        assert!(!alert.tick(start + Duration::from_millis(100), &mut layer));
        assert_eq!(count.get(), 0);
        assert!(layer.contains(alert.id()));
        assert!(alert.appearance().opacity < 1.0);

        assert!(alert.tick(start + Duration::from_millis(200), &mut layer));
        assert_eq!(count.get(), 1);
        assert!(alert.is_dismissed());
        assert!(layer.is_empty());

        // Later ticks do not fire it again.
        assert!(!alert.tick(start + Duration::from_secs(1), &mut layer));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dismissed_alert_cannot_be_shown_again() {
        let mut layer = Layer::new();
        let mut alert = Alert::default().with_dismiss_duration(Duration::ZERO);
        let now = Instant::now();

        alert.show(&mut layer, None);
        alert.hide(now);
        alert.tick(now, &mut layer);

        assert!(!alert.show(&mut layer, None));
        assert!(layer.is_empty());
    }

    #[test]
    fn completion_sees_the_dismissed_alert() {
        let mut layer = Layer::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut alert = Alert::new(AlertCategory::Success).with_title("Done");
        let now = Instant::now();

        alert.show(
            &mut layer,
            Some(Box::new(move |alert: &Alert| {
                *sink.borrow_mut() = Some((alert.title().map(str::to_owned), alert.is_dismissed()));
            })),
        );
        alert.hide(now);
        alert.tick(now + Duration::from_millis(250), &mut layer);

        assert_eq!(*seen.borrow(), Some((Some("Done".to_owned()), true)));
    }

    #[test]
    fn tap_runs_handler_then_hides() {
        let mut layer = Layer::new();
        let tapped = Rc::new(Cell::new(false));
        let sink = Rc::clone(&tapped);
        let mut alert = Alert::default()
            .with_action(Action::new("Cancel"))
            .with_action(Action::new("OK").on_tap(move |_| sink.set(true)));

        alert.show(&mut layer, None);
        assert!(alert.tap(1, Instant::now()));
        assert!(tapped.get());
        assert!(alert.is_dismissing());
    }

    #[test]
    fn taps_outside_presentation_or_range_are_ignored() {
        let mut layer = Layer::new();
        let mut alert = Alert::default().with_action(Action::new("OK"));

        assert!(!alert.tap(0, Instant::now()));
        alert.show(&mut layer, None);
        assert!(!alert.tap(5, Instant::now()));
        assert!(alert.is_presented());
    }

    #[test]
    fn actions_added_after_show_are_not_displayed() {
        let mut layer = Layer::new();
        let mut alert = Alert::default().with_action(Action::new("OK"));
        alert.show(&mut layer, None);
        alert.add(Action::new("Late"));

        assert_eq!(alert.actions().len(), 2);
        assert_eq!(alert.displayed_action_count(), 1);
        assert!(!alert.tap(1, Instant::now()));
    }

    #[test]
    fn separator_color_stays_mutable() {
        let mut layer = Layer::new();
        let mut alert = Alert::default();
        alert.show(&mut layer, None);
        alert.set_separator_color(palette::ERROR_500);
        assert_eq!(alert.separator_color(), palette::ERROR_500);
    }

    #[test]
    fn config_overrides_colors_and_duration() {
        let mut config = Config::default();
        config.animation.dismiss_duration_ms = Some(400);
        let alert = Alert::default().with_config(&config);
        assert_eq!(alert.dismiss_duration(), Duration::from_millis(400));
        assert_eq!(alert.backdrop_color(), palette::BACKDROP);
    }
}
