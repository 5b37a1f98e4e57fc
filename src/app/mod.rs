// SPDX-License-Identifier: MPL-2.0
//! Demo application presenting one configurable alert.
//!
//! The `App` keeps the alert host, the loaded configuration and a short log
//! of what the user tapped. Pressing "Show alert" presents a fresh alert built
//! from the launch flags.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::alert::{Action, Alert, Host};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Labels used for one, two and three actions.
const ACTION_LABELS: [&[&str]; 4] = [&[], &["OK"], &["Cancel", "OK"], &["Cancel", "Retry", "OK"]];

/// Root iced application state.
pub struct App {
    host: Host,
    config: Config,
    flags: Flags,
    /// Taps and completions, newest last. Shared with action handlers.
    events: Rc<RefCell<Vec<String>>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("alerts", &self.host.len())
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 wants an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and presents the first alert.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let flags = flags.sanitized();
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, warning) = config::load_with_override(config_dir);
        if let Some(warning) = warning {
            log::warn!("{warning}");
        }

        let mut app = Self {
            host: Host::new(),
            config,
            flags,
            events: Rc::new(RefCell::new(Vec::new())),
        };
        app.present_alert();
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("IcedAlert - {}", self.flags.category)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Alert(message) => self.host.handle_message(&message, Instant::now()),
            Message::ShowAlert => self.present_alert(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let status = self
            .events
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| "Nothing tapped yet".to_owned());

        let show = button(text("Show alert").size(typography::BODY).center())
            .on_press_maybe(self.host.is_empty().then_some(Message::ShowAlert))
            .padding(spacing::CONTENT_GAP)
            .style(styles::button_primary);

        let base = container(
            column![
                text("iced-alert demo").size(typography::TITLE),
                text(status).size(typography::BODY),
                show,
            ]
            .spacing(spacing::CONTENT_INSET),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::PAGE)
        .style(styles::container::page);

        self.host.view(base.into(), Message::Alert)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(&self.host)
    }

    fn present_alert(&mut self) {
        let alert = self.build_alert();
        let events = Rc::clone(&self.events);
        self.host.present(
            alert,
            Some(Box::new(move |alert: &Alert| {
                events
                    .borrow_mut()
                    .push(format!("{} alert dismissed", alert.category()));
            })),
        );
    }

    fn build_alert(&self) -> Alert {
        let mut alert = Alert::new(self.flags.category).with_config(&self.config);
        if let Some(title) = &self.flags.title {
            alert = alert.with_title(title.clone());
        }
        if let Some(message) = &self.flags.message {
            alert = alert.with_message(message.clone());
        }

        for label in ACTION_LABELS[self.flags.actions] {
            let events = Rc::clone(&self.events);
            alert.add(Action::new(*label).on_tap(move |action| {
                events
                    .borrow_mut()
                    .push(format!("Tapped {}", action.label().unwrap_or_default()));
            }));
        }
        alert
    }

    /// Log of taps and completions, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }
}
