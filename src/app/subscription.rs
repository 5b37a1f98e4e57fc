// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo.

use super::Message;
use crate::ui::alert::Host;
use iced::Subscription;

/// Animation frames for dismissing alerts.
///
/// Empty while nothing animates, so the demo is idle between taps.
pub fn create_frame_subscription(host: &Host) -> Subscription<Message> {
    host.subscription().map(Message::Alert)
}
