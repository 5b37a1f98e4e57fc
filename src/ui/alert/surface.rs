// SPDX-License-Identifier: MPL-2.0
//! Attachment targets for presented alerts.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for an alert.
///
/// Actions hold their owner's id rather than a reference to it, so an action
/// never keeps its alert alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Something an alert can be attached to while it is on screen.
pub trait Surface {
    fn attach(&mut self, alert: AlertId);
    fn detach(&mut self, alert: AlertId);
}

/// Ordered stack of attached alerts. The last attached is on top.
#[derive(Debug, Default, Clone)]
pub struct Layer {
    attached: Vec<AlertId>,
}

impl Layer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The alert drawn above all others, if any.
    #[must_use]
    pub fn topmost(&self) -> Option<AlertId> {
        self.attached.last().copied()
    }

    #[must_use]
    pub fn contains(&self, alert: AlertId) -> bool {
        self.attached.contains(&alert)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl Surface for Layer {
    fn attach(&mut self, alert: AlertId) {
        if self.contains(alert) {
            log::warn!("Alert {alert:?} is already attached");
            return;
        }
        self.attached.push(alert);
    }

    fn detach(&mut self, alert: AlertId) {
        self.attached.retain(|id| *id != alert);
    }
}
