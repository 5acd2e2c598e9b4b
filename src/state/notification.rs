//! Success notification with a scheduled auto-hide

use crate::state::forms::FormView;
use chrono::{DateTime, Local};
use std::time::Duration;
use tokio::time::Instant;

/// How long the success notification stays visible
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Pending hide of the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub deadline: Instant,
}

/// Shows the success notification and hides it again after `delay`
#[derive(Debug)]
pub struct NotificationTimer {
    delay: Duration,
    pending: Option<ScheduledHide>,
    /// Wall-clock time of the last `show_success`, shown in the toast
    shown_at: Option<DateTime<Local>>,
}

impl NotificationTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            shown_at: None,
        }
    }

    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Show the notification and schedule its hide `delay` after `now`.
    ///
    /// A hide that is still pending is replaced, so the last call decides
    /// when the notification disappears.
    pub fn show_success<V: FormView + ?Sized>(&mut self, view: &mut V, now: Instant) {
        view.set_notification_shown(true);
        self.shown_at = Some(Local::now());
        self.pending = Some(ScheduledHide {
            deadline: now + self.delay,
        });
    }

    /// Run the scheduled hide if its deadline has passed.
    ///
    /// Returns true when the notification was hidden by this call.
    pub fn tick<V: FormView + ?Sized>(&mut self, view: &mut V, now: Instant) -> bool {
        match self.pending {
            Some(hide) if now >= hide.deadline => {
                self.pending = None;
                view.set_notification_shown(false);
                tracing::debug!("success notification hidden");
                true
            }
            _ => false,
        }
    }

    /// Hide right away and drop any pending hide
    pub fn dismiss<V: FormView + ?Sized>(&mut self, view: &mut V) {
        self.cancel();
        view.set_notification_shown(false);
    }

    /// Drop the pending hide without touching visibility
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<ScheduledHide> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn shown_at(&self) -> Option<DateTime<Local>> {
        self.shown_at
    }
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}
