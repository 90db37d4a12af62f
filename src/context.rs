//! Shared view state for ScholarLink.
//!
//! The root component provides these signals; child components read them
//! with the `use_*` hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let notifier = use_notifier();
//! notifier.success("Application submitted");
//!
//! let board = use_board();
//! let tally = board.read().tally();
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use scholarlink_core::{
    Application, NotificationId, NotificationKind, NotificationQueue, OpportunityPost,
    ReviewBoard, Shown,
};

/// Handle for raising notifications from anywhere in the tree.
///
/// Items live in the root queue signal. Items with a non-zero duration are
/// handed to the root expiry coroutine, which removes them when their timer
/// fires. Timers die with the root view.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: Signal<NotificationQueue>,
    timers: Coroutine<Shown>,
    default_duration: Duration,
}

impl Notifier {
    pub fn new(
        queue: Signal<NotificationQueue>,
        timers: Coroutine<Shown>,
        default_duration: Duration,
    ) -> Self {
        Self {
            queue,
            timers,
            default_duration,
        }
    }

    /// Show a notification. A zero duration keeps it until removed.
    pub fn show(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration: Duration,
    ) -> NotificationId {
        let mut queue = self.queue;
        let shown = queue.write().show(kind, message, duration);
        if shown.expires_after.is_some() {
            self.timers.send(shown);
        }
        shown.id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Success, message, self.default_duration)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Error, message, self.default_duration)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Warning, message, self.default_duration)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Info, message, self.default_duration)
    }

    /// Dismiss early. Safe to call for ids that already expired.
    pub fn remove(&self, id: NotificationId) {
        let mut queue = self.queue;
        queue.write().remove(id);
    }

    pub fn queue(&self) -> Signal<NotificationQueue> {
        self.queue
    }
}

/// Posted opportunities (read-only after launch)
#[derive(Clone, Copy)]
pub struct Opportunities(pub Signal<Vec<OpportunityPost>>);

/// Applications the student has submitted
#[derive(Clone, Copy)]
pub struct MyApplications(pub Signal<Vec<Application>>);

/// Simulated delay before a submitted form is accepted
#[derive(Clone, Copy)]
pub struct SubmitLatency(pub Duration);

/// Hook to access the notification handle.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Hook to access the applicant review board.
pub fn use_board() -> Signal<ReviewBoard> {
    use_context::<Signal<ReviewBoard>>()
}

pub fn use_opportunities() -> Signal<Vec<OpportunityPost>> {
    use_context::<Opportunities>().0
}

pub fn use_applications() -> Signal<Vec<Application>> {
    use_context::<MyApplications>().0
}

pub fn use_submit_latency() -> Duration {
    use_context::<SubmitLatency>().0
}
