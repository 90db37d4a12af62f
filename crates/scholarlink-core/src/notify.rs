//! Transient notification queue.
//!
//! The queue only stores items; scheduling lives with whoever owns the queue.
//! [`NotificationQueue::show`] reports whether the item needs an expiry timer,
//! and [`expire_after`] runs that timer and removes the item. Removal is
//! idempotent, so a timer that fires after the user already dismissed the
//! item is a no-op.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::style::Variant;

/// Default time a notification stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique notification identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NotificationId(Ulid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a notification
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Variant for NotificationKind {
    const ALL: &'static [Self] = &[
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    fn name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// A single on-screen notification
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    /// Zero means the notification stays until removed
    pub duration: Duration,
}

/// Result of [`NotificationQueue::show`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shown {
    pub id: NotificationId,
    /// `None` when auto-expiry is disabled
    pub expires_after: Option<Duration>,
}

/// Ordered collection of active notifications, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    limit: Option<usize>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the queue; the oldest items are dropped when it overflows
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Append a notification and report whether it needs an expiry timer
    pub fn show(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration: Duration,
    ) -> Shown {
        let id = NotificationId::new();
        let message = message.into();
        tracing::debug!(%id, kind = kind.name(), ?duration, "showing notification");

        self.items.push(Notification {
            id,
            kind,
            message,
            duration,
        });

        if let Some(limit) = self.limit {
            if self.items.len() > limit {
                let overflow = self.items.len() - limit;
                self.items.drain(..overflow);
            }
        }

        Shown {
            id,
            expires_after: (!duration.is_zero()).then_some(duration),
        }
    }

    /// Remove by id. Returns false when the item is already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Items in display order (newest last)
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Wait out a notification's duration, then remove it.
///
/// Returns immediately with `false` when auto-expiry is disabled. Otherwise
/// returns whatever `remove` reports, which is `false` when the user
/// dismissed the item first.
pub async fn expire_after<F>(shown: Shown, remove: F) -> bool
where
    F: FnOnce(NotificationId) -> bool,
{
    let Some(delay) = shown.expires_after else {
        return false;
    };

    tokio::time::sleep(delay).await;

    let removed = remove(shown.id);
    if removed {
        tracing::debug!(id = %shown.id, "notification expired");
    } else {
        tracing::debug!(id = %shown.id, "notification already dismissed");
    }
    removed
}
