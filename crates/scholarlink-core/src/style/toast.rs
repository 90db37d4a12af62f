//! Toast appearance per notification kind.

use super::{StyleRecord, Tone};
use crate::notify::NotificationKind;

/// Resolved toast appearance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastStyle {
    pub record: StyleRecord,
    pub icon: &'static str,
    /// `alert` interrupts screen readers, `status` waits politely
    pub role: &'static str,
}

impl ToastStyle {
    pub fn resolve(kind: NotificationKind) -> Self {
        let (tone, icon, role) = match kind {
            NotificationKind::Success => (Tone::Success, "\u{2713}", "status"),
            NotificationKind::Error => (Tone::Danger, "\u{2715}", "alert"),
            NotificationKind::Warning => (Tone::Warning, "\u{26A0}", "alert"),
            NotificationKind::Info => (Tone::Info, "\u{2139}", "status"),
        };

        let record = StyleRecord::new()
            .background("var(--surface)")
            .foreground("var(--text)")
            .border(format!("1px solid {}", tone.soft()))
            .padding("0.75rem 1rem")
            .radius("var(--radius-md)")
            .shadow("var(--shadow-md)")
            .with("border-left", format!("4px solid {}", tone.solid()));

        Self { record, icon, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toast_is_an_alert() {
        let style = ToastStyle::resolve(NotificationKind::Error);
        assert_eq!(style.role, "alert");
        assert_eq!(style.record.get("border-left"), Some("4px solid var(--danger)"));
    }

    #[test]
    fn info_toast_is_polite() {
        assert_eq!(ToastStyle::resolve(NotificationKind::Info).role, "status");
    }
}
