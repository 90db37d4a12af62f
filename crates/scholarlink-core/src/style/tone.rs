//! Semantic color tones shared by badges, buttons and toasts.

/// Semantic color family, each backed by a pair of CSS custom properties
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    /// Saturated color, used for text on soft backgrounds and borders
    pub fn solid(self) -> &'static str {
        match self {
            Tone::Neutral => "var(--text-muted)",
            Tone::Primary => "var(--primary)",
            Tone::Success => "var(--success)",
            Tone::Warning => "var(--warning)",
            Tone::Danger => "var(--danger)",
            Tone::Info => "var(--info)",
        }
    }

    /// Tinted background
    pub fn soft(self) -> &'static str {
        match self {
            Tone::Neutral => "var(--surface-muted)",
            Tone::Primary => "var(--primary-soft)",
            Tone::Success => "var(--success-soft)",
            Tone::Warning => "var(--warning-soft)",
            Tone::Danger => "var(--danger-soft)",
            Tone::Info => "var(--info-soft)",
        }
    }
}
