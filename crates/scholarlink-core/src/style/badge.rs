//! Badge styles: small status and tag labels.

use super::{Size, StyleRecord, Tone, Variant};

/// Badge color variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Variant for BadgeVariant {
    const ALL: &'static [Self] = &[
        BadgeVariant::Neutral,
        BadgeVariant::Primary,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Danger,
        BadgeVariant::Info,
    ];

    fn name(self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Info => "info",
        }
    }
}

impl BadgeVariant {
    pub fn tone(self) -> Tone {
        match self {
            BadgeVariant::Neutral => Tone::Neutral,
            BadgeVariant::Primary => Tone::Primary,
            BadgeVariant::Success => Tone::Success,
            BadgeVariant::Warning => Tone::Warning,
            BadgeVariant::Danger => Tone::Danger,
            BadgeVariant::Info => Tone::Info,
        }
    }
}

pub struct BadgeStyle;

impl BadgeStyle {
    /// Outlined badges drop the tinted fill in favour of a colored border
    pub fn resolve(variant: BadgeVariant, size: Size, outlined: bool) -> StyleRecord {
        let tone = variant.tone();
        let (background, border) = if outlined {
            ("transparent", format!("1px solid {}", tone.solid()))
        } else {
            (tone.soft(), "1px solid transparent".to_string())
        };
        let (padding, font_size) = match size {
            Size::Sm => ("0.125rem 0.5rem", "0.75rem"),
            Size::Md => ("0.25rem 0.625rem", "0.8125rem"),
            Size::Lg => ("0.375rem 0.75rem", "0.875rem"),
        };

        StyleRecord::new()
            .background(background)
            .foreground(tone.solid())
            .border(border)
            .padding(padding)
            .font_size(font_size)
            .radius("9999px")
            .with("display", "inline-flex")
            .with("align-items", "center")
            .with("font-weight", "600")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlined_badge_is_transparent() {
        let record = BadgeStyle::resolve(BadgeVariant::Success, Size::Md, true);
        assert_eq!(record.get("background"), Some("transparent"));
        assert_eq!(record.get("border"), Some("1px solid var(--success)"));
    }

    #[test]
    fn filled_badge_uses_soft_tone() {
        let record = BadgeStyle::resolve(BadgeVariant::Danger, Size::Sm, false);
        assert_eq!(record.get("background"), Some("var(--danger-soft)"));
        assert_eq!(record.get("color"), Some("var(--danger)"));
        assert_eq!(record.get("font-size"), Some("0.75rem"));
    }

    #[test]
    fn unknown_badge_name_is_neutral() {
        assert_eq!(BadgeVariant::from_name("sparkly"), BadgeVariant::Neutral);
    }
}
