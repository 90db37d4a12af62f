//! Button style resolution
//!
//! - Primary: filled with the brand color
//! - Secondary: filled with the secondary color
//! - Outline: transparent with a brand border
//! - Ghost: transparent, borderless until hovered

use super::{Size, StyleRecord, Variant};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ButtonVariant {
    /// Main call to action
    #[default]
    Primary,
    /// Alternative action of similar weight
    Secondary,
    /// Bordered, transparent background
    Outline,
    /// Subtle action, text only
    Ghost,
}

impl Variant for ButtonVariant {
    const ALL: &'static [Self] = &[
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Boolean props that affect a button's appearance
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ButtonFlags {
    pub full_width: bool,
    pub rounded: bool,
    pub loading: bool,
    pub disabled: bool,
}

/// Resolved appearance of a button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub record: StyleRecord,
    /// Class list for hover/focus rules the inline style cannot express
    pub class: String,
    interactive: bool,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, size: Size, flags: ButtonFlags) -> Self {
        let (background, foreground, border, shadow) = match variant {
            ButtonVariant::Primary => (
                "var(--primary)",
                "var(--on-primary)",
                "1px solid var(--primary)",
                "var(--shadow-sm)",
            ),
            ButtonVariant::Secondary => (
                "var(--secondary)",
                "var(--on-secondary)",
                "1px solid var(--secondary)",
                "var(--shadow-sm)",
            ),
            ButtonVariant::Outline => (
                "transparent",
                "var(--primary)",
                "1px solid var(--primary)",
                "none",
            ),
            ButtonVariant::Ghost => ("transparent", "var(--text)", "1px solid transparent", "none"),
        };

        let padding = match size {
            Size::Sm => "0.375rem 0.75rem",
            Size::Md => "0.5rem 1rem",
            Size::Lg => "0.75rem 1.5rem",
        };

        let interactive = !(flags.loading || flags.disabled);

        let mut record = StyleRecord::new()
            .background(background)
            .foreground(foreground)
            .border(border)
            .padding(padding)
            .font_size(size.font_size())
            .radius(if flags.rounded { "9999px" } else { "var(--radius-md)" })
            .shadow(shadow);
        if flags.full_width {
            record = record.width("100%");
        }
        record = if interactive {
            record.with("cursor", "pointer")
        } else {
            record.with("cursor", "not-allowed").with("opacity", "0.6")
        };

        let mut class = format!("btn btn-{} btn-{}", variant.name(), size.name());
        if flags.loading {
            class.push_str(" btn-loading");
        }

        Self {
            record,
            class,
            interactive,
        }
    }

    /// False while loading or disabled; the element must render `disabled`
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_names() {
        assert_eq!(ButtonVariant::Primary.name(), "primary");
        assert_eq!(ButtonVariant::Secondary.name(), "secondary");
        assert_eq!(ButtonVariant::Outline.name(), "outline");
        assert_eq!(ButtonVariant::Ghost.name(), "ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::from_name("danger"), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::from_name("OUTLINE"), ButtonVariant::Outline);
    }

    #[test]
    fn loading_primary_large_is_not_interactive() {
        let flags = ButtonFlags {
            loading: true,
            ..Default::default()
        };
        let style = ButtonStyle::resolve(ButtonVariant::Primary, Size::Lg, flags);
        assert!(!style.is_interactive());
        assert_eq!(style.record.get("cursor"), Some("not-allowed"));
        assert_eq!(style.record.get("padding"), Some("0.75rem 1.5rem"));
        assert!(style.class.contains("btn-loading"));
    }

    #[test]
    fn outline_is_transparent() {
        let style = ButtonStyle::resolve(ButtonVariant::Outline, Size::Md, ButtonFlags::default());
        assert_eq!(style.record.get("background"), Some("transparent"));
        assert!(style.is_interactive());
    }

    #[test]
    fn full_width_and_rounded() {
        let flags = ButtonFlags {
            full_width: true,
            rounded: true,
            ..Default::default()
        };
        let style = ButtonStyle::resolve(ButtonVariant::Ghost, Size::Sm, flags);
        assert_eq!(style.record.get("width"), Some("100%"));
        assert_eq!(style.record.get("border-radius"), Some("9999px"));
    }
}
