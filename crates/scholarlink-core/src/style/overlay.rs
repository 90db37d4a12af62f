//! Modal and tooltip positioning.

use super::{StyleRecord, Variant};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Fills the viewport minus a small margin
    Full,
}

impl Variant for ModalSize {
    const ALL: &'static [Self] = &[ModalSize::Sm, ModalSize::Md, ModalSize::Lg, ModalSize::Full];

    fn name(self) -> &'static str {
        match self {
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Full => "full",
        }
    }
}

pub struct ModalStyle;

impl ModalStyle {
    pub fn resolve(size: ModalSize) -> StyleRecord {
        let max_width = match size {
            ModalSize::Sm => "24rem",
            ModalSize::Md => "32rem",
            ModalSize::Lg => "48rem",
            ModalSize::Full => "calc(100vw - 2rem)",
        };
        StyleRecord::new()
            .background("var(--surface)")
            .foreground("var(--text)")
            .padding("1.5rem")
            .radius("var(--radius-lg)")
            .shadow("var(--shadow-lg)")
            .width("100%")
            .with("max-width", max_width)
            .with("max-height", "calc(100vh - 2rem)")
            .with("overflow-y", "auto")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum TooltipPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Variant for TooltipPlacement {
    const ALL: &'static [Self] = &[
        TooltipPlacement::Top,
        TooltipPlacement::Bottom,
        TooltipPlacement::Left,
        TooltipPlacement::Right,
    ];

    fn name(self) -> &'static str {
        match self {
            TooltipPlacement::Top => "top",
            TooltipPlacement::Bottom => "bottom",
            TooltipPlacement::Left => "left",
            TooltipPlacement::Right => "right",
        }
    }
}

pub struct TooltipStyle;

impl TooltipStyle {
    /// Position relative to a `position: relative` wrapper
    pub fn resolve(placement: TooltipPlacement) -> StyleRecord {
        let record = StyleRecord::new()
            .background("var(--tooltip-bg)")
            .foreground("var(--tooltip-fg)")
            .padding("0.25rem 0.5rem")
            .font_size("0.75rem")
            .radius("var(--radius-sm)")
            .with("position", "absolute")
            .with("white-space", "nowrap")
            .with("z-index", "50");

        match placement {
            TooltipPlacement::Top => record
                .with("bottom", "calc(100% + 0.5rem)")
                .with("left", "50%")
                .with("transform", "translateX(-50%)"),
            TooltipPlacement::Bottom => record
                .with("top", "calc(100% + 0.5rem)")
                .with("left", "50%")
                .with("transform", "translateX(-50%)"),
            TooltipPlacement::Left => record
                .with("right", "calc(100% + 0.5rem)")
                .with("top", "50%")
                .with("transform", "translateY(-50%)"),
            TooltipPlacement::Right => record
                .with("left", "calc(100% + 0.5rem)")
                .with("top", "50%")
                .with("transform", "translateY(-50%)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_sizes_set_max_width() {
        assert_eq!(ModalStyle::resolve(ModalSize::Sm).get("max-width"), Some("24rem"));
        assert_eq!(
            ModalStyle::resolve(ModalSize::from_name("nope")).get("max-width"),
            Some("32rem")
        );
    }

    #[test]
    fn tooltip_left_is_vertically_centered() {
        let record = TooltipStyle::resolve(TooltipPlacement::Left);
        assert_eq!(record.get("transform"), Some("translateY(-50%)"));
        assert_eq!(record.get("right"), Some("calc(100% + 0.5rem)"));
    }
}
