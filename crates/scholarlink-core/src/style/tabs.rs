use super::{StyleRecord, Variant};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum TabsVariant {
    #[default]
    Underline,
    Pills,
}

impl Variant for TabsVariant {
    const ALL: &'static [Self] = &[TabsVariant::Underline, TabsVariant::Pills];

    fn name(self) -> &'static str {
        match self {
            TabsVariant::Underline => "underline",
            TabsVariant::Pills => "pills",
        }
    }
}

pub struct TabStyle;

impl TabStyle {
    /// Style of a single tab trigger
    pub fn resolve(variant: TabsVariant, active: bool) -> StyleRecord {
        let record = StyleRecord::new()
            .padding("0.5rem 1rem")
            .font_size("0.875rem")
            .with("cursor", "pointer")
            .with("font-weight", if active { "600" } else { "500" });

        match (variant, active) {
            (TabsVariant::Underline, true) => record
                .background("transparent")
                .foreground("var(--primary)")
                .border("none")
                .with("border-bottom", "2px solid var(--primary)"),
            (TabsVariant::Underline, false) => record
                .background("transparent")
                .foreground("var(--text-muted)")
                .border("none")
                .with("border-bottom", "2px solid transparent"),
            (TabsVariant::Pills, true) => record
                .background("var(--primary)")
                .foreground("var(--on-primary)")
                .border("none")
                .radius("9999px"),
            (TabsVariant::Pills, false) => record
                .background("transparent")
                .foreground("var(--text-muted)")
                .border("none")
                .radius("9999px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_underline_tab_has_primary_border() {
        let record = TabStyle::resolve(TabsVariant::Underline, true);
        assert_eq!(record.get("border-bottom"), Some("2px solid var(--primary)"));
    }

    #[test]
    fn inactive_pill_is_transparent() {
        let record = TabStyle::resolve(TabsVariant::Pills, false);
        assert_eq!(record.get("background"), Some("transparent"));
        assert_eq!(record.get("border-radius"), Some("9999px"));
    }
}
