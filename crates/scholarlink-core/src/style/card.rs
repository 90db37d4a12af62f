//! Card surface styles

use super::{Size, StyleRecord, Variant};

/// Card surface variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CardVariant {
    /// Raised surface with a drop shadow
    #[default]
    Elevated,
    /// Flat surface with a hairline border
    Outlined,
    /// Muted background, no border or shadow
    Flat,
}

impl Variant for CardVariant {
    const ALL: &'static [Self] = &[CardVariant::Elevated, CardVariant::Outlined, CardVariant::Flat];

    fn name(self) -> &'static str {
        match self {
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
            CardVariant::Flat => "flat",
        }
    }
}

/// Resolved card appearance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub record: StyleRecord,
    pub class: String,
}

impl CardStyle {
    pub fn resolve(variant: CardVariant, padding: Size, hoverable: bool) -> Self {
        let (background, border, shadow) = match variant {
            CardVariant::Elevated => ("var(--surface)", "1px solid transparent", "var(--shadow-md)"),
            CardVariant::Outlined => ("var(--surface)", "1px solid var(--border)", "none"),
            CardVariant::Flat => ("var(--surface-muted)", "1px solid transparent", "none"),
        };
        let padding = match padding {
            Size::Sm => "0.75rem",
            Size::Md => "1.25rem",
            Size::Lg => "2rem",
        };

        let mut record = StyleRecord::new()
            .background(background)
            .foreground("var(--text)")
            .border(border)
            .padding(padding)
            .radius("var(--radius-lg)")
            .shadow(shadow);
        let mut class = format!("card card-{}", variant.name());
        if hoverable {
            record = record.with("transition", "transform 150ms ease, box-shadow 150ms ease");
            class.push_str(" card-hoverable");
        }

        Self { record, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_variant_default_is_elevated() {
        assert_eq!(CardVariant::from_name(""), CardVariant::Elevated);
        assert_eq!(CardVariant::from_name("flat"), CardVariant::Flat);
    }

    #[test]
    fn outlined_has_border_and_no_shadow() {
        let style = CardStyle::resolve(CardVariant::Outlined, Size::Md, false);
        assert_eq!(style.record.get("border"), Some("1px solid var(--border)"));
        assert_eq!(style.record.get("box-shadow"), Some("none"));
        assert_eq!(style.class, "card card-outlined");
    }

    #[test]
    fn hoverable_adds_transition() {
        let style = CardStyle::resolve(CardVariant::Elevated, Size::Lg, true);
        assert!(style.record.get("transition").is_some());
        assert!(style.class.ends_with("card-hoverable"));
        assert_eq!(style.record.get("padding"), Some("2rem"));
    }
}
