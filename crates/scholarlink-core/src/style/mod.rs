//! Variant resolution for the UI primitives.
//!
//! Every primitive takes a handful of enumerated props (variant, size, a few
//! flags) and turns them into a [`StyleRecord`]. The resolvers are plain
//! `match` expressions, so they are total: there is no lookup that can fail,
//! and names that do not parse fall back to the enumeration's default.
//!
//! Colors are always `var(--token)` references into the global stylesheet,
//! which keeps a single place for the palette.

use std::borrow::Cow;
use std::fmt;

mod avatar;
mod badge;
mod button;
mod card;
mod field;
mod layout;
mod overlay;
mod tabs;
mod toast;
mod tone;

pub use avatar::{initials, placeholder_color, AvatarShape, AvatarStyle};
pub use badge::{BadgeStyle, BadgeVariant};
pub use button::{ButtonFlags, ButtonStyle, ButtonVariant};
pub use card::{CardStyle, CardVariant};
pub use field::{FieldState, FieldStyle};
pub use layout::{Align, FlexDirection, FlexStyle, GridStyle, Justify, MAX_GRID_COLUMNS};
pub use overlay::{ModalSize, ModalStyle, TooltipPlacement, TooltipStyle};
pub use tabs::{TabStyle, TabsVariant};
pub use toast::ToastStyle;
pub use tone::Tone;

/// A closed set of named style options.
///
/// `from_name` is total: it trims, compares case-insensitively and falls back
/// to `Default` for anything it does not recognise.
pub trait Variant: Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Every value of the enumeration, in declaration order
    const ALL: &'static [Self];

    /// Canonical lowercase name
    fn name(self) -> &'static str;

    /// Parse a name, falling back to the default for unknown input
    fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Resolve an optional prop
    fn or_default(value: Option<Self>) -> Self {
        value.unwrap_or_default()
    }
}

/// Shared size scale used by most primitives
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Variant for Size {
    const ALL: &'static [Self] = &[Size::Sm, Size::Md, Size::Lg];

    fn name(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Size::Sm,
            "lg" | "large" => Size::Lg,
            _ => Size::Md,
        }
    }
}

impl Size {
    /// Font size for text-bearing controls
    pub fn font_size(self) -> &'static str {
        match self {
            Size::Sm => "0.875rem",
            Size::Md => "1rem",
            Size::Lg => "1.125rem",
        }
    }

    /// Gap between children in layout helpers
    pub fn gap(self) -> &'static str {
        match self {
            Size::Sm => "0.5rem",
            Size::Md => "1rem",
            Size::Lg => "1.5rem",
        }
    }
}

/// Flat set of CSS values for one rendered primitive.
///
/// Empty fields are omitted from [`StyleRecord::to_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRecord {
    pub background: Cow<'static, str>,
    pub foreground: Cow<'static, str>,
    pub border: Cow<'static, str>,
    pub padding: Cow<'static, str>,
    pub font_size: Cow<'static, str>,
    pub radius: Cow<'static, str>,
    pub shadow: Cow<'static, str>,
    pub width: Cow<'static, str>,
    /// Additional declarations, rendered in insertion order
    pub extra: Vec<(&'static str, Cow<'static, str>)>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.background = value.into();
        self
    }

    pub fn foreground(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.foreground = value.into();
        self
    }

    pub fn border(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.border = value.into();
        self
    }

    pub fn padding(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.padding = value.into();
        self
    }

    pub fn font_size(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.font_size = value.into();
        self
    }

    pub fn radius(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.radius = value.into();
        self
    }

    pub fn shadow(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.shadow = value.into();
        self
    }

    pub fn width(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.width = value.into();
        self
    }

    /// Append a declaration that has no dedicated field
    pub fn with(mut self, property: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.extra.push((property, value.into()));
        self
    }

    /// Look up a value by CSS property name
    pub fn get(&self, property: &str) -> Option<&str> {
        let value = match property {
            "background" => &self.background,
            "color" => &self.foreground,
            "border" => &self.border,
            "padding" => &self.padding,
            "font-size" => &self.font_size,
            "border-radius" => &self.radius,
            "box-shadow" => &self.shadow,
            "width" => &self.width,
            _ => {
                return self
                    .extra
                    .iter()
                    .rev()
                    .find(|(p, _)| *p == property)
                    .map(|(_, v)| &**v)
            }
        };
        (!value.is_empty()).then_some(&**value)
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        let fields = [
            ("background", &self.background),
            ("color", &self.foreground),
            ("border", &self.border),
            ("padding", &self.padding),
            ("font-size", &self.font_size),
            ("border-radius", &self.radius),
            ("box-shadow", &self.shadow),
            ("width", &self.width),
        ];

        let mut css = String::new();
        let declarations = fields
            .into_iter()
            .map(|(p, v)| (p, &**v))
            .chain(self.extra.iter().map(|(p, v)| (*p, &**v)));
        for (property, value) in declarations {
            if value.is_empty() {
                continue;
            }
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(property);
            css.push_str(": ");
            css.push_str(value);
            css.push(';');
        }
        css
    }
}

impl fmt::Display for StyleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_names_and_aliases() {
        assert_eq!(Size::from_name("sm"), Size::Sm);
        assert_eq!(Size::from_name(" Large "), Size::Lg);
        assert_eq!(Size::from_name("medium"), Size::Md);
        assert_eq!(Size::from_name("huge"), Size::Md);
    }

    #[test]
    fn size_default_is_md() {
        assert_eq!(Size::default(), Size::Md);
        assert_eq!(Size::or_default(None), Size::Md);
        assert_eq!(Size::or_default(Some(Size::Lg)), Size::Lg);
    }

    #[test]
    fn to_css_skips_empty_fields() {
        let record = StyleRecord::new()
            .background("var(--primary)")
            .radius("4px")
            .with("cursor", "pointer");
        assert_eq!(
            record.to_css(),
            "background: var(--primary); border-radius: 4px; cursor: pointer;"
        );
    }

    #[test]
    fn empty_record_renders_nothing() {
        assert_eq!(StyleRecord::new().to_css(), "");
    }

    #[test]
    fn get_prefers_latest_extra() {
        let record = StyleRecord::new()
            .with("opacity", "1")
            .with("opacity", "0.6");
        assert_eq!(record.get("opacity"), Some("0.6"));
        assert_eq!(record.get("background"), None);
    }
}
