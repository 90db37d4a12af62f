//! Avatar sizing, shapes and the initials placeholder.

use super::{Size, StyleRecord, Variant};

/// Placeholder backgrounds, picked by a stable hash of the display name
const PLACEHOLDER_COLORS: [&str; 6] = [
    "var(--avatar-1)",
    "var(--avatar-2)",
    "var(--avatar-3)",
    "var(--avatar-4)",
    "var(--avatar-5)",
    "var(--avatar-6)",
];

/// Avatar outline
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum AvatarShape {
    #[default]
    Circle,
    Rounded,
    Square,
}

impl Variant for AvatarShape {
    const ALL: &'static [Self] = &[AvatarShape::Circle, AvatarShape::Rounded, AvatarShape::Square];

    fn name(self) -> &'static str {
        match self {
            AvatarShape::Circle => "circle",
            AvatarShape::Rounded => "rounded",
            AvatarShape::Square => "square",
        }
    }
}

/// Up to two uppercase initials from a display name, `?` when blank.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .filter_map(|c| c.to_uppercase().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Stable placeholder color for a name (FNV-1a over the trimmed bytes)
pub fn placeholder_color(name: &str) -> &'static str {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in name.trim().bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    PLACEHOLDER_COLORS[hash as usize % PLACEHOLDER_COLORS.len()]
}

pub struct AvatarStyle;

impl AvatarStyle {
    pub fn resolve(size: Size, shape: AvatarShape, name: &str) -> StyleRecord {
        let (diameter, font_size) = match size {
            Size::Sm => ("2rem", "0.75rem"),
            Size::Md => ("2.5rem", "0.875rem"),
            Size::Lg => ("3.5rem", "1.25rem"),
        };
        let radius = match shape {
            AvatarShape::Circle => "50%",
            AvatarShape::Rounded => "var(--radius-md)",
            AvatarShape::Square => "0",
        };

        StyleRecord::new()
            .background(placeholder_color(name))
            .foreground("var(--on-primary)")
            .font_size(font_size)
            .radius(radius)
            .width(diameter)
            .with("height", diameter)
            .with("display", "inline-flex")
            .with("align-items", "center")
            .with("justify-content", "center")
            .with("overflow", "hidden")
            .with("font-weight", "600")
    }
}
