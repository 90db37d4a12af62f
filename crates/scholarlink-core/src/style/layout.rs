//! Grid and flex layout helpers.

use super::{Size, StyleRecord, Variant};

/// Column counts are clamped to `1..=MAX_GRID_COLUMNS`
pub const MAX_GRID_COLUMNS: u8 = 12;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl Variant for FlexDirection {
    const ALL: &'static [Self] = &[FlexDirection::Row, FlexDirection::Column];

    fn name(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

/// Cross-axis alignment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Align {
    Start,
    #[default]
    Stretch,
    Center,
    End,
}

impl Variant for Align {
    const ALL: &'static [Self] = &[Align::Start, Align::Stretch, Align::Center, Align::End];

    fn name(self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Stretch => "stretch",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

impl Align {
    fn css(self) -> &'static str {
        match self {
            Align::Start => "flex-start",
            Align::Stretch => "stretch",
            Align::Center => "center",
            Align::End => "flex-end",
        }
    }
}

/// Main-axis distribution
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    Between,
}

impl Variant for Justify {
    const ALL: &'static [Self] = &[Justify::Start, Justify::Center, Justify::End, Justify::Between];

    fn name(self) -> &'static str {
        match self {
            Justify::Start => "start",
            Justify::Center => "center",
            Justify::End => "end",
            Justify::Between => "between",
        }
    }
}

impl Justify {
    fn css(self) -> &'static str {
        match self {
            Justify::Start => "flex-start",
            Justify::Center => "center",
            Justify::End => "flex-end",
            Justify::Between => "space-between",
        }
    }
}

pub struct GridStyle;

impl GridStyle {
    pub fn resolve(columns: u8, gap: Size) -> StyleRecord {
        let columns = columns.clamp(1, MAX_GRID_COLUMNS);
        StyleRecord::new()
            .with("display", "grid")
            .with(
                "grid-template-columns",
                format!("repeat({columns}, minmax(0, 1fr))"),
            )
            .with("gap", gap.gap())
    }
}

pub struct FlexStyle;

impl FlexStyle {
    pub fn resolve(
        direction: FlexDirection,
        align: Align,
        justify: Justify,
        gap: Size,
        wrap: bool,
    ) -> StyleRecord {
        StyleRecord::new()
            .with("display", "flex")
            .with("flex-direction", direction.name())
            .with("align-items", align.css())
            .with("justify-content", justify.css())
            .with("flex-wrap", if wrap { "wrap" } else { "nowrap" })
            .with("gap", gap.gap())
    }
}
