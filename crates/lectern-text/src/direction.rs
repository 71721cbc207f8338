use core::fmt;

use lectern_config::DirectionSetting;

/// Writing direction of a face, and therefore of every styled text built
/// from it.
///
/// The direction fixes which physical axis glyphs advance along within a
/// line (the primary axis) and which axis successive lines stack along
/// (the secondary axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Lines advance left to right and stack top to bottom.
    #[default]
    HorizontalLtr,
    /// Lines advance right to left and stack top to bottom.
    HorizontalRtl,
    /// Columns advance top to bottom and stack left to right.
    VerticalLtrStack,
    /// Columns advance top to bottom and stack right to left.
    VerticalRtlStack,
}

/// Physical axis in y-down screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl TextDirection {
    pub const ALL: [TextDirection; 4] = [
        TextDirection::HorizontalLtr,
        TextDirection::HorizontalRtl,
        TextDirection::VerticalLtrStack,
        TextDirection::VerticalRtlStack,
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, TextDirection::HorizontalLtr | TextDirection::HorizontalRtl)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Axis along which glyphs advance within a line.
    pub fn primary_axis(self) -> Axis {
        match self {
            TextDirection::HorizontalLtr | TextDirection::HorizontalRtl => Axis::X,
            TextDirection::VerticalLtrStack | TextDirection::VerticalRtlStack => Axis::Y,
        }
    }

    /// Axis along which lines (or columns) stack.
    pub fn secondary_axis(self) -> Axis {
        match self.primary_axis() {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextDirection::HorizontalLtr => "horizontal-ltr",
            TextDirection::HorizontalRtl => "horizontal-rtl",
            TextDirection::VerticalLtrStack => "vertical-ltr-stack",
            TextDirection::VerticalRtlStack => "vertical-rtl-stack",
        };
        f.write_str(name)
    }
}

impl From<DirectionSetting> for TextDirection {
    fn from(setting: DirectionSetting) -> Self {
        match setting {
            DirectionSetting::HorizontalLtr => TextDirection::HorizontalLtr,
            DirectionSetting::HorizontalRtl => TextDirection::HorizontalRtl,
            DirectionSetting::VerticalLtrStack => TextDirection::VerticalLtrStack,
            DirectionSetting::VerticalRtlStack => TextDirection::VerticalRtlStack,
        }
    }
}
