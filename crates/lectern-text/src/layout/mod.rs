pub mod box_machine;
pub mod display_list;
pub mod measure;
pub mod render;

pub use box_machine::BoxLayoutMachine;
pub use display_list::{DisplayList, TextCommand};
pub use measure::{LineExtents, lines, measure, measure_line};
pub use render::{TextTarget, draw_auto_box, draw_in_box};

use lectern_config::{AlignSetting, LayoutConfig};

use crate::geom::Dimensions;

/// Alignment of text along one axis of a box.
///
/// `Start` is the box edge nearest the origin (left or top), `End` the far
/// edge. `Auto` follows the natural flow start of the axis, which is the
/// far edge for right-to-left advance or stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Auto,
    Start,
    Center,
    End,
}

impl From<AlignSetting> for Alignment {
    fn from(setting: AlignSetting) -> Self {
        match setting {
            AlignSetting::Auto => Alignment::Auto,
            AlignSetting::Start => Alignment::Start,
            AlignSetting::Center => Alignment::Center,
            AlignSetting::End => Alignment::End,
        }
    }
}

/// Layout options for [`draw_in_box`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxOptions {
    /// Distance between the edge of the box and the text inside. Carried
    /// for callers that shrink their bounds; layout does not apply it.
    pub padding: Dimensions,

    /// Relative extra space per line: 0.0 is single-spaced, 1.0 double.
    pub line_spacing: f32,

    /// Per-line alignment for horizontal text, block alignment for
    /// vertical text.
    pub align: Alignment,

    /// Block alignment for horizontal text, per-column alignment for
    /// vertical text.
    pub vert_align: Alignment,
}

impl From<&LayoutConfig> for BoxOptions {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            padding: Dimensions::new(config.padding[0], config.padding[1]),
            line_spacing: config.line_spacing,
            align: config.align.into(),
            vert_align: config.vert_align.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_layout_config() {
        let config = LayoutConfig {
            line_spacing: 0.25,
            align: AlignSetting::End,
            vert_align: AlignSetting::Center,
            padding: [4.0, 2.0],
        };
        let options = BoxOptions::from(&config);
        assert_eq!(options.line_spacing, 0.25);
        assert_eq!(options.align, Alignment::End);
        assert_eq!(options.vert_align, Alignment::Center);
        assert_eq!(options.padding, Dimensions::new(4.0, 2.0));

        assert_eq!(BoxOptions::from(&LayoutConfig::default()), BoxOptions::default());
    }
}
