use crate::direction::TextDirection;
use crate::font::TextFace;

/// Face with fixed per-character metrics.
///
/// Every `char` advances by `advance`, and a line spans
/// `ascent + descent` across the stacking axis in either orientation.
/// Useful for headless layout and deterministic tests where no font files
/// are available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFace {
    pub direction: TextDirection,
    pub size: f32,
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl FixedFace {
    /// Square-cell face: each char advances `size`, lines span `size`.
    pub fn new(size: f32, direction: TextDirection) -> Self {
        Self {
            direction,
            size,
            advance: size,
            ascent: size * 0.8,
            descent: size * 0.2,
        }
    }

    pub fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_line_metrics(mut self, ascent: f32, descent: f32) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self
    }
}

impl TextFace for FixedFace {
    fn direction(&self) -> TextDirection {
        self.direction
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn line_size(&self, line_spacing: f32) -> f32 {
        (self.ascent + self.descent) * (1.0 + line_spacing)
    }

    fn advance(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}
