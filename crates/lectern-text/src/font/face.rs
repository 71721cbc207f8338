use std::sync::Arc;

use crate::direction::TextDirection;
use crate::font::{FontSource, ScaledFontMetrics, TextFace};
use crate::shaping::{ShapedRun, TextShaper};

/// A sized, direction-tagged configuration of a [`FontSource`].
///
/// Faces are cheap to clone; the font data is shared with the source.
#[derive(Debug, Clone)]
pub struct Face {
    source: Arc<FontSource>,
    size: f32,
    direction: TextDirection,
}

impl Face {
    /// Horizontal left-to-right face of `source` at `size` pixels.
    pub fn new(source: Arc<FontSource>, size: f32) -> Self {
        Self {
            source,
            size,
            direction: TextDirection::HorizontalLtr,
        }
    }

    /// Same face shaping in `direction`.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Same face at a different size.
    pub fn resize(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    pub fn source(&self) -> &Arc<FontSource> {
        &self.source
    }

    /// Font metrics scaled to this face's size.
    pub fn scaled_metrics(&self) -> ScaledFontMetrics {
        self.source.metrics().scale_to_pixels(self.size)
    }

    /// Shape `text` into glyphs, for backends that rasterize runs.
    pub fn shape(&self, text: &str) -> Option<ShapedRun> {
        TextShaper::shape(text, &self.source, self.size, self.direction)
    }
}

impl TextFace for Face {
    fn direction(&self) -> TextDirection {
        self.direction
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn line_size(&self, line_spacing: f32) -> f32 {
        self.scaled_metrics()
            .line_size(self.direction.is_horizontal(), line_spacing)
    }

    fn advance(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text).map_or(0.0, |run| run.advance)
    }
}
