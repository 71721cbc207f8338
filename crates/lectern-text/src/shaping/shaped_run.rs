use swash::GlyphId;

use crate::direction::TextDirection;

/// A run of text shaped with a single face.
#[derive(Debug, Clone)]
pub struct ShapedRun {
    /// Font size in pixels.
    pub font_size: f32,
    /// Glyph IDs in visual order for this run.
    pub glyphs: Vec<GlyphId>,
    /// Glyph positions (offsets from the run's pen origin).
    pub positions: Vec<GlyphPosition>,
    /// Glyph advances along the primary axis in pixels.
    pub advances: Vec<f32>,
    /// Cluster indices mapping glyphs to byte offsets in the source text.
    /// Multiple glyphs can map to the same cluster (ligatures).
    pub clusters: Vec<u32>,
    /// Total advance of the run along the primary axis in pixels.
    pub advance: f32,
    /// Direction the run was shaped in.
    pub direction: TextDirection,
}

#[derive(Debug, Clone, Copy)]
pub struct GlyphPosition {
    pub x_offset: f32,
    pub y_offset: f32,
}
