use harfrust::{
    Direction as HbDirection,
    FontRef as HbFontRef,
    ShaperData,
    ShaperInstance,
    UnicodeBuffer as HbUnicodeBuffer,
};
use swash::GlyphId;
use tracing::warn;

use crate::direction::TextDirection;
use crate::font::FontSource;

use super::{GlyphPosition, ShapedRun};

/// Text shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Shapes single-face runs in any of the four writing directions; kerning
/// and ligatures follow HarfBuzz semantics.
pub struct TextShaper;

impl TextShaper {
    /// Shape `text` with `source` at `font_size` pixels in `direction`.
    ///
    /// Returns `None` when harfrust cannot parse the font data.
    pub fn shape(
        text: &str,
        source: &FontSource,
        font_size: f32,
        direction: TextDirection,
    ) -> Option<ShapedRun> {
        let font_ref = match HbFontRef::from_index(source.as_bytes(), source.index()) {
            Ok(font_ref) => font_ref,
            Err(error) => {
                warn!(?error, "harfrust rejected font data");
                return None;
            }
        };

        // Shaper configuration with default (no variations) instance.
        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(match direction {
            TextDirection::HorizontalLtr => HbDirection::LeftToRight,
            TextDirection::HorizontalRtl => HbDirection::RightToLeft,
            TextDirection::VerticalLtrStack | TextDirection::VerticalRtlStack => {
                HbDirection::TopToBottom
            }
        });
        // Script and language are guessed from the text.
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        let mut glyphs = Vec::with_capacity(infos.len());
        let mut glyph_positions = Vec::with_capacity(infos.len());
        let mut advances = Vec::with_capacity(infos.len());
        let mut clusters = Vec::with_capacity(infos.len());

        // harfrust uses design units; convert to pixels using the font's
        // units-per-em and requested size.
        let metrics = source.metrics();
        let scale = if metrics.units_per_em != 0 {
            font_size / metrics.units_per_em as f32
        } else {
            1.0
        };

        let mut pen: f32 = 0.0;
        for (info, pos) in infos.iter().zip(positions.iter()) {
            let x_offset = pos.x_offset as f32 * scale;
            let y_offset = -(pos.y_offset as f32) * scale;
            // Vertical advances come back negative (y-up design space).
            let advance = if direction.is_horizontal() {
                pos.x_advance as f32 * scale
            } else {
                (pos.y_advance as f32 * scale).abs()
            };

            glyphs.push(info.glyph_id as GlyphId);
            glyph_positions.push(if direction.is_horizontal() {
                GlyphPosition {
                    x_offset: pen + x_offset,
                    y_offset,
                }
            } else {
                GlyphPosition {
                    x_offset,
                    y_offset: pen + y_offset,
                }
            });
            advances.push(advance);
            clusters.push(info.cluster);

            pen += advance;
        }

        Some(ShapedRun {
            font_size,
            glyphs,
            positions: glyph_positions,
            advances,
            clusters,
            advance: pen,
            direction,
        })
    }
}
