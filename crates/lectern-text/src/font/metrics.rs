/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Ascent for vertical layout (half the column width to the right).
    pub vertical_ascent: f32,
    /// Descent for vertical layout.
    pub vertical_descent: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            vertical_ascent: self.vertical_ascent * scale,
            vertical_descent: self.vertical_descent * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub vertical_ascent: f32,
    pub vertical_descent: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Extent of one line across the stacking axis for the given
    /// orientation: `(ascent + descent) * (1 + line_spacing)`.
    ///
    /// `line_spacing` of 0.0 is single-spaced, 1.0 double-spaced; negative
    /// values tighten lines.
    pub fn line_size(&self, horizontal: bool, line_spacing: f32) -> f32 {
        let extent = if horizontal {
            self.ascent + self.descent
        } else {
            self.vertical_ascent + self.vertical_descent
        };
        extent * (1.0 + line_spacing)
    }
}
