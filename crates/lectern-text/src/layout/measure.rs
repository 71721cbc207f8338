//! Extents of styled text along the primary (advance) and secondary
//! (stacking) axes.

use crate::direction::TextDirection;
use crate::geom::Dimensions;
use crate::styled::{Segment, StyledText};

/// Axis-tagged extents of a line or a block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineExtents {
    /// Length along the direction glyphs advance.
    pub primary: f32,
    /// Length along the direction lines stack.
    pub secondary: f32,
}

impl LineExtents {
    /// Map onto screen axes: primary is X for horizontal text, Y for
    /// vertical text.
    pub fn to_dimensions(self, direction: TextDirection) -> Dimensions {
        if direction.is_horizontal() {
            Dimensions::new(self.primary, self.secondary)
        } else {
            Dimensions::new(self.secondary, self.primary)
        }
    }
}

/// Split segments into lines, each ending with (and including) its
/// newline segment.
///
/// Always yields one more slice than there are newline segments: the
/// last slice holds whatever follows the final newline and is empty when
/// the text ends with one. Concatenating the slices gives back
/// `segments`.
pub fn lines(segments: &[Segment]) -> impl Iterator<Item = &[Segment]> + '_ {
    let tail = match segments.last() {
        Some(last) if !last.is_newline() => None,
        _ => Some(&segments[segments.len()..]),
    };
    segments.split_inclusive(Segment::is_newline).chain(tail)
}

/// Measure one line of segments.
///
/// The primary extent sums the advances of the drawn segments; the
/// secondary extent is the largest line size of any segment, newline
/// included.
pub fn measure_line(segments: &[Segment], line_spacing: f32) -> LineExtents {
    segments
        .iter()
        .fold(LineExtents::default(), |mut extents, segment| {
            let face = &segment.style.face;
            extents.secondary = extents.secondary.max(face.line_size(line_spacing));
            if !segment.is_newline() {
                extents.primary += face.advance(segment.text());
            }
            extents
        })
}

/// Measure a whole block: the widest line sets the primary extent and
/// line extents add up along the secondary axis.
pub fn measure_block(segments: &[Segment], line_spacing: f32) -> LineExtents {
    lines(segments).fold(LineExtents::default(), |block, line| {
        let line = measure_line(line, line_spacing);
        LineExtents {
            primary: block.primary.max(line.primary),
            secondary: block.secondary + line.secondary,
        }
    })
}

/// Rendered dimensions of `text`. Empty text measures zero.
pub fn measure(text: &StyledText, line_spacing: f32) -> Dimensions {
    match text.direction() {
        Some(direction) => {
            measure_block(text.segments(), line_spacing).to_dimensions(direction)
        }
        None => Dimensions::default(),
    }
}
