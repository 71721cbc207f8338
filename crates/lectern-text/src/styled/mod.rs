//! Styled text: runs of text tagged with a face and a color.
//!
//! A [`StyledText`] is an immutable sequence of [`Segment`]s that all share
//! one writing direction. Segments never contain a line break; line breaks
//! are represented by dedicated newline segments so layout can split lines
//! without rescanning text.

pub mod builder;

pub use builder::StyledTextBuilder;

use core::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::direction::TextDirection;
use crate::font::{Face, FontError, FontRegistry, TextFace};
use crate::geom::Dimensions;
use crate::layout::measure;

/// Text of a newline segment.
pub const NEWLINE: &str = "\n";

/// Face and color applied to a run of text.
#[derive(Debug, Clone)]
pub struct Style {
    pub face: Arc<dyn TextFace>,
    pub color: Color,
}

impl Style {
    pub fn new(face: Arc<dyn TextFace>, color: Color) -> Self {
        Self { face, color }
    }

    /// Style for the named font at `size` pixels, falling back to the
    /// registry's default source when the name matches nothing.
    pub fn basic(
        registry: &FontRegistry,
        font_name: &str,
        size: f32,
        color: Color,
    ) -> Result<Self, FontError> {
        let source = match registry.find(font_name) {
            Some(source) => source,
            None => registry.default_source()?,
        };
        Ok(Self::new(Arc::new(Face::new(source, size)), color))
    }

    /// Apply the style to some text.
    pub fn apply(&self, text: impl Into<String>) -> Piece {
        Piece {
            text: text.into(),
            style: self.clone(),
        }
    }

    /// Same style with a different color.
    pub fn recolor(&self, color: Color) -> Self {
        Self {
            face: self.face.clone(),
            color,
        }
    }

    pub fn direction(&self) -> TextDirection {
        self.face.direction()
    }
}

/// Text with one consistent style. Unlike a [`Segment`], a piece may
/// contain line breaks.
#[derive(Debug, Clone)]
pub struct Piece {
    pub text: String,
    pub style: Style,
}

impl Piece {
    /// Styled text containing only this piece.
    pub fn to_styled(&self) -> StyledText {
        let mut builder = StyledTextBuilder::new();
        builder.push_text(&self.text, &self.style);
        builder.finish()
    }
}

/// Concatenate pieces into one styled text.
pub fn concat<'a>(
    pieces: impl IntoIterator<Item = &'a Piece>,
) -> Result<StyledText, DirectionMismatch> {
    let mut builder = StyledTextBuilder::new();
    for piece in pieces {
        builder.append(piece)?;
    }
    Ok(builder.finish())
}

/// Content of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentText {
    /// Text without any line break (possibly empty).
    Run(String),
    /// Line terminator; never drawn, never advances.
    Newline,
}

/// A same-styled run of text without line breaks, or a newline marker.
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: SegmentText,
    pub style: Style,
}

impl Segment {
    pub fn run(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: SegmentText::Run(text.into()),
            style,
        }
    }

    pub fn newline(style: Style) -> Self {
        Self {
            text: SegmentText::Newline,
            style,
        }
    }

    pub fn is_newline(&self) -> bool {
        matches!(self.text, SegmentText::Newline)
    }

    /// The segment's text; `"\n"` for newline markers.
    pub fn text(&self) -> &str {
        match &self.text {
            SegmentText::Run(text) => text,
            SegmentText::Newline => NEWLINE,
        }
    }
}

/// Returned when text of one writing direction is combined with text of
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot combine {found} text with {expected} text")]
pub struct DirectionMismatch {
    /// Direction already locked in.
    pub expected: TextDirection,
    /// Direction of the rejected text.
    pub found: TextDirection,
}

/// Immutable styled text with a single canonical writing direction.
///
/// Cloning is cheap; the segments are shared.
#[derive(Clone, Default)]
pub struct StyledText {
    segments: Arc<[Segment]>,
    direction: Option<TextDirection>,
}

impl StyledText {
    /// The canonical direction is that of the first segment; callers
    /// guarantee every segment agrees.
    pub(crate) fn from_segments(segments: Arc<[Segment]>) -> Self {
        let direction = segments.first().map(|segment| segment.style.direction());
        Self {
            segments,
            direction,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Canonical direction; `None` while the text is empty.
    pub fn direction(&self) -> Option<TextDirection> {
        self.direction
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenate two styled texts.
    ///
    /// Fails when both have a direction and they differ; an empty side
    /// adopts the other's direction.
    pub fn concat(&self, other: &StyledText) -> Result<StyledText, DirectionMismatch> {
        if let (Some(expected), Some(found)) = (self.direction, other.direction) {
            if expected != found {
                return Err(DirectionMismatch { expected, found });
            }
        }
        let segments: Arc<[Segment]> = self
            .segments
            .iter()
            .chain(other.segments.iter())
            .cloned()
            .collect();
        Ok(Self::from_segments(segments))
    }

    /// Lines of the text; see [`measure::lines`].
    pub fn lines(&self) -> impl Iterator<Item = &[Segment]> + '_ {
        measure::lines(&self.segments)
    }

    /// Rendered size of the text at `line_spacing`.
    pub fn measure(&self, line_spacing: f32) -> Dimensions {
        measure::measure(self, line_spacing)
    }
}

impl fmt::Debug for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledText")
            .field("direction", &self.direction)
            .field(
                "segments",
                &self.segments.iter().map(Segment::text).collect::<Vec<_>>(),
            )
            .finish()
    }
}
