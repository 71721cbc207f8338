use tracing::warn;

use crate::direction::TextDirection;
use crate::styled::{DirectionMismatch, Piece, Segment, Style, StyledText};

/// Accumulates pieces of styled text into a [`StyledText`].
///
/// The direction is locked by the first append; appending text of another
/// direction fails and leaves the builder untouched.
#[derive(Debug, Default)]
pub struct StyledTextBuilder {
    segments: Vec<Segment>,
    direction: Option<TextDirection>,
}

impl StyledTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a piece of styled text.
    pub fn append(&mut self, piece: &Piece) -> Result<&mut Self, DirectionMismatch> {
        self.append_text(&piece.text, &piece.style)
    }

    /// Append `text` in `style`, splitting it into segments at line breaks.
    pub fn append_text(
        &mut self,
        text: &str,
        style: &Style,
    ) -> Result<&mut Self, DirectionMismatch> {
        let found = style.direction();
        if let Some(expected) = self.direction {
            if expected != found {
                warn!(%expected, %found, "rejecting text with mismatched direction");
                return Err(DirectionMismatch { expected, found });
            }
        }
        self.direction = Some(found);
        self.push_text(text, style);
        Ok(self)
    }

    /// Split without a direction check; callers guarantee consistency.
    pub(crate) fn push_text(&mut self, text: &str, style: &Style) {
        self.direction.get_or_insert(style.direction());
        for line in text.split_inclusive('\n') {
            match line.strip_suffix('\n') {
                Some(content) => {
                    self.segments.push(Segment::run(content, style.clone()));
                    self.segments.push(Segment::newline(style.clone()));
                }
                None => self.segments.push(Segment::run(line, style.clone())),
            }
        }
    }

    /// Append already-built styled text.
    pub fn append_styled(&mut self, text: &StyledText) -> Result<&mut Self, DirectionMismatch> {
        if let (Some(expected), Some(found)) = (self.direction, text.direction()) {
            if expected != found {
                return Err(DirectionMismatch { expected, found });
            }
        }
        if self.direction.is_none() {
            self.direction = text.direction();
        }
        self.segments.extend_from_slice(text.segments());
        Ok(self)
    }

    /// Number of segments accumulated so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Locked direction, if anything has been appended.
    pub fn direction(&self) -> Option<TextDirection> {
        self.direction
    }

    /// Snapshot of the accumulated text; the builder stays usable.
    pub fn build(&self) -> StyledText {
        StyledText::from_segments(self.segments.as_slice().into())
    }

    /// Consume the builder into its accumulated text.
    pub fn finish(self) -> StyledText {
        StyledText::from_segments(self.segments.into())
    }

    /// Clear to the empty, direction-unconstrained state.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::color::Color;
    use crate::font::FixedFace;

    fn style(direction: TextDirection) -> Style {
        Style::new(Arc::new(FixedFace::new(10.0, direction)), Color::BLACK)
    }

    fn texts(text: &StyledText) -> Vec<&str> {
        text.segments().iter().map(Segment::text).collect()
    }

    #[test]
    fn splits_on_line_breaks() {
        let s = style(TextDirection::HorizontalLtr);
        let mut builder = StyledTextBuilder::new();
        builder.append_text("a\nb", &s).unwrap();
        let text = builder.build();
        assert_eq!(texts(&text), ["a", "\n", "b"]);
        assert!(text.segments()[1].is_newline());
        assert!(!text.segments()[0].is_newline());
    }

    #[test]
    fn trailing_newline_has_no_empty_tail() {
        let s = style(TextDirection::HorizontalLtr);
        let text = s.apply("a\n").to_styled();
        assert_eq!(texts(&text), ["a", "\n"]);
    }

    #[test]
    fn blank_lines_keep_empty_segments() {
        let s = style(TextDirection::HorizontalLtr);
        let text = s.apply("\n\n").to_styled();
        assert_eq!(texts(&text), ["", "\n", "", "\n"]);
    }

    #[test]
    fn empty_text_appends_nothing_but_locks_direction() {
        let s = style(TextDirection::VerticalLtrStack);
        let mut builder = StyledTextBuilder::new();
        builder.append_text("", &s).unwrap();
        assert!(builder.is_empty());
        assert_eq!(builder.direction(), Some(TextDirection::VerticalLtrStack));
        assert!(builder.append_text("x", &style(TextDirection::HorizontalLtr)).is_err());

        // The built text is empty and therefore unconstrained.
        assert_eq!(builder.build().direction(), None);
    }

    #[test]
    fn mismatched_append_leaves_builder_unchanged() {
        let mut builder = StyledTextBuilder::new();
        builder
            .append(&style(TextDirection::HorizontalLtr).apply("Hello\nworld"))
            .unwrap();
        let before = builder.len();

        let err = builder
            .append(&style(TextDirection::VerticalRtlStack).apply("縦書き"))
            .unwrap_err();
        assert_eq!(err.expected, TextDirection::HorizontalLtr);
        assert_eq!(err.found, TextDirection::VerticalRtlStack);
        assert_eq!(builder.len(), before);
        assert_eq!(builder.direction(), Some(TextDirection::HorizontalLtr));
    }

    #[test]
    fn reset_unlocks_direction() {
        let mut builder = StyledTextBuilder::new();
        builder
            .append(&style(TextDirection::HorizontalLtr).apply("x"))
            .unwrap();
        builder.reset();
        assert!(builder.is_empty());
        assert_eq!(builder.direction(), None);
        builder
            .append(&style(TextDirection::VerticalLtrStack).apply("y"))
            .unwrap();
        assert_eq!(builder.build().direction(), Some(TextDirection::VerticalLtrStack));
    }

    #[test]
    fn build_is_a_snapshot() {
        let s = style(TextDirection::HorizontalLtr);
        let mut builder = StyledTextBuilder::new();
        builder.append_text("one", &s).unwrap();
        let first = builder.build();
        builder.append_text(" two", &s).unwrap();
        assert_eq!(first.segments().len(), 1);
        assert_eq!(builder.finish().segments().len(), 2);
    }

    #[test]
    fn append_styled_checks_direction() {
        let ltr = style(TextDirection::HorizontalLtr).apply("a").to_styled();
        let rtl = style(TextDirection::HorizontalRtl).apply("b").to_styled();

        let mut builder = StyledTextBuilder::new();
        builder.append_styled(&StyledText::default()).unwrap();
        assert_eq!(builder.direction(), None);
        builder.append_styled(&ltr).unwrap();
        assert!(builder.append_styled(&rtl).is_err());
        assert_eq!(builder.len(), 1);
    }
}
