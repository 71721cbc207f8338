//! Drawing styled text into boxes.
//!
//! The renderer measures a [`StyledText`], sets up a [`BoxLayoutMachine`]
//! for the target rectangle, and forwards every drawable run to a
//! [`TextTarget`] at the position the machine computes.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::color::Color;
use crate::font::TextFace;
use crate::geom::{Aabb, Dimensions, Point};
use crate::layout::box_machine::BoxLayoutMachine;
use crate::layout::measure::{measure, measure_line};
use crate::layout::BoxOptions;
use crate::styled::StyledText;

/// Sink for positioned text runs.
///
/// Clips nest: each `push_clip` is matched by exactly one `pop_clip`.
pub trait TextTarget {
    /// Draw one run of `text` at `position`, where the run starts in its
    /// flow direction.
    ///
    /// For left-to-right and vertical text the run extends right or down
    /// from `position`. For `HorizontalRtl` text `position.x` is the run's
    /// trailing (right) edge and the run extends left from it. In
    /// `VerticalRtlStack` text `position.x` is the right edge of the
    /// run's column. `position.y` of horizontal text is the top of the line.
    fn draw_text(&mut self, text: &str, face: &Arc<dyn TextFace>, position: Point, color: Color);

    fn push_clip(&mut self, bounds: Aabb);

    fn pop_clip(&mut self);
}

/// Draw `text` inside `bounds`, clipped to them.
pub fn draw_in_box<T: TextTarget + ?Sized>(
    target: &mut T,
    text: &StyledText,
    bounds: Aabb,
    options: &BoxOptions,
) {
    target.push_clip(bounds);
    layout_in(target, text, bounds, options);
    target.pop_clip();
}

/// Draw `text` in a box fitted tightly around it.
///
/// The box is placed so that the point at `anchor_fraction` of its size
/// (`(0, 0)` top-left, `(0.5, 0.5)` center, `(1, 1)` bottom-right) lands on
/// `anchor`. Lines are single-spaced and aligned automatically.
pub fn draw_auto_box<T: TextTarget + ?Sized>(
    target: &mut T,
    text: &StyledText,
    anchor: Point,
    anchor_fraction: Dimensions,
) {
    let size = measure(text, 0.0);
    let start = Point::new(
        anchor.x - anchor_fraction.x * size.x,
        anchor.y - anchor_fraction.y * size.y,
    );
    draw_in_box(target, text, size.aabb(start), &BoxOptions::default());
}

fn layout_in<T: TextTarget + ?Sized>(
    target: &mut T,
    text: &StyledText,
    bounds: Aabb,
    options: &BoxOptions,
) {
    let Some(direction) = text.direction() else {
        return;
    };
    let block = measure(text, options.line_spacing);
    debug!(
        %direction,
        ?bounds,
        ?block,
        align = ?options.align,
        vert_align = ?options.vert_align,
        "laying out text box"
    );

    let mut machine = BoxLayoutMachine::new(
        bounds.min,
        bounds.dim(),
        block,
        direction,
        options.align,
        options.vert_align,
    );

    for line in text.lines() {
        let extents = measure_line(line, options.line_spacing);
        machine.start_line(extents.primary);
        trace!(?extents, start = ?machine.position(), "line");

        for segment in line.iter().filter(|segment| !segment.is_newline()) {
            let face = &segment.style.face;
            let run = segment.text();
            target.draw_text(run, face, machine.position(), segment.style.color);
            machine.move_in_line(face.advance(run));
        }

        machine.end_line(extents.secondary);
    }
}
