use crate::direction::TextDirection;
use crate::geom::{Dimensions, Point};
use crate::layout::Alignment;

/// Where along an axis a span of text is placed once `Auto` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start,
    Center,
    End,
}

impl Placement {
    /// Resolve `alignment`; `Auto` goes to the far edge when the axis
    /// flows from it.
    fn resolve(alignment: Alignment, flows_from_far_edge: bool) -> Self {
        match alignment {
            Alignment::Start => Placement::Start,
            Alignment::Center => Placement::Center,
            Alignment::End => Placement::End,
            Alignment::Auto if flows_from_far_edge => Placement::End,
            Alignment::Auto => Placement::Start,
        }
    }

    /// Near (left or top) edge of a span of `len` inside
    /// `[origin, origin + extent]`.
    fn near_edge(self, origin: f32, extent: f32, len: f32) -> f32 {
        match self {
            Placement::Start => origin,
            Placement::Center => origin + (extent - len) / 2.0,
            Placement::End => origin + extent - len,
        }
    }

    /// Far (right) edge of the same span. Right-to-left axes track this
    /// edge and move back from it.
    fn far_edge(self, origin: f32, extent: f32, len: f32) -> f32 {
        match self {
            Placement::Start => origin + len,
            Placement::Center => origin + extent - (extent - len) / 2.0,
            Placement::End => origin + extent,
        }
    }
}

/// Cursor that walks a text block through a box, one line at a time.
///
/// Built fresh for each layout pass. The renderer drives it in a fixed
/// order: [`start_line`](Self::start_line) before a line's first run,
/// [`move_in_line`](Self::move_in_line) after each drawn run, and
/// [`end_line`](Self::end_line) after the line's last run. The cursor
/// [`position`](Self::position) is read before drawing each run.
///
/// Along a right-to-left axis (the advance of `HorizontalRtl`, the column
/// stacking of `VerticalRtlStack`) the cursor sits on the far edge of the
/// run or column it is about to place, and moves back toward the origin.
///
/// Which alignment governs which axis depends on the direction:
///
/// | direction | `align` | `vert_align` |
/// |---|---|---|
/// | horizontal (LTR/RTL) | X of each line | Y of the block |
/// | vertical (either stacking) | X of the block | Y of each column |
#[derive(Debug, Clone)]
pub struct BoxLayoutMachine {
    /// Current position.
    pos: Point,
    /// Top-left of the box.
    origin: Point,
    box_dim: Dimensions,
    block_dim: Dimensions,
    direction: TextDirection,
    align: Alignment,
    vert_align: Alignment,
}

impl BoxLayoutMachine {
    /// Set up a pass for a block measuring `block_dim` inside a box at
    /// `origin` measuring `box_dim`, and position the block.
    pub fn new(
        origin: Point,
        box_dim: Dimensions,
        block_dim: Dimensions,
        direction: TextDirection,
        align: Alignment,
        vert_align: Alignment,
    ) -> Self {
        let mut machine = Self {
            pos: origin,
            origin,
            box_dim,
            block_dim,
            direction,
            align,
            vert_align,
        };
        machine.init();
        machine
    }

    /// Place the block along the secondary axis.
    fn init(&mut self) {
        match self.direction {
            TextDirection::HorizontalLtr | TextDirection::HorizontalRtl => {
                self.pos.y = Placement::resolve(self.vert_align, false).near_edge(
                    self.origin.y,
                    self.box_dim.y,
                    self.block_dim.y,
                );
            }
            TextDirection::VerticalLtrStack => {
                self.pos.x = Placement::resolve(self.align, false).near_edge(
                    self.origin.x,
                    self.box_dim.x,
                    self.block_dim.x,
                );
            }
            TextDirection::VerticalRtlStack => {
                self.pos.x = Placement::resolve(self.align, true).far_edge(
                    self.origin.x,
                    self.box_dim.x,
                    self.block_dim.x,
                );
            }
        }
    }

    /// Place the start of a line whose primary extent is `primary_len`.
    pub fn start_line(&mut self, primary_len: f32) {
        match self.direction {
            TextDirection::HorizontalLtr => {
                self.pos.x = Placement::resolve(self.align, false).near_edge(
                    self.origin.x,
                    self.box_dim.x,
                    primary_len,
                );
            }
            TextDirection::HorizontalRtl => {
                self.pos.x = Placement::resolve(self.align, true).far_edge(
                    self.origin.x,
                    self.box_dim.x,
                    primary_len,
                );
            }
            TextDirection::VerticalLtrStack | TextDirection::VerticalRtlStack => {
                self.pos.y = Placement::resolve(self.vert_align, false).near_edge(
                    self.origin.y,
                    self.box_dim.y,
                    primary_len,
                );
            }
        }
    }

    /// Advance past a run of `advance` along the primary axis.
    pub fn move_in_line(&mut self, advance: f32) {
        match self.direction {
            TextDirection::HorizontalLtr => self.pos.x += advance,
            TextDirection::HorizontalRtl => self.pos.x -= advance,
            TextDirection::VerticalLtrStack | TextDirection::VerticalRtlStack => {
                self.pos.y += advance
            }
        }
    }

    /// Step to the next line, `secondary_len` along the stacking axis.
    pub fn end_line(&mut self, secondary_len: f32) {
        match self.direction {
            TextDirection::HorizontalLtr | TextDirection::HorizontalRtl => {
                self.pos.y += secondary_len
            }
            TextDirection::VerticalLtrStack => self.pos.x += secondary_len,
            TextDirection::VerticalRtlStack => self.pos.x -= secondary_len,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Writing direction the machine lays out.
    pub fn direction(&self) -> TextDirection {
        self.direction
    }
}
