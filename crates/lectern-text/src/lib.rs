//! lectern-text: styled, multi-directional text box layout.
//!
//! - `styled`: styled text runs and the builder that assembles them
//! - `layout`: measurement, the box layout machine and the renderer
//! - `font`: font sources, sized faces and the shared font registry
//! - `shaping`: harfrust shaping used by real faces to measure runs

pub mod color;
pub mod direction;
pub mod font;
pub mod geom;
pub mod layout;
pub mod shaping;
pub mod styled;

pub use color::Color;
pub use direction::{Axis, TextDirection};
pub use font::{Face, FixedFace, FontError, FontRegistry, FontSource, TextFace};
pub use geom::{Aabb, Dimensions, Point};
pub use layout::{
    Alignment, BoxLayoutMachine, BoxOptions, DisplayList, LineExtents, TextCommand, TextTarget,
    draw_auto_box, draw_in_box,
};
pub use styled::{
    DirectionMismatch, Piece, Segment, SegmentText, Style, StyledText, StyledTextBuilder, concat,
};
