pub mod face;
pub mod fixed;
pub mod metrics;
pub mod registry;
pub mod source;

pub use face::Face;
pub use fixed::FixedFace;
pub use metrics::{FontMetrics, ScaledFontMetrics};
pub use registry::FontRegistry;
pub use source::FontSource;

use core::fmt;

use crate::direction::TextDirection;

/// Shaping and metric queries a face must answer for layout.
///
/// Implementations are shared across threads behind `Arc<dyn TextFace>`
/// by [`Style`](crate::Style), so queries take `&self`.
pub trait TextFace: fmt::Debug + Send + Sync {
    /// Writing direction the face shapes text in.
    fn direction(&self) -> TextDirection;

    /// Font size in pixels.
    fn size(&self) -> f32;

    /// Extent of one line along the stacking (secondary) axis, using the
    /// ascent/descent pair that matches the face's orientation.
    fn line_size(&self, line_spacing: f32) -> f32;

    /// Advance of `text` along the face's primary axis.
    fn advance(&self, text: &str) -> f32;
}

/// Errors that can occur while working with fonts.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data")]
    InvalidFont,
    #[error("no font source matches {0:?}")]
    NotFound(String),
    #[error("no default font source is available")]
    NoDefaultFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
