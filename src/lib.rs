//! lectern: styled, multi-directional text box layout.
//!
//! Re-exports the layout core from `lectern-text` and its configuration
//! layer from `lectern-config`.

pub use lectern_config as config;
pub use lectern_text::*;
