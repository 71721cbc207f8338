use std::sync::Arc;

use crate::color::Color;
use crate::font::TextFace;
use crate::geom::{Aabb, Point};
use crate::layout::render::TextTarget;

#[derive(Clone, Debug)]
pub enum TextCommand {
    DrawText {
        text: String,
        face: Arc<dyn TextFace>,
        position: Point,
        color: Color,
    },
    PushClip(Aabb),
    PopClip,
}

/// [`TextTarget`] that records commands in order for a backend to replay.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<TextCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Drawn runs with their positions, skipping clip commands.
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                TextCommand::DrawText { text, position, .. } => Some((text.as_str(), *position)),
                _ => None,
            })
            .collect()
    }

    /// Current clip nesting depth; zero once every push has been popped.
    pub fn clip_depth(&self) -> isize {
        self.commands.iter().fold(0, |depth, command| match command {
            TextCommand::PushClip(_) => depth + 1,
            TextCommand::PopClip => depth - 1,
            TextCommand::DrawText { .. } => depth,
        })
    }
}

impl TextTarget for DisplayList {
    fn draw_text(&mut self, text: &str, face: &Arc<dyn TextFace>, position: Point, color: Color) {
        self.commands.push(TextCommand::DrawText {
            text: text.to_owned(),
            face: face.clone(),
            position,
            color,
        });
    }

    fn push_clip(&mut self, bounds: Aabb) {
        self.commands.push(TextCommand::PushClip(bounds));
    }

    fn pop_clip(&mut self) {
        self.commands.push(TextCommand::PopClip);
    }
}
