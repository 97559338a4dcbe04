//! UI draw commands

use crate::foundation::math::{Color, Rect, Vec2};
use crate::ui::backend::{Image, RenderError, RenderTarget};
use super::measure::Font;

/// A single drawing primitive as issued to a render target
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Line segment
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Line colour
        color: Color,
        /// Line thickness in pixels
        thickness: f32,
    },
    /// Filled or outlined rectangle
    Rectangle {
        /// Rectangle bounds
        rect: Rect,
        /// Whether the interior is filled
        filled: bool,
        /// Fill or outline colour
        color: Color,
    },
    /// Text run
    Text {
        /// Text content
        text: String,
        /// Font used
        font: Font,
        /// Top-left corner
        position: Vec2,
        /// Text colour
        color: Color,
    },
    /// Image blit
    Image {
        /// Image handle
        image: Image,
        /// Destination bounds
        rect: Rect,
    },
    /// Clip region pushed
    PushClip(Rect),
    /// Clip region popped
    PopClip,
}

/// Render target that records commands instead of drawing them
///
/// Used by headless hosts (the demo logs the recorded frame) and by tests.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingTarget {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recording empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Recorded text runs, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Color, thickness: f32) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Line { from: p1, to: p2, color, thickness });
        Ok(())
    }

    fn draw_rectangle(&mut self, rect: Rect, filled: bool, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Rectangle { rect, filled, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: &Font, position: Vec2, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.clone(),
            position,
            color,
        });
        Ok(())
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Image { image: *image, rect });
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) -> Result<(), RenderError> {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<(), RenderError> {
        if self.clip_depth == 0 {
            return Err(RenderError::ClipUnderflow);
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
        Ok(())
    }
}
