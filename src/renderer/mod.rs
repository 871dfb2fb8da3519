//! Rendering through an abstract draw surface
//!
//! The game only ever issues four primitives. The browser implements them on
//! a 2D canvas (`platform::canvas`); tests and the native demo record them.

pub mod scene;

pub use scene::render;

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// CSS colors used by the scene
pub mod palette {
    pub const COIN: &str = "#ffcc66";
    pub const BOMB: &str = "#ff4d4d";
    pub const BASKET: &str = "#80dfff";
    pub const TEXT: &str = "white";
    pub const DIM_TEXT: &str = "#b0b0b0";
}

/// Drawing capability provided by the host
pub trait DrawSurface {
    /// Wipe the whole viewport
    fn clear(&mut self);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    /// `y` is the top of the text
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: &str, align: TextAlign);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
    },
}

/// Surface that remembers what was drawn since the last `clear`
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Total frames cleared so far
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn rects(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    /// All text drawn in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, _color: &str, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            align,
        });
    }
}
