//! Shared test utilities for element tests.
//!
//! Provides a [`MockScreen`] that records all draw calls for assertion.

use glint_types::{Bitmap, Color, Font, Result, Screen};

/// A recorded draw call from the mock screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    DrawRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    PrintText {
        text: String,
        x: i32,
        y: i32,
        color: Color,
        font: Font,
    },
    DrawImage {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
    },
}

/// A mock screen that records all draw calls for test assertions.
#[derive(Default)]
pub struct MockScreen {
    pub calls: Vec<DrawCall>,
}

impl MockScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of `DrawRect` (outline) calls.
    pub fn draw_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawRect { .. }))
            .count()
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Check if any `PrintText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::PrintText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }
}

impl Screen for MockScreen {
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::DrawRect { x, y, w, h, color });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn print_text(&mut self, text: &str, x: i32, y: i32, color: Color, font: Font) -> Result<()> {
        self.calls.push(DrawCall::PrintText {
            text: text.to_string(),
            x,
            y,
            color,
            font,
        });
        Ok(())
    }

    fn draw_transparent_image(&mut self, bitmap: &Bitmap, x: i32, y: i32) -> Result<()> {
        self.calls.push(DrawCall::DrawImage {
            x,
            y,
            w: bitmap.width(),
            h: bitmap.height(),
        });
        Ok(())
    }
}
