//! Single-line text element.

use glint_types::{Color, Font, Result, Screen};

use crate::element::{draw_if_visible, Element, ElementCommon};
use crate::geometry::BoundingBox;
use crate::style::Style;

/// Pixel footprint of `text` in `font`.
///
/// Empty text has zero width but still reserves the font's glyph height.
fn text_extent(text: &str, font: Font) -> (u32, u32) {
    let m = font.metrics();
    let width = if text.is_empty() {
        0
    } else {
        font.text_width(text)
    };
    (width, m.char_height)
}

/// A single line of text.
///
/// The intrinsic size is recomputed on every mutation of the text or the
/// font, so layout can read it at any time without a measure pass.
#[derive(Debug)]
pub struct TextElement {
    common: ElementCommon,
    text: String,
    font: Font,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        let mut common = ElementCommon::new(Some("text"));
        common.content_box.color = Some(Color::WHITE);
        let mut el = Self {
            common,
            text: text.into(),
            font: Font::default(),
        };
        el.update_bounds();
        el
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Replace the text and recompute the intrinsic size.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update_bounds();
    }

    fn update_bounds(&mut self) {
        let (w, h) = text_extent(&self.text, self.font);
        self.common.width = w;
        self.common.height = h;
    }
}

impl Element for TextElement {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn apply_style(&mut self, style: &Style) {
        match style {
            Style::Font(font) => {
                self.font = *font;
                self.update_bounds();
            }
            other => self.common.apply_base_style(other),
        }
    }

    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()> {
        draw_if_visible(&self.common, |color| {
            let pa = self.common.content_box.padding;
            screen.print_text(
                &self.text,
                pa.left as i32 + bounds.left,
                pa.top as i32 + bounds.top,
                color,
                self.font,
            )
        })
    }
}
