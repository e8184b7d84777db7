//! The rendering-backend trait and a software framebuffer implementation.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::error::Result;
use crate::font::Font;

/// Drawing surface consumed by the element layer.
///
/// All coordinates are absolute pixel positions on the display. Calls carry
/// no meaning beyond their side effect on the surface; implementations for
/// real hardware may fail at the driver boundary, which is why everything
/// returns `Result`.
pub trait Screen {
    /// Paint an unfilled 1px rectangle outline.
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Paint a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Print one line of text with its top-left corner at `(x, y)`.
    fn print_text(&mut self, text: &str, x: i32, y: i32, color: Color, font: Font) -> Result<()>;

    /// Composite a bitmap at `(x, y)`, skipping transparent pixels.
    fn draw_transparent_image(&mut self, bitmap: &Bitmap, x: i32, y: i32) -> Result<()>;
}

/// In-memory framebuffer screen.
///
/// Used by the demo and by integration tests. Glyphs are rendered as solid
/// cells (this crate carries metrics, not glyph bitmaps), which is enough to
/// verify geometry and to eyeball output via [`PixelScreen::ascii_dump`].
pub struct PixelScreen {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelScreen {
    /// Create a screen cleared to the transparent index.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette index at `(x, y)`, or `None` off screen.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
    }

    /// Reset every pixel to one color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.index());
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color.index();
    }

    /// Render the framebuffer as one character per pixel.
    ///
    /// Index 0 prints as `.`, indices 1-9 as their digit, everything above
    /// as `#`. Intended for demos and debugging, not pixel-exact asserts.
    pub fn ascii_dump(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = self.pixels[(y * self.width + x) as usize];
                out.push(match p {
                    0 => '.',
                    1..=9 => (b'0' + p) as char,
                    _ => '#',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Screen for PixelScreen {
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let right = x + w as i32 - 1;
        let bottom = y + h as i32 - 1;
        for px in x..=right {
            self.put(px, y, color);
            self.put(px, bottom, color);
        }
        for py in y..=bottom {
            self.put(x, py, color);
            self.put(right, py, color);
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        for py in y..y + h as i32 {
            for px in x..x + w as i32 {
                self.put(px, py, color);
            }
        }
        Ok(())
    }

    fn print_text(&mut self, text: &str, x: i32, y: i32, color: Color, font: Font) -> Result<()> {
        let m = font.metrics();
        for (i, _ch) in text.chars().enumerate() {
            let cell_x = x + (i as u32 * m.char_width) as i32;
            self.fill_rect(cell_x, y, m.char_width, m.char_height, color)?;
        }
        Ok(())
    }

    fn draw_transparent_image(&mut self, bitmap: &Bitmap, x: i32, y: i32) -> Result<()> {
        for by in 0..bitmap.height() {
            for bx in 0..bitmap.width() {
                if bitmap.is_transparent(bx, by) {
                    continue;
                }
                if let Some(p) = bitmap.pixel(bx, by) {
                    self.put(x + bx as i32, y + by as i32, Color(p));
                }
            }
        }
        Ok(())
    }
}
