//! Bitmap font identifiers and fixed-cell metrics.
//!
//! GLINT fonts are fixed-cell bitmap fonts: every glyph in a font occupies
//! the same `char_width` x `char_height` cell, so text extent is a pure
//! function of character count. Rasterization belongs to the backend; this
//! module only answers "how big".

use serde::{Deserialize, Serialize};

/// Identifier of a built-in bitmap font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// 4x6 cell, for dense status lines.
    Small,
    /// 6x10 cell, the default UI font.
    #[default]
    Normal,
    /// 12x20 cell, for headings.
    Large,
}

/// Fixed cell metrics for a bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Width of one glyph cell in pixels.
    pub char_width: u32,
    /// Height of one glyph cell in pixels.
    pub char_height: u32,
}

impl Font {
    /// Cell metrics for this font.
    pub const fn metrics(self) -> FontMetrics {
        match self {
            Font::Small => FontMetrics {
                char_width: 4,
                char_height: 6,
            },
            Font::Normal => FontMetrics {
                char_width: 6,
                char_height: 10,
            },
            Font::Large => FontMetrics {
                char_width: 12,
                char_height: 20,
            },
        }
    }

    /// Pixel width of `text` rendered in this font.
    pub fn text_width(self, text: &str) -> u32 {
        text.chars().count() as u32 * self.metrics().char_width
    }
}
