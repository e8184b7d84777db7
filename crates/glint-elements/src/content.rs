//! Per-element visual attributes: padding, alignment, the content box.

use glint_types::Color;
use serde::{Deserialize, Serialize};

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding in pixels.
    #[serde(default)]
    pub top: u16,
    /// Right padding in pixels.
    #[serde(default)]
    pub right: u16,
    /// Bottom padding in pixels.
    #[serde(default)]
    pub bottom: u16,
    /// Left padding in pixels.
    #[serde(default)]
    pub left: u16,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Self = Self::uniform(0);

    /// Create uniform padding on all sides.
    pub const fn uniform(p: u16) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Create padding with individual side values.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Content alignment within an assigned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual attribute bundle owned one-to-one by each element.
///
/// Independent of size; mutated only through style application. An unset
/// `color` means "do not paint" -- invisible elements cost a branch, not a
/// draw call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBox {
    /// Paint color; `None` disables background/outline drawing.
    pub color: Option<Color>,
    /// Content alignment.
    pub align: ContentAlign,
    /// Four-sided inset applied when painting content.
    pub padding: Padding,
}
