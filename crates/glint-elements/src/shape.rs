//! Rectangle-like element variants: outline and filled.

use glint_types::{Result, Screen};

use crate::element::{draw_if_visible, Element, ElementCommon};
use crate::geometry::BoundingBox;

/// An outlined-rectangle element.
///
/// Draws a 1px outline over the assigned bounds when a color is set;
/// with no color it issues no backend calls at all.
#[derive(Debug, Default)]
pub struct ShapeElement {
    common: ElementCommon,
}

impl ShapeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a class tag for style matching.
    pub fn with_class(class: &str) -> Self {
        Self {
            common: ElementCommon::new(Some(class)),
        }
    }
}

impl Element for ShapeElement {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()> {
        draw_if_visible(&self.common, |color| {
            screen.draw_rect(bounds.left, bounds.top, bounds.width, bounds.height, color)
        })
    }
}

/// A filled-rectangle element.
///
/// Same visibility rule as [`ShapeElement`]; only the paint step differs.
#[derive(Debug)]
pub struct BoxElement {
    common: ElementCommon,
}

impl Default for BoxElement {
    fn default() -> Self {
        Self {
            common: ElementCommon::new(Some("box")),
        }
    }
}

impl BoxElement {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for BoxElement {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()> {
        draw_if_visible(&self.common, |color| {
            screen.fill_rect(bounds.left, bounds.top, bounds.width, bounds.height, color)
        })
    }
}
