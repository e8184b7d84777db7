//! Caller-supplied custom drawing.

use glint_types::{Result, Screen};

use crate::element::{Element, ElementCommon};
use crate::geometry::BoundingBox;

/// Draw callback invoked with the assigned bounds.
pub type DrawFn = Box<dyn Fn(&mut dyn Screen, BoundingBox) -> Result<()>>;

/// An element that delegates drawing to a closure.
///
/// The extension point for content the framework cannot model declaratively
/// (charts, gauges, custom compositions). `draw_self` forwards the bounds
/// unchanged and does nothing else; the caller is responsible for any layout
/// sizing through other means.
pub struct DynamicElement {
    common: ElementCommon,
    draw_fn: DrawFn,
}

impl DynamicElement {
    pub fn new<F>(draw_fn: F) -> Self
    where
        F: Fn(&mut dyn Screen, BoundingBox) -> Result<()> + 'static,
    {
        Self {
            common: ElementCommon::new(None),
            draw_fn: Box::new(draw_fn),
        }
    }
}

impl Element for DynamicElement {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()> {
        (self.draw_fn)(screen, bounds)
    }
}
