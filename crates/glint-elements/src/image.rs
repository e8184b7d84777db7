//! Fixed-size bitmap element.

use glint_types::{Bitmap, Result, Screen};

use crate::element::{Element, ElementCommon};
use crate::geometry::BoundingBox;

/// A static bitmap.
///
/// Intrinsic size is pinned to the source bitmap at construction; no style
/// kind changes it, and the element never scales the image.
#[derive(Debug)]
pub struct ImageElement {
    common: ElementCommon,
    src: Bitmap,
}

impl ImageElement {
    pub fn new(src: Bitmap) -> Self {
        let mut common = ElementCommon::new(Some("img"));
        common.width = src.width();
        common.height = src.height();
        Self { common, src }
    }

    pub fn src(&self) -> &Bitmap {
        &self.src
    }
}

impl Element for ImageElement {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()> {
        let pa = self.common.content_box.padding;
        screen.draw_transparent_image(
            &self.src,
            pa.left as i32 + bounds.left,
            pa.top as i32 + bounds.top,
        )
    }
}
