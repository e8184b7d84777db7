//! The polymorphic element contract and its shared base state.

use glint_types::{Color, Result, Screen};

use crate::content::ContentBox;
use crate::geometry::BoundingBox;
use crate::style::Style;

/// State shared by every element variant.
///
/// Holds the optional class tag (used by stylesheet matching), the intrinsic
/// footprint, and the owned content box. Variants embed one of these and
/// hand it out through [`Element::common`].
#[derive(Debug, Clone, Default)]
pub struct ElementCommon {
    /// Class tag for style matching, if any.
    pub class: Option<String>,
    /// Intrinsic width in pixels, independent of any assigned bounds.
    pub width: u32,
    /// Intrinsic height in pixels, independent of any assigned bounds.
    pub height: u32,
    /// Owned visual attributes.
    pub content_box: ContentBox,
}

impl ElementCommon {
    /// Create base state with an optional class tag.
    pub fn new(class: Option<&str>) -> Self {
        Self {
            class: class.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Shared default style handler, the end of the forwarding chain.
    ///
    /// Handles the generic visual kinds; anything it does not recognize
    /// (today only `Font`, which belongs to text elements) is ignored.
    pub fn apply_base_style(&mut self, style: &Style) {
        match style {
            Style::Color(c) => self.content_box.color = Some(*c),
            Style::Align(a) => self.content_box.align = *a,
            Style::Padding(p) => self.content_box.padding = *p,
            Style::Font(_) => {}
        }
    }
}

/// A drawable element in the retained tree.
///
/// The layout engine holds elements as `Box<dyn Element>`: it reads the
/// intrinsic size while sizing, assigns each element a fresh [`BoundingBox`],
/// and calls [`Element::draw_self`] in tree order during a redraw pass. The
/// style pipeline mutates elements only through [`Element::apply_style`].
pub trait Element {
    /// Shared base state.
    fn common(&self) -> &ElementCommon;

    /// Mutable shared base state.
    fn common_mut(&mut self) -> &mut ElementCommon;

    /// Paint this element within `bounds`.
    ///
    /// `bounds` is whatever layout assigned; it need not match the intrinsic
    /// size. The only side effect is writes to `screen`.
    fn draw_self(&self, screen: &mut dyn Screen, bounds: BoundingBox) -> Result<()>;

    /// Apply one matched style rule.
    ///
    /// Variants intercept the kinds they own and forward everything else to
    /// [`ElementCommon::apply_base_style`], so a pipeline can feed rules of
    /// mixed kinds to the same element without loss.
    fn apply_style(&mut self, style: &Style) {
        self.common_mut().apply_base_style(style);
    }

    /// Current intrinsic width. Never stale across mutation.
    fn width(&self) -> u32 {
        self.common().width
    }

    /// Current intrinsic height. Never stale across mutation.
    fn height(&self) -> u32 {
        self.common().height
    }
}

/// Run `draw` only when the content box has a color.
///
/// The shared visibility rule for every rectangle-like variant: an unset
/// color means invisible, and invisible elements skip the backend entirely.
pub(crate) fn draw_if_visible<F>(common: &ElementCommon, draw: F) -> Result<()>
where
    F: FnOnce(Color) -> Result<()>,
{
    match common.content_box.color {
        Some(color) => draw(color),
        None => Ok(()),
    }
}
