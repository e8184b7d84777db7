//! glint-elements: the drawable element layer of GLINT.
//!
//! An element owns its intrinsic size and a content box (color, alignment,
//! padding), knows how to recompute its footprint when mutated, and paints
//! itself into whatever bounding box the layout engine assigns. All
//! rendering goes through the [`Screen`](glint_types::Screen) trait -- no
//! platform-specific code.

pub mod content;
pub mod dynamic;
pub mod element;
pub mod geometry;
pub mod image;
pub mod shape;
pub mod style;
pub mod text;

#[cfg(test)]
pub(crate) mod test_utils;

pub use content::{ContentAlign, ContentBox, Padding};
pub use dynamic::DynamicElement;
pub use element::{Element, ElementCommon};
pub use geometry::BoundingBox;
pub use image::ImageElement;
pub use shape::{BoxElement, ShapeElement};
pub use style::{Style, StyleRule, Stylesheet};
pub use text::TextElement;
