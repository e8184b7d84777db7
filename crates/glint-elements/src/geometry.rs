//! Geometry produced by the layout pass.

/// An axis-aligned pixel rectangle assigned to an element by layout.
///
/// Produced fresh each pass; an element must paint within it and must not
/// assume it matches its own intrinsic size (layout may stretch, center, or
/// crop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left edge in pixels.
    pub left: i32,
    /// Top edge in pixels.
    pub top: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
