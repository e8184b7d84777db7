//! Palette colors for indexed-color display hardware.

use serde::{Deserialize, Serialize};

/// A color palette index.
///
/// GLINT targets indexed-color displays; the palette itself lives in the
/// backend. Index 0 is reserved as the transparent index for bitmaps and is
/// never a drawable foreground color on real hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    /// The transparent palette slot.
    pub const TRANSPARENT: Self = Self(0);
    /// Default foreground on monochrome-style palettes.
    pub const WHITE: Self = Self(1);
    pub const RED: Self = Self(2);
    pub const GREEN: Self = Self(7);
    pub const BLUE: Self = Self(8);
    pub const YELLOW: Self = Self(5);
    pub const BLACK: Self = Self(15);

    /// Raw palette index.
    pub const fn index(self) -> u8 {
        self.0
    }
}
