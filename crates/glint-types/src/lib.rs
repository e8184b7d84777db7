//! Foundation types for the GLINT element layer.
//!
//! This crate contains the platform-agnostic core types shared by all GLINT
//! crates: palette colors, font identifiers and metrics, bitmap image
//! sources, the `Screen` rendering-backend trait, and error types.

pub mod backend;
pub mod bitmap;
pub mod color;
pub mod error;
pub mod font;

pub use backend::{PixelScreen, Screen};
pub use bitmap::Bitmap;
pub use color::Color;
pub use error::{GlintError, Result};
pub use font::{Font, FontMetrics};
