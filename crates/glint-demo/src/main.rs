//! GLINT demo entry point.
//!
//! Builds a small element scene, styles it from an embedded TOML
//! stylesheet, draws into an in-memory framebuffer, and prints the result
//! as ASCII. Bounds are assigned by hand here; in a full framework the
//! layout engine produces them from the intrinsic sizes.

use anyhow::Result;

use glint_elements::{
    BoundingBox, BoxElement, DynamicElement, Element, ImageElement, Stylesheet, TextElement,
};
use glint_types::{Bitmap, Color, PixelScreen, Screen};

const SHEET: &str = r#"
[[rule]]
class = "box"
styles = [{ kind = "color", value = 8 }]

[[rule]]
class = "text"
styles = [
    { kind = "color", value = 5 },
    { kind = "padding", value = { top = 1, left = 1 } },
]
"#;

/// A 5x4 sprite with transparent corners.
fn sprite() -> Bitmap {
    let mut b = Bitmap::solid(5, 4, Color(2));
    for (x, y) in [(0, 0), (4, 0), (0, 3), (4, 3)] {
        b.set_pixel(x, y, Color::TRANSPARENT);
    }
    b
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sheet = Stylesheet::from_toml_str(SHEET)?;
    log::info!("demo stylesheet: {} rules", sheet.rules.len());

    let mut elements: Vec<Box<dyn Element>> = vec![
        Box::new(BoxElement::new()),
        Box::new(TextElement::new("hi")),
        Box::new(ImageElement::new(sprite())),
        Box::new(DynamicElement::new(|screen: &mut dyn Screen, b| {
            // Half-full gauge.
            screen.draw_rect(b.left, b.top, b.width, b.height, Color(1))?;
            screen.fill_rect(
                b.left + 1,
                b.top + 1,
                (b.width.saturating_sub(2)) / 2,
                b.height.saturating_sub(2),
                Color(7),
            )
        })),
    ];
    for el in &mut elements {
        sheet.apply_to(el.as_mut());
    }

    // Hand-assigned layout: background, label, sprite, gauge.
    let bounds = [
        BoundingBox::new(0, 0, 40, 24),
        BoundingBox::new(2, 2, 14, 12),
        BoundingBox::new(30, 3, 5, 4),
        BoundingBox::new(2, 16, 20, 5),
    ];

    let mut screen = PixelScreen::new(40, 24);
    for (el, b) in elements.iter().zip(bounds) {
        log::debug!(
            "draw {:?} at ({}, {}) {}x{}",
            el.common().class,
            b.left,
            b.top,
            b.width,
            b.height
        );
        el.draw_self(&mut screen, b)?;
    }

    print!("{}", screen.ascii_dump());
    Ok(())
}
