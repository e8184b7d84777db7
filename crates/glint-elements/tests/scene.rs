//! End-to-end: a small element scene styled from TOML and drawn into a
//! software framebuffer, the way a layout engine would drive it.

use glint_elements::{
    BoundingBox, BoxElement, DynamicElement, Element, ImageElement, Stylesheet, TextElement,
};
use glint_types::{Bitmap, Color, PixelScreen, Screen};

const SHEET: &str = r#"
[[rule]]
class = "box"
styles = [{ kind = "color", value = 3 }]

[[rule]]
class = "text"
styles = [
    { kind = "font", value = "small" },
    { kind = "color", value = 5 },
    { kind = "padding", value = { top = 1, left = 1 } },
]
"#;

#[test]
fn styled_scene_draws_in_tree_order() {
    let sheet = Stylesheet::from_toml_str(SHEET).unwrap();

    let mut elements: Vec<Box<dyn Element>> = vec![
        Box::new(BoxElement::new()),
        Box::new(TextElement::new("hi")),
        Box::new(ImageElement::new(Bitmap::solid(2, 2, Color(9)))),
    ];
    for el in &mut elements {
        sheet.apply_to(el.as_mut());
    }

    // The text element took the small font (4x6 cell) from the sheet.
    assert_eq!(elements[1].width(), 8);
    assert_eq!(elements[1].height(), 6);
    // The image kept its source size.
    assert_eq!((elements[2].width(), elements[2].height()), (2, 2));

    // Hand-assigned bounds standing in for a layout pass.
    let bounds = [
        BoundingBox::new(0, 0, 16, 12),
        BoundingBox::new(2, 2, 8, 6),
        BoundingBox::new(12, 8, 2, 2),
    ];

    let mut screen = PixelScreen::new(16, 12);
    for (el, b) in elements.iter().zip(bounds) {
        el.draw_self(&mut screen, b).unwrap();
    }

    // Background box fill.
    assert_eq!(screen.pixel(0, 0), Some(3));
    assert_eq!(screen.pixel(15, 11), Some(3));
    // Text cell at bounds (2,2) + padding (1,1).
    assert_eq!(screen.pixel(3, 3), Some(5));
    // Image pixels over the box fill.
    assert_eq!(screen.pixel(12, 8), Some(9));
    assert_eq!(screen.pixel(13, 9), Some(9));
}

#[test]
fn unstyled_shape_is_invisible_on_screen() {
    let el = glint_elements::ShapeElement::new();
    let mut screen = PixelScreen::new(8, 8);
    el.draw_self(&mut screen, BoundingBox::new(0, 0, 8, 8))
        .unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(screen.pixel(x, y), Some(0));
        }
    }
}

#[test]
fn dynamic_element_paints_custom_content() {
    let gauge = DynamicElement::new(|screen: &mut dyn Screen, b: BoundingBox| {
        // A half-full horizontal gauge.
        screen.draw_rect(b.left, b.top, b.width, b.height, Color(1))?;
        screen.fill_rect(b.left + 1, b.top + 1, (b.width - 2) / 2, b.height - 2, Color(7))
    });
    let mut screen = PixelScreen::new(12, 5);
    gauge
        .draw_self(&mut screen, BoundingBox::new(0, 0, 12, 5))
        .unwrap();
    assert_eq!(screen.pixel(0, 0), Some(1)); // frame
    assert_eq!(screen.pixel(1, 1), Some(7)); // filled half
    assert_eq!(screen.pixel(9, 2), Some(0)); // empty half
}
