//! Tile rasterization with tiny-skia.

use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use super::{CHECK_SCALE, CORNER_RADIUS, PADDING, SLOT_SIZE};
use crate::color::Rgb;

/// Cubic Bézier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Fill the whole canvas with the background color.
pub fn fill_background(pixmap: &mut Pixmap, background: Rgb) {
    pixmap.fill(background.to_skia());
}

/// Draw tile `(c, r)`: a rounded square in `fill` with a checkmark in
/// `check`, stroked `thickness` pixels wide.
pub fn draw_tile(pixmap: &mut Pixmap, c: u32, r: u32, fill: Rgb, check: Rgb, thickness: f32) {
    let x = (c * SLOT_SIZE) as f32;
    let y = (r * SLOT_SIZE) as f32;
    let slot = SLOT_SIZE as f32;
    let pad = PADDING as f32;

    // Corners are inclusive pixels: x+6 ..= x+44 is 39 wide.
    let edge = slot - 2.0 * pad + 1.0;
    if let Some(square) = rounded_rect(x + pad, y + pad, edge, CORNER_RADIUS) {
        pixmap.fill_path(
            &square,
            &solid(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    let points = checkmark_points(x + slot / 2.0, y + slot / 2.0, slot - 2.0 * pad);
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].0, points[0].1);
    pb.line_to(points[1].0, points[1].1);
    pb.line_to(points[2].0, points[2].1);
    if let Some(mark) = pb.finish() {
        let stroke = Stroke {
            width: thickness,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(&mark, &solid(check), &stroke, Transform::identity(), None);
    }
}

/// The three points of a checkmark centred on `(cx, cy)` in a tile whose
/// usable edge is `size` pixels.
///
/// The polyline runs short arm first: `P1 → P2 → P3`.
pub fn checkmark_points(cx: f32, cy: f32, size: f32) -> [(f32, f32); 3] {
    let k = size * CHECK_SCALE;
    [
        (cx - k * 0.5, cy + k * 0.1),
        (cx - k * 0.1, cy + k * 0.5),
        (cx + k * 0.6, cy - k * 0.6),
    ]
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

/// Square of edge `size` at `(x, y)` with circular corners of `radius`.
fn rounded_rect(x: f32, y: f32, size: f32, radius: f32) -> Option<Path> {
    let r = radius.min(size / 2.0);
    let k = r * KAPPA;
    let (left, top, right, bottom) = (x, y, x + size, y + size);

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}
