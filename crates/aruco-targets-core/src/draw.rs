//! Axis-aligned drawing primitives on RGB canvases.
//!
//! Coordinates are signed so callers can place decorations partly outside the
//! canvas; everything is clipped to the image bounds before it reaches
//! `imageproc`.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// The part of `[x, x + w) × [y, y + h)` that lies on the canvas.
fn clipped_rect(img: &RgbImage, x: i64, y: i64, w: u64, h: u64) -> Option<Rect> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add_unsigned(w).min(i64::from(img.width()));
    let y1 = y.saturating_add_unsigned(h).min(i64::from(img.height()));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    let left = i32::try_from(x0).ok()?;
    let top = i32::try_from(y0).ok()?;
    let width = u32::try_from(x1 - x0).ok()?;
    let height = u32::try_from(y1 - y0).ok()?;
    Some(Rect::at(left, top).of_size(width, height))
}

/// Draw a `+` shaped alignment mark centered on `(cx, cy)`.
///
/// Each arm extends `half_len` pixels from the center; both strokes are
/// `thickness` pixels wide.
pub fn draw_crosshair(
    img: &mut RgbImage,
    cx: i64,
    cy: i64,
    half_len: u32,
    thickness: u32,
    color: Rgb<u8>,
) {
    let half = i64::from(half_len);
    let span = u64::from(half_len) * 2 + 1;
    let lead = i64::from(thickness / 2);
    let thick = u64::from(thickness);
    let strokes = [
        clipped_rect(img, cx.saturating_sub(half), cy.saturating_sub(lead), span, thick),
        clipped_rect(img, cx.saturating_sub(lead), cy.saturating_sub(half), thick, span),
    ];
    for rect in strokes.into_iter().flatten() {
        draw_filled_rect_mut(img, rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn crosshair_arms_have_expected_extent() {
        let mut img = RgbImage::from_pixel(64, 64, WHITE);
        draw_crosshair(&mut img, 32, 32, 20, 2, GRAY);

        assert_eq!(*img.get_pixel(12, 32), GRAY);
        assert_eq!(*img.get_pixel(52, 32), GRAY);
        assert_eq!(*img.get_pixel(12, 31), GRAY);
        assert_eq!(*img.get_pixel(11, 32), WHITE);
        assert_eq!(*img.get_pixel(53, 32), WHITE);
        assert_eq!(*img.get_pixel(32, 12), GRAY);
        assert_eq!(*img.get_pixel(32, 52), GRAY);
        assert_eq!(*img.get_pixel(32, 53), WHITE);
        assert_eq!(*img.get_pixel(40, 40), WHITE);
    }

    #[test]
    fn drawing_is_clipped_at_canvas_edges() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_crosshair(&mut img, 0, 0, 20, 2, GRAY);
        assert_eq!(*img.get_pixel(9, 0), GRAY);
        assert_eq!(*img.get_pixel(0, 9), GRAY);
        assert_eq!(*img.get_pixel(5, 5), WHITE);

        assert!(clipped_rect(&img, -50, -50, 5, 5).is_none());
        assert!(clipped_rect(&img, 100, 100, 5, 5).is_none());
    }

    #[test]
    fn extreme_arm_lengths_do_not_overflow() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_crosshair(&mut img, 5, 5, u32::MAX, u32::MAX, GRAY);
        assert!(img.pixels().all(|p| *p == GRAY));

        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_crosshair(&mut img, i64::from(u32::MAX), 5, u32::MAX, 1, GRAY);
        assert_eq!(*img.get_pixel(9, 5), GRAY);
        assert_eq!(*img.get_pixel(9, 4), WHITE);
    }

    #[test]
    fn zero_thickness_draws_nothing() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        draw_crosshair(&mut img, 5, 5, 3, 0, GRAY);
        assert!(img.pixels().all(|p| *p == WHITE));
    }
}
