//! Blank canvases, blitting and channel conversion.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::centered_offset;

/// Errors returned by canvas operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("{src_w}x{src_h} image does not fit into {dst_w}x{dst_h} canvas at ({x}, {y})")]
    DoesNotFit {
        src_w: u32,
        src_h: u32,
        dst_w: u32,
        dst_h: u32,
        x: u32,
        y: u32,
    },
}

/// A single-channel canvas filled with white.
pub fn white_gray(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([255]))
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`.
///
/// The whole of `src` must fit; partial blits are rejected.
pub fn blit(dst: &mut GrayImage, src: &GrayImage, x: u32, y: u32) -> Result<(), CanvasError> {
    let fits_x = x
        .checked_add(src.width())
        .is_some_and(|right| right <= dst.width());
    let fits_y = y
        .checked_add(src.height())
        .is_some_and(|bottom| bottom <= dst.height());
    if !fits_x || !fits_y {
        return Err(CanvasError::DoesNotFit {
            src_w: src.width(),
            src_h: src.height(),
            dst_w: dst.width(),
            dst_h: dst.height(),
            x,
            y,
        });
    }

    let src_w = src.width() as usize;
    let dst_w = dst.width() as usize;
    let src_raw = src.as_raw();
    let dst_raw: &mut [u8] = dst;
    for row in 0..src.height() as usize {
        let s = row * src_w;
        let d = (y as usize + row) * dst_w + x as usize;
        dst_raw[d..d + src_w].copy_from_slice(&src_raw[s..s + src_w]);
    }
    Ok(())
}

/// Copy `src` into the middle of `dst` and return the top-left offset used.
///
/// Offsets are `(dst - src) / 2` on each axis, rounded down.
pub fn blit_centered(dst: &mut GrayImage, src: &GrayImage) -> Result<(u32, u32), CanvasError> {
    let offset = centered_offset(dst.width(), src.width())
        .zip(centered_offset(dst.height(), src.height()));
    let Some((x, y)) = offset else {
        return Err(CanvasError::DoesNotFit {
            src_w: src.width(),
            src_h: src.height(),
            dst_w: dst.width(),
            dst_h: dst.height(),
            x: 0,
            y: 0,
        });
    };
    blit(dst, src, x, y)?;
    Ok((x, y))
}

/// Replicate a gray canvas into three identical channels.
pub fn gray_to_rgb(src: &GrayImage) -> RgbImage {
    RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let v = src.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}
