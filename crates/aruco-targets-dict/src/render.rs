//! Marker rasterization and read-back.
//!
//! A marker is a `(N + 2·border) × (N + 2·border)` grid of cells: a black
//! border of `border_bits` cells around the `N × N` code. The grid is scaled
//! to the requested side with nearest-neighbour sampling, so every pixel maps
//! to cell `floor(p * cells / side)` along each axis.

use image::{GrayImage, Luma};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{find_code, Dictionary, Match};

/// Errors returned by the marker rasterizer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker id {id} is out of range for {dictionary} (ids 0..{capacity})")]
    IdOutOfRange {
        id: u32,
        capacity: usize,
        dictionary: &'static str,
    },
    #[error("marker side of {side} px is smaller than its {cells} cells")]
    SideTooSmall { side: u32, cells: usize },
}

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Render marker `id` as a `side_px × side_px` grayscale image.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(dict), fields(dict = dict.name)))]
pub fn draw_marker(
    dict: &Dictionary,
    id: u32,
    side_px: u32,
    border_bits: usize,
) -> Result<GrayImage, MarkerError> {
    if dict.code(id).is_none() {
        return Err(MarkerError::IdOutOfRange {
            id,
            capacity: dict.capacity(),
            dictionary: dict.name,
        });
    }

    let n = dict.marker_size;
    let cells = n + 2 * border_bits;
    if (side_px as usize) < cells {
        return Err(MarkerError::SideTooSmall {
            side: side_px,
            cells,
        });
    }

    // Row-major cell grid including the border; cells outside the code are black.
    let grid: Vec<bool> = (0..cells * cells)
        .map(|i| {
            let (cx, cy) = (i % cells, i / cells);
            match (cx.checked_sub(border_bits), cy.checked_sub(border_bits)) {
                (Some(x), Some(y)) => dict.is_black(id, x, y).unwrap_or(true),
                _ => true,
            }
        })
        .collect();

    // Cell index for every pixel column/row.
    let side = side_px as usize;
    let cell_of: Vec<usize> = (0..side).map(|p| p * cells / side).collect();
    let is_black = |cx: usize, cy: usize| grid[cy * cells + cx];

    let img = GrayImage::from_fn(side_px, side_px, |x, y| {
        if is_black(cell_of[x as usize], cell_of[y as usize]) {
            BLACK
        } else {
            WHITE
        }
    });
    log::trace!("{}: rendered id {id} at {side_px}px", dict.name);
    Ok(img)
}

/// Sample the cell centers of a rendered marker and return its inner code.
///
/// `img` must be exactly the marker (no margin). Returns `None` when the image
/// is not square, is smaller than the cell grid, or the border is not black.
pub fn read_marker_bits(img: &GrayImage, marker_size: usize, border_bits: usize) -> Option<u64> {
    let cells = marker_size + 2 * border_bits;
    if img.width() != img.height() || (img.width() as usize) < cells || marker_size * marker_size > 64
    {
        return None;
    }

    let side = img.width() as usize;
    let center = |c: usize| ((2 * c + 1) * side / (2 * cells)) as u32;

    let mut code = 0u64;
    for cy in 0..cells {
        for cx in 0..cells {
            let black = img.get_pixel(center(cx), center(cy)).0[0] < 128;
            let inner_x = cx.checked_sub(border_bits).filter(|&x| x < marker_size);
            let inner_y = cy.checked_sub(border_bits).filter(|&y| y < marker_size);
            match (inner_x, inner_y) {
                (Some(x), Some(y)) => {
                    if black {
                        code |= 1 << (y * marker_size + x);
                    }
                }
                _ if !black => return None,
                _ => {}
            }
        }
    }
    Some(code)
}

/// Read a rendered marker back and match it against its dictionary.
///
/// Only exact matches are accepted.
pub fn identify_marker(img: &GrayImage, dict: &Dictionary, border_bits: usize) -> Option<Match> {
    let code = read_marker_bits(img, dict.marker_size, border_bits)?;
    find_code(dict, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{DICT_4X4_100, DICT_4X4_50};

    #[test]
    fn opencv_4x4_id0_pixels() {
        // 6 cells over 60 px: 10 px per cell.
        let img = draw_marker(&DICT_4X4_50, 0, 60, 1).expect("draw");
        assert_eq!(img.dimensions(), (60, 60));
        // Border.
        assert_eq!(img.get_pixel(5, 5).0[0], 0);
        assert_eq!(img.get_pixel(55, 30).0[0], 0);
        // First inner row is white, black, white, white.
        assert_eq!(img.get_pixel(15, 15).0[0], 255);
        assert_eq!(img.get_pixel(25, 15).0[0], 0);
        assert_eq!(img.get_pixel(35, 15).0[0], 255);
        assert_eq!(img.get_pixel(45, 15).0[0], 255);
    }

    #[test]
    fn rendered_markers_read_back_as_their_id() {
        for (dict, side) in [(&DICT_4X4_50, 200u32), (&DICT_4X4_100, 97)] {
            for id in [0u32, 1, 17, 49] {
                let img = draw_marker(dict, id, side, 1).expect("draw");
                let m = identify_marker(&img, dict, 1).expect("identify");
                assert_eq!((m.id, m.rotation), (id, 0));
            }
        }
    }

    #[test]
    fn wider_border_is_respected() {
        let img = draw_marker(&DICT_4X4_50, 5, 80, 2).expect("draw");
        assert_eq!(
            read_marker_bits(&img, 4, 2),
            DICT_4X4_50.code(5)
        );
        // The inner code starts two cells in: 80 / 8 = 10 px per cell.
        assert_eq!(img.get_pixel(15, 15).0[0], 0);
    }

    #[test]
    fn invalid_requests_are_rejected() {
        assert_eq!(
            draw_marker(&DICT_4X4_50, 50, 200, 1).unwrap_err(),
            MarkerError::IdOutOfRange {
                id: 50,
                capacity: 50,
                dictionary: "DICT_4X4_50"
            }
        );
        assert_eq!(
            draw_marker(&DICT_4X4_50, 0, 5, 1).unwrap_err(),
            MarkerError::SideTooSmall { side: 5, cells: 6 }
        );
        assert!(draw_marker(&DICT_4X4_50, 0, 6, 1).is_ok());
    }

    #[test]
    fn read_back_rejects_white_border() {
        let img = GrayImage::from_pixel(60, 60, WHITE);
        assert_eq!(read_marker_bits(&img, 4, 1), None);
        let rect = GrayImage::from_pixel(60, 50, BLACK);
        assert_eq!(read_marker_bits(&rect, 4, 1), None);
    }
}
