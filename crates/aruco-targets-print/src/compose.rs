//! Marker compositors: A4 print pages and bordered marker images.

use aruco_targets_core::{blit_centered, draw_crosshair, gray_to_rgb, mm_to_px, white_gray, Typeface};
use aruco_targets_dict::{draw_marker, identify_marker, DictionaryName};
use image::{GrayImage, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{A4Layout, BorderedLayout, PrintError};

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// What to render: one marker id from one dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRequest {
    pub dictionary: DictionaryName,
    pub id: u32,
    /// Width of the black marker border in cells.
    pub border_bits: usize,
    /// Read the rendered marker back and check it decodes as `id`.
    pub verify: bool,
}

impl MarkerRequest {
    pub fn new(dictionary: DictionaryName, id: u32) -> Self {
        Self {
            dictionary,
            id,
            border_bits: 1,
            verify: false,
        }
    }
}

/// A finished canvas and where the marker sits on it.
#[derive(Debug, Clone)]
pub struct Composition {
    pub image: RgbImage,
    /// Top-left corner of the marker on the canvas.
    pub marker_origin: (u32, u32),
    /// Marker side in pixels.
    pub marker_side: u32,
}

impl Composition {
    /// The four marker corners: top-left, top-right, bottom-left, bottom-right.
    pub fn marker_corners(&self) -> [(u32, u32); 4] {
        let (x, y) = self.marker_origin;
        let m = self.marker_side;
        [(x, y), (x + m, y), (x, y + m), (x + m, y + m)]
    }
}

fn render_marker(req: &MarkerRequest, side_px: u32) -> Result<GrayImage, PrintError> {
    let dict = req.dictionary.dictionary();
    let marker = draw_marker(dict, req.id, side_px, req.border_bits)?;
    if req.verify {
        match identify_marker(&marker, dict, req.border_bits) {
            Some(m) if m.id == req.id && m.rotation == 0 => {
                log::debug!("{}: id {} verified", dict.name, req.id);
            }
            _ => return Err(PrintError::VerificationFailed { id: req.id }),
        }
    }
    Ok(marker)
}

/// Left edge that centers `text` horizontally on a canvas of `width` pixels.
///
/// Floor division on signed values: text wider than the canvas starts left of it.
fn centered_text_x(
    face: &Typeface,
    width: u32,
    text: &str,
    font_scale: f32,
) -> Result<i64, PrintError> {
    let tw = i64::from(face.text_size(text, font_scale)?.width);
    Ok((i64::from(width) - tw).div_euclid(2))
}

/// Footer lines printed under the marker on a print page.
pub fn a4_info_lines(req: &MarkerRequest, dpi: u32, layout: &A4Layout) -> Vec<String> {
    let mut lines = vec![
        format!("Dictionary: {}", req.dictionary.canonical()),
        format!("Size: {0}mm x {0}mm", layout.marker_mm),
        format!("Print DPI: {dpi}"),
    ];
    if !layout.tag_line.is_empty() {
        lines.push(layout.tag_line.clone());
    }
    lines
}

/// Compose a print page: the marker centered on the paper, a title above it,
/// an information footer and gray crosshairs at the marker corners.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(layout), fields(id = req.id)))]
pub fn compose_a4(
    req: &MarkerRequest,
    dpi: u32,
    layout: &A4Layout,
) -> Result<Composition, PrintError> {
    layout.validate()?;
    let (width, height) = layout.paper.pixels(dpi);
    let marker_side = mm_to_px(layout.marker_mm, dpi);
    log::debug!(
        "page {width}x{height} px, marker {marker_side} px at {dpi} dpi ({})",
        req.dictionary
    );

    let marker = render_marker(req, marker_side)?;
    let mut page = white_gray(width, height);
    let marker_origin = blit_centered(&mut page, &marker)?;
    let mut image = gray_to_rgb(&page);

    let face = Typeface::embedded()?;
    let title = format!("ArUco Marker - ID: {}", req.id);
    face.draw_text(
        &mut image,
        &title,
        centered_text_x(&face, width, &title, layout.title_scale)?,
        i64::from(layout.title_baseline_px),
        layout.title_scale,
        TEXT_COLOR,
    )?;

    let first_baseline = i64::from(height) - i64::from(layout.footer_offset_px);
    for (i, line) in a4_info_lines(req, dpi, layout).iter().enumerate() {
        face.draw_text(
            &mut image,
            line,
            centered_text_x(&face, width, line, layout.info_scale)?,
            first_baseline + i as i64 * i64::from(layout.line_height_px),
            layout.info_scale,
            TEXT_COLOR,
        )?;
    }

    let mut composition = Composition {
        image,
        marker_origin,
        marker_side,
    };
    let gray = Rgb([layout.crosshair_gray; 3]);
    for (cx, cy) in composition.marker_corners() {
        draw_crosshair(
            &mut composition.image,
            i64::from(cx),
            i64::from(cy),
            layout.crosshair_half_len_px,
            layout.crosshair_thickness_px,
            gray,
        );
    }
    Ok(composition)
}

/// Compose a marker of `size` pixels with a white margin and an `ID: n` caption.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(layout), fields(id = req.id)))]
pub fn compose_bordered(
    req: &MarkerRequest,
    size: u32,
    layout: &BorderedLayout,
) -> Result<Composition, PrintError> {
    layout.validate()?;
    let marker = render_marker(req, size)?;
    let margin = layout.margin(size);
    let side = margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(size))
        .ok_or_else(|| PrintError::InvalidLayout(format!("marker size {size} is too large")))?;

    let mut canvas = white_gray(side, side);
    let marker_origin = blit_centered(&mut canvas, &marker)?;
    let mut image = gray_to_rgb(&canvas);

    if layout.label {
        Typeface::embedded()?.draw_text(
            &mut image,
            &format!("ID: {}", req.id),
            i64::from(margin),
            i64::from(side) - i64::from(layout.label_bottom_px),
            layout.label_scale,
            TEXT_COLOR,
        )?;
    }

    Ok(Composition {
        image,
        marker_origin,
        marker_side: size,
    })
}
