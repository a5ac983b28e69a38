//! Caption text rendered with an embedded TrueType font.
//!
//! Sizes are given as a Hershey-style `font_scale`: one unit is
//! [`PX_PER_FONT_SCALE`] pixels of font height, so a scale of `1.0` yields
//! capitals about 19 px tall. Text is positioned by the left end of its
//! baseline.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Font height in pixels for a `font_scale` of `1.0`.
pub const PX_PER_FONT_SCALE: f32 = 30.0;

/// Largest accepted `font_scale`.
pub const MAX_FONT_SCALE: f32 = 40.0;

/// Errors returned by text measurement and drawing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("embedded font could not be parsed")]
    InvalidFont,
    #[error("font scale {scale} is outside (0, {max}]")]
    ScaleOutOfRange { scale: f32, max: f32 },
}

/// Rendered extent of a string in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Font height in pixels for `font_scale`.
pub fn pixel_height(font_scale: f32) -> Result<f32, FontError> {
    if font_scale.is_finite() && font_scale > 0.0 && font_scale <= MAX_FONT_SCALE {
        Ok(font_scale * PX_PER_FONT_SCALE)
    } else {
        Err(FontError::ScaleOutOfRange {
            scale: font_scale,
            max: MAX_FONT_SCALE,
        })
    }
}

/// The caption font (DejaVu Sans, compiled into the binary).
#[derive(Clone, Debug)]
pub struct Typeface {
    font: FontRef<'static>,
}

impl Typeface {
    pub fn embedded() -> Result<Self, FontError> {
        let font = FontRef::try_from_slice(DEJAVU_SANS).map_err(|_| FontError::InvalidFont)?;
        Ok(Self { font })
    }

    /// Measure `text` without drawing it.
    pub fn text_size(&self, text: &str, font_scale: f32) -> Result<TextSize, FontError> {
        let scale = PxScale::from(pixel_height(font_scale)?);
        let (width, height) = imageproc::drawing::text_size(scale, &self.font, text);
        Ok(TextSize { width, height })
    }

    /// Draw `text` with its baseline's left end at `(x, baseline_y)`.
    ///
    /// Text that lies entirely outside the canvas is skipped; the rest is
    /// clipped to the image bounds.
    pub fn draw_text(
        &self,
        img: &mut RgbImage,
        text: &str,
        x: i64,
        baseline_y: i64,
        font_scale: f32,
        color: Rgb<u8>,
    ) -> Result<(), FontError> {
        let scale = PxScale::from(pixel_height(font_scale)?);
        let size = self.text_size(text, font_scale)?;
        let ascent = self.font.as_scaled(scale).ascent().round() as i64;
        let top = baseline_y.saturating_sub(ascent);

        let misses_x = x >= i64::from(img.width()) || x.saturating_add(i64::from(size.width)) <= 0;
        let misses_y =
            top >= i64::from(img.height()) || top.saturating_add(i64::from(size.height)) <= 0;
        if misses_x || misses_y {
            return Ok(());
        }
        let (Ok(x), Ok(top)) = (i32::try_from(x), i32::try_from(top)) else {
            return Ok(());
        };
        draw_text_mut(img, color, x, top, scale, &self.font, text);
        Ok(())
    }
}
