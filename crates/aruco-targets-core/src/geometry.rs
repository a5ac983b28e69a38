//! Physical-unit conversions and placement helpers.

use serde::{Deserialize, Serialize};

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Convert a physical length to whole pixels at the given DPI.
///
/// The result is truncated, never rounded: `floor(mm * dpi / 25.4)`.
/// Negative or non-finite lengths map to `0`.
#[inline]
pub fn mm_to_px(mm: f64, dpi: u32) -> u32 {
    let px = mm * f64::from(dpi) / MM_PER_INCH;
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    px.floor().min(f64::from(u32::MAX)) as u32
}

/// Offset that centers `inner` inside `outer` (integer floor division).
///
/// Returns `None` when `inner` is larger than `outer`.
#[inline]
pub fn centered_offset(outer: u32, inner: u32) -> Option<u32> {
    outer.checked_sub(inner).map(|slack| slack / 2)
}

/// Physical page size in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PaperSize {
    /// ISO 216 A4, portrait.
    pub const A4: PaperSize = PaperSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// Pixel dimensions `(width, height)` at the given DPI.
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        (mm_to_px(self.width_mm, dpi), mm_to_px(self.height_mm, dpi))
    }

    /// Whether both sides are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}
