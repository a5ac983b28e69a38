//! Page layouts and their JSON configuration.

use aruco_targets_core::{pixel_height, PaperSize};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::PrintError;

/// Upper bound for crosshair arm length and stroke width.
pub const MAX_CROSSHAIR_PX: u32 = 10_000;

fn check_font_scale(field: &str, scale: f32) -> Result<(), PrintError> {
    pixel_height(scale)
        .map(|_| ())
        .map_err(|e| PrintError::InvalidLayout(format!("{field}: {e}")))
}

fn default_tag_line() -> String {
    "For VideoMapping System".to_string()
}

/// Layout of a single-marker print page.
///
/// Pixel quantities (`title_baseline_px`, `footer_offset_px`, ...) are absolute
/// and do not scale with DPI. Missing JSON fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct A4Layout {
    pub paper: PaperSize,
    /// Physical side of the marker, including its black border.
    pub marker_mm: f64,
    pub title_scale: f32,
    /// Baseline of the title, from the top edge.
    pub title_baseline_px: u32,
    pub info_scale: f32,
    /// Baseline of the first footer line, from the bottom edge.
    pub footer_offset_px: u32,
    pub line_height_px: u32,
    /// Last footer line; omitted when empty.
    pub tag_line: String,
    pub crosshair_half_len_px: u32,
    pub crosshair_thickness_px: u32,
    pub crosshair_gray: u8,
}

impl Default for A4Layout {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            marker_mm: 150.0,
            title_scale: 2.0,
            title_baseline_px: 100,
            info_scale: 1.0,
            footer_offset_px: 200,
            line_height_px: 50,
            tag_line: default_tag_line(),
            crosshair_half_len_px: 20,
            crosshair_thickness_px: 2,
            crosshair_gray: 128,
        }
    }
}

impl A4Layout {
    /// Load a JSON layout from disk.
    ///
    /// The result is not validated: callers apply their overrides first and
    /// then call [`A4Layout::validate`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this layout to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject layouts that cannot hold a marker or cannot be drawn.
    pub fn validate(&self) -> Result<(), PrintError> {
        if !self.paper.is_valid() {
            return Err(PrintError::InvalidLayout(
                "paper width and height must be > 0".into(),
            ));
        }
        if !self.marker_mm.is_finite() || self.marker_mm <= 0.0 {
            return Err(PrintError::InvalidLayout("marker_mm must be > 0".into()));
        }
        if self.marker_mm > self.paper.width_mm.min(self.paper.height_mm) {
            return Err(PrintError::InvalidLayout(format!(
                "{} mm marker does not fit on {} x {} mm paper",
                self.marker_mm, self.paper.width_mm, self.paper.height_mm
            )));
        }
        check_font_scale("title_scale", self.title_scale)?;
        check_font_scale("info_scale", self.info_scale)?;
        if self.crosshair_half_len_px > MAX_CROSSHAIR_PX
            || self.crosshair_thickness_px > MAX_CROSSHAIR_PX
        {
            return Err(PrintError::InvalidLayout(format!(
                "crosshair length and thickness must be <= {MAX_CROSSHAIR_PX} px"
            )));
        }
        Ok(())
    }
}

/// Layout of a marker with a white margin and an id caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderedLayout {
    /// Margin on each side is `size / margin_divisor`.
    pub margin_divisor: u32,
    pub label: bool,
    pub label_scale: f32,
    /// Distance from the bottom edge to the caption baseline.
    pub label_bottom_px: u32,
}

impl Default for BorderedLayout {
    fn default() -> Self {
        Self {
            margin_divisor: 10,
            label: true,
            label_scale: 0.5,
            label_bottom_px: 10,
        }
    }
}

impl BorderedLayout {
    /// Margin in pixels for a marker of `size` pixels.
    pub fn margin(&self, size: u32) -> u32 {
        size.checked_div(self.margin_divisor).unwrap_or(0)
    }

    /// Reject caption scales the font cannot render.
    pub fn validate(&self) -> Result<(), PrintError> {
        if self.label {
            check_font_scale("label_scale", self.label_scale)?;
        }
        Ok(())
    }
}
