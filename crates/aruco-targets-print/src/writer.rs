//! PNG output with explicit compression and physical resolution.

use image::RgbImage;
use png::{BitDepth, ColorType, Compression, PixelDimensions, Unit};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use crate::PrintError;

/// Metres per inch, for the `pHYs` chunk.
const METRES_PER_INCH: f64 = 0.0254;

/// Deflate level used for the PNG image data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PngCompression {
    /// Stored blocks only; largest files, no recompression artefacts in print pipelines.
    None,
    #[default]
    Balanced,
}

impl From<PngCompression> for Compression {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::None => Compression::NoCompression,
            PngCompression::Balanced => Compression::Balanced,
        }
    }
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<(), PrintError> {
    let dir = dir.as_ref();
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Pixels per metre for `dpi`.
pub fn pixels_per_metre(dpi: u32) -> u32 {
    (f64::from(dpi) / METRES_PER_INCH).round() as u32
}

/// Write `img` as an 8-bit RGB PNG and return the file size in bytes.
///
/// When `dpi` is set a `pHYs` chunk records the physical resolution.
pub fn write_png(
    path: impl AsRef<Path>,
    img: &RgbImage,
    dpi: Option<u32>,
    compression: PngCompression,
) -> Result<u64, PrintError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(compression.into());
    if let Some(dpi) = dpi {
        let ppm = pixels_per_metre(dpi);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()?;

    let bytes = fs::metadata(path)?.len();
    log::debug!("wrote {} ({bytes} bytes)", path.display());
    Ok(bytes)
}
