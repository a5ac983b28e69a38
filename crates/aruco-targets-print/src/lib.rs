//! Printable ArUco marker images.
//!
//! Two products are supported:
//! - **A4 sheets**: one marker of a fixed physical size centered on a page,
//!   with a title, an information footer and corner crosshairs, written as an
//!   uncompressed PNG tagged with its print DPI.
//! - **Bordered markers**: a marker of a given pixel size with a 10% white
//!   margin and an `ID: n` caption.
//!
//! ## Quickstart
//!
//! ```no_run
//! use aruco_targets_dict::DictionaryName;
//! use aruco_targets_print::{generate_marker, BorderedLayout, MarkerRequest};
//!
//! let req = MarkerRequest::new(DictionaryName::Dict4x4_50, 0);
//! let report = generate_marker(&req, 200, &BorderedLayout::default(), ".")?;
//! assert_eq!((report.width, report.height), (240, 240));
//! # Ok::<(), aruco_targets_print::PrintError>(())
//! ```

mod compose;
mod error;
mod layout;
mod naming;
mod report;
mod writer;

pub use compose::{a4_info_lines, compose_a4, compose_bordered, Composition, MarkerRequest};
pub use error::PrintError;
pub use layout::{A4Layout, BorderedLayout, MAX_CROSSHAIR_PX};
pub use naming::{a4_file_name, marker_file_name};
pub use report::{write_reports_json, GenerationReport};
pub use writer::{ensure_dir, pixels_per_metre, write_png, PngCompression};

use std::path::Path;

fn report_for(
    req: &MarkerRequest,
    path: &Path,
    comp: &Composition,
    dpi: Option<u32>,
    file_bytes: u64,
) -> GenerationReport {
    GenerationReport {
        path: path.to_path_buf(),
        dictionary: req.dictionary,
        id: req.id,
        width: comp.image.width(),
        height: comp.image.height(),
        marker_px: comp.marker_side,
        marker_origin: comp.marker_origin,
        dpi,
        file_bytes,
    }
}

/// Compose an A4 sheet and write it, uncompressed, into `out_dir`.
pub fn generate_a4(
    req: &MarkerRequest,
    dpi: u32,
    layout: &A4Layout,
    out_dir: impl AsRef<Path>,
) -> Result<GenerationReport, PrintError> {
    let out_dir = out_dir.as_ref();
    ensure_dir(out_dir)?;
    let comp = compose_a4(req, dpi, layout)?;
    let path = out_dir.join(a4_file_name(req.dictionary, req.id, dpi));
    let bytes = write_png(&path, &comp.image, Some(dpi), PngCompression::None)?;
    log::info!("{}: id {} -> {}", req.dictionary, req.id, path.display());
    Ok(report_for(req, &path, &comp, Some(dpi), bytes))
}

/// Compose a bordered marker of `size` pixels and write it into `out_dir`.
pub fn generate_marker(
    req: &MarkerRequest,
    size: u32,
    layout: &BorderedLayout,
    out_dir: impl AsRef<Path>,
) -> Result<GenerationReport, PrintError> {
    let out_dir = out_dir.as_ref();
    ensure_dir(out_dir)?;
    let comp = compose_bordered(req, size, layout)?;
    let path = out_dir.join(marker_file_name(req.dictionary, req.id, size));
    let bytes = write_png(&path, &comp.image, None, PngCompression::Balanced)?;
    log::info!("{}: id {} -> {}", req.dictionary, req.id, path.display());
    Ok(report_for(req, &path, &comp, None, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aruco_targets_dict::{identify_marker, DictionaryName};

    #[test]
    fn generate_marker_writes_the_documented_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let req = MarkerRequest::new(DictionaryName::Dict4x4_50, 0);
        let report =
            generate_marker(&req, 200, &BorderedLayout::default(), dir.path()).expect("generate");

        assert_eq!(report.path, dir.path().join("aruco_4x4-50_id0_200px.png"));
        assert_eq!((report.width, report.height), (240, 240));

        let img = image::open(&report.path).expect("open").to_luma8();
        assert_eq!(img.dimensions(), (240, 240));
        let marker = image::imageops::crop_imm(&img, 20, 20, 200, 200).to_image();
        let m = identify_marker(&marker, DictionaryName::Dict4x4_50.dictionary(), 1)
            .expect("identify");
        assert_eq!(m.id, 0);
    }

    #[test]
    fn generate_a4_writes_an_uncompressed_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let req = MarkerRequest::new(DictionaryName::Dict4x4_100, 3);
        let report =
            generate_a4(&req, 72, &A4Layout::default(), dir.path().join("sheets")).expect("a4");

        assert_eq!(
            report.path,
            dir.path().join("sheets").join("ArUco_4x4-100_ID03_A4_72dpi.png")
        );
        // floor(210 * 72 / 25.4), floor(297 * 72 / 25.4), floor(150 * 72 / 25.4)
        assert_eq!((report.width, report.height), (595, 841));
        assert_eq!(report.marker_px, 425);
        assert_eq!(report.dpi, Some(72));
        assert!(report.file_bytes > u64::from(report.width) * u64::from(report.height) * 3);
    }

    #[test]
    fn unknown_id_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let req = MarkerRequest::new(DictionaryName::Dict4x4_100, 100);
        assert!(generate_marker(&req, 200, &BorderedLayout::default(), dir.path()).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }
}
