use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use aruco_targets_dict::DictionaryName;

use crate::PrintError;

/// Summary of one written marker image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub dictionary: DictionaryName,
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub marker_px: u32,
    pub marker_origin: (u32, u32),
    /// Print resolution, when the image targets physical paper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
    pub file_bytes: u64,
}

impl GenerationReport {
    /// File size in MiB, as shown in status lines.
    pub fn file_mb(&self) -> f64 {
        self.file_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Write reports as a pretty JSON array.
pub fn write_reports_json(
    path: impl AsRef<Path>,
    reports: &[GenerationReport],
) -> Result<(), PrintError> {
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_survive_a_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let reports = vec![GenerationReport {
            path: "aruco_4x4-50_id0_200px.png".into(),
            dictionary: DictionaryName::Dict4x4_50,
            id: 0,
            width: 240,
            height: 240,
            marker_px: 200,
            marker_origin: (20, 20),
            dpi: None,
            file_bytes: 1 << 20,
        }];
        write_reports_json(&path, &reports).expect("write");

        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"DICT_4X4_50\""));
        assert!(!raw.contains("dpi"));
        let back: Vec<GenerationReport> = serde_json::from_str(&raw).expect("parse");
        assert_eq!(back, reports);
        assert_eq!(reports[0].file_mb(), 1.0);
    }
}
