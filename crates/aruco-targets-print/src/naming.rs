//! Deterministic output file names.

use aruco_targets_dict::DictionaryName;

/// `ArUco_<slug>_ID<id:02>_A4_<dpi>dpi.png`
pub fn a4_file_name(dictionary: DictionaryName, id: u32, dpi: u32) -> String {
    format!("ArUco_{}_ID{id:02}_A4_{dpi}dpi.png", dictionary.slug())
}

/// `aruco_<slug>_id<id>_<size>px.png`
pub fn marker_file_name(dictionary: DictionaryName, id: u32, size: u32) -> String {
    format!("aruco_{}_id{id}_{size}px.png", dictionary.slug())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_names_zero_pad_the_id() {
        assert_eq!(
            a4_file_name(DictionaryName::Dict4x4_50, 0, 300),
            "ArUco_4x4-50_ID00_A4_300dpi.png"
        );
        assert_eq!(
            a4_file_name(DictionaryName::Dict4x4_100, 42, 600),
            "ArUco_4x4-100_ID42_A4_600dpi.png"
        );
        assert_eq!(
            a4_file_name(DictionaryName::Dict4x4_100, 99, 150),
            "ArUco_4x4-100_ID99_A4_150dpi.png"
        );
    }

    #[test]
    fn marker_names_embed_slug_id_and_size() {
        assert_eq!(
            marker_file_name(DictionaryName::Dict4x4_50, 0, 200),
            "aruco_4x4-50_id0_200px.png"
        );
        assert_eq!(
            marker_file_name(DictionaryName::Dict4x4_100, 17, 512),
            "aruco_4x4-100_id17_512px.png"
        );
    }
}
