//! Supported dictionary names and their parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Dictionary;

/// Errors returned when resolving a dictionary by name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("unsupported dictionary '{name}' (available: {available})")]
    UnknownDictionary { name: String, available: String },
    #[error("dictionary '{name}' is not bundled with this build (available: {available})")]
    NotBundled { name: String, available: String },
}

/// OpenCV dictionaries the tools recognize but do not ship tables for.
const NOT_BUNDLED: [&str; 6] = [
    "DICT_5X5_50",
    "DICT_5X5_100",
    "DICT_6X6_50",
    "DICT_6X6_100",
    "DICT_7X7_50",
    "DICT_7X7_100",
];

/// The dictionaries the tools can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DictionaryName {
    #[default]
    Dict4x4_50,
    Dict4x4_100,
}

impl DictionaryName {
    pub const ALL: [DictionaryName; 2] = [DictionaryName::Dict4x4_50, DictionaryName::Dict4x4_100];

    /// OpenCV name, e.g. `DICT_4X4_50`.
    pub fn canonical(self) -> &'static str {
        match self {
            DictionaryName::Dict4x4_50 => "DICT_4X4_50",
            DictionaryName::Dict4x4_100 => "DICT_4X4_100",
        }
    }

    /// Short form used in file names, e.g. `4x4-50`.
    pub fn slug(self) -> String {
        format!("{0}x{0}-{1}", self.marker_size(), self.capacity())
    }

    /// Inner bits per marker side.
    pub fn marker_size(self) -> usize {
        self.dictionary().marker_size
    }

    /// Number of marker ids.
    pub fn capacity(self) -> usize {
        self.dictionary().capacity()
    }

    /// The built-in dictionary behind this name.
    pub fn dictionary(self) -> &'static Dictionary {
        crate::builtins::resolve(self)
    }

    /// Comma-separated canonical names, for error messages and help text.
    pub fn available() -> String {
        DictionaryName::ALL
            .iter()
            .map(|n| n.canonical())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DictionaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// `4x4-50 class` -> `4X4_50`: uppercase, `-` to `_`, no `DICT_` prefix or
/// trailing `class` word.
fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_ascii_uppercase().replace('-', "_");
    let bare = upper.strip_suffix("CLASS").map_or(upper.as_str(), str::trim_end);
    bare.strip_prefix("DICT_").unwrap_or(bare).to_string()
}

impl FromStr for DictionaryName {
    type Err = DictionaryError;

    /// Accepts `DICT_4X4_50`, `4X4_50`, `4x4-50`, `4x4-50 class` and similar,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        let bare = |canonical: &'static str| canonical.strip_prefix("DICT_") == Some(norm.as_str());
        if let Some(name) = DictionaryName::ALL.into_iter().find(|n| bare(n.canonical())) {
            return Ok(name);
        }
        if NOT_BUNDLED.into_iter().any(bare) {
            return Err(DictionaryError::NotBundled {
                name: s.to_string(),
                available: DictionaryName::available(),
            });
        }
        Err(DictionaryError::UnknownDictionary {
            name: s.to_string(),
            available: DictionaryName::available(),
        })
    }
}

impl TryFrom<String> for DictionaryName {
    type Error = DictionaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DictionaryName> for String {
    fn from(value: DictionaryName) -> Self {
        value.canonical().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_spellings() {
        for s in ["DICT_4X4_50", "dict_4x4_50", "4X4_50", "4x4-50", " 4x4_50 ", "4x4-50 class"] {
            assert_eq!(s.parse::<DictionaryName>(), Ok(DictionaryName::Dict4x4_50), "{s}");
        }
        assert_eq!(
            "4x4-100".parse::<DictionaryName>(),
            Ok(DictionaryName::Dict4x4_100)
        );
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = "DICT_4X4_1000".parse::<DictionaryName>().unwrap_err();
        assert!(matches!(err, DictionaryError::UnknownDictionary { .. }));
        let msg = err.to_string();
        assert!(msg.contains("DICT_4X4_1000"));
        for name in DictionaryName::ALL {
            assert!(msg.contains(name.canonical()), "{msg}");
        }
        assert!("class".parse::<DictionaryName>().is_err());
    }

    #[test]
    fn larger_opencv_grids_are_reported_as_not_bundled() {
        for s in ["DICT_6X6_50", "5x5-100", "7X7_100"] {
            let err = s.parse::<DictionaryName>().unwrap_err();
            assert!(matches!(err, DictionaryError::NotBundled { .. }), "{s}");
            assert!(err.to_string().contains("DICT_4X4_100"));
        }
    }

    #[test]
    fn slug_and_display() {
        assert_eq!(DictionaryName::Dict4x4_50.slug(), "4x4-50");
        assert_eq!(DictionaryName::Dict4x4_100.slug(), "4x4-100");
        assert_eq!(DictionaryName::Dict4x4_100.to_string(), "DICT_4X4_100");
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&DictionaryName::Dict4x4_100).expect("serialize");
        assert_eq!(json, "\"DICT_4X4_100\"");
        let back: DictionaryName = serde_json::from_str("\"4x4-100\"").expect("deserialize");
        assert_eq!(back, DictionaryName::Dict4x4_100);
        assert!(serde_json::from_str::<DictionaryName>("\"DICT_6X6_50\"").is_err());
    }
}
