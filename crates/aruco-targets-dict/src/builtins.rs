//! Embedded built-in dictionaries.
//!
//! The source of truth lives in `aruco-targets-dict/data/*_CODES.json`: the
//! OpenCV `DICT_4X4_50` and `DICT_4X4_100` tables, black = 1.

#![allow(clippy::unreadable_literal, non_upper_case_globals)]

use crate::{Dictionary, DictionaryName};

include!(concat!(env!("OUT_DIR"), "/builtins.rs"));

/// The dictionary for a validated name.
pub(crate) fn resolve(name: DictionaryName) -> &'static Dictionary {
    match name {
        DictionaryName::Dict4x4_50 => &DICT_4X4_50,
        DictionaryName::Dict4x4_100 => &DICT_4X4_100,
    }
}
