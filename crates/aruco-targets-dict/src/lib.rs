//! ArUco marker dictionaries and rasterization.
//!
//! This crate focuses on:
//! - the embedded OpenCV `DICT_4X4_50` and `DICT_4X4_100` tables,
//! - drawing a marker id into a grayscale image,
//! - reading a rendered marker back and matching it against its dictionary.
//!
//! It does **not** compose pages or write files; see `aruco-targets-print`.

pub mod builtins;
mod dictionary;
mod matcher;
mod name;
mod render;

pub use dictionary::Dictionary;
pub use matcher::{find_code, rotate_code, rotations, Match};
pub use name::{DictionaryError, DictionaryName};
pub use render::{draw_marker, identify_marker, read_marker_bits, MarkerError};
