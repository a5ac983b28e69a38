//! Rotation helpers and exact lookup of observed codes.

use crate::Dictionary;

/// Where an observed code sits in a dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Marker id in the dictionary.
    pub id: u32,
    /// Clockwise quarter turns with `observed == rotate_code(code(id), n, rotation)`.
    pub rotation: u8,
}

/// Rotate a row-major `n × n` code clockwise by `quarter_turns`.
pub fn rotate_code(code: u64, n: usize, quarter_turns: u8) -> u64 {
    (0..quarter_turns & 3).fold(code, |c, _| rotate_once(c, n))
}

// Cell (x, y) moves to (n - 1 - y, x).
fn rotate_once(code: u64, n: usize) -> u64 {
    let mut out = 0u64;
    for y in 0..n {
        for x in 0..n {
            if (code >> (y * n + x)) & 1 == 1 {
                out |= 1 << (x * n + (n - 1 - y));
            }
        }
    }
    out
}

/// A code and its three clockwise rotations.
#[inline]
pub fn rotations(code: u64, n: usize) -> [u64; 4] {
    let r1 = rotate_once(code, n);
    let r2 = rotate_once(r1, n);
    [code, r1, r2, rotate_once(r2, n)]
}

/// Find the id and rotation of `observed`, accepting exact matches only.
pub fn find_code(dict: &Dictionary, observed: u64) -> Option<Match> {
    dict.codes.iter().enumerate().find_map(|(id, &code)| {
        rotations(code, dict.marker_size)
            .iter()
            .position(|&r| r == observed)
            .map(|rot| Match {
                id: id as u32,
                rotation: rot as u8,
            })
    })
}
