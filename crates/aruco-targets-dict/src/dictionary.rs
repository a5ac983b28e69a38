//! Dictionary metadata and packed marker codes.

/// A fixed ArUco dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dictionary {
    /// Canonical name, e.g. `DICT_4X4_50`.
    pub name: &'static str,
    /// Marker side length (number of inner bits per side).
    pub marker_size: usize,
    /// Maximum error-correcting Hamming distance supported by the dictionary.
    pub max_correction_bits: u8,
    /// One `u64` per marker id, encoding the inner `marker_size × marker_size` bits.
    ///
    /// Bits are stored in row-major order (`idx = y * N + x`) with **black = 1**.
    pub codes: &'static [u64],
}

impl Dictionary {
    /// Number of marker ids in the dictionary.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.codes.len()
    }

    /// Code for `id`, if the id exists.
    #[inline]
    pub fn code(&self, id: u32) -> Option<u64> {
        self.codes.get(id as usize).copied()
    }

    /// Whether inner cell `(x, y)` of marker `id` is black.
    pub fn is_black(&self, id: u32, x: usize, y: usize) -> Option<bool> {
        if x >= self.marker_size || y >= self.marker_size {
            return None;
        }
        let code = self.code(id)?;
        Some((code >> (y * self.marker_size + x)) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::builtins::DICT_4X4_50;

    #[test]
    fn cells_follow_row_major_black_bits() {
        // OpenCV id 0, first row printed white, black, white, white.
        assert_eq!(DICT_4X4_50.is_black(0, 0, 0), Some(false));
        assert_eq!(DICT_4X4_50.is_black(0, 1, 0), Some(true));
        assert_eq!(DICT_4X4_50.is_black(0, 4, 0), None);
        assert_eq!(DICT_4X4_50.is_black(50, 0, 0), None);
        assert_eq!(DICT_4X4_50.code(49), DICT_4X4_50.codes.last().copied());
    }
}
