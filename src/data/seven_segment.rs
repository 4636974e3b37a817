//! Built-in training set: the ten decimal digits and their seven-segment
//! encodings.
//!
//! Segment order is `[a, b, c, d, e, f, g]`:
//!
//! ```text
//!   aaa
//!  f   b
//!   ggg
//!  e   c
//!   ddd
//! ```

use crate::{data::dataset::Dataset, error::Result};

pub const INPUT_BITS: usize = 4;
pub const SEGMENTS: usize = 7;

/// Lit segments for digits 0 through 9.
pub const SEGMENT_TABLE: [[u8; SEGMENTS]; 10] = [
    [1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 0, 0, 0, 0],
    [1, 1, 0, 1, 1, 0, 1],
    [1, 1, 1, 1, 0, 0, 1],
    [0, 1, 1, 0, 0, 1, 1],
    [1, 0, 1, 1, 0, 1, 1],
    [1, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 1, 1],
];

/// Big-endian binary digits of `value`, `width` bits wide. Positions above
/// the width of `usize` are zero.
pub fn encode_bits(value: usize, width: usize) -> Vec<f64> {
    (0..width)
        .rev()
        .map(|bit| {
            let shifted = u32::try_from(bit).ok().and_then(|b| value.checked_shr(b)).unwrap_or(0);
            (shifted & 1) as f64
        })
        .collect()
}

/// The 10-sample digit dataset: 4-bit input, 7-segment target.
pub fn digits() -> Result<Dataset> {
    let inputs: Vec<Vec<f64>> = (0..SEGMENT_TABLE.len())
        .map(|n| encode_bits(n, INPUT_BITS))
        .collect();
    let targets: Vec<Vec<f64>> = SEGMENT_TABLE
        .iter()
        .map(|row| row.iter().map(|&s| s as f64).collect())
        .collect();
    Dataset::new(&inputs, &targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_big_endian() {
        assert_eq!(encode_bits(0, 4), vec![0.0, 0.0, 0.0, 0.0]);
        assert_eq!(encode_bits(1, 4), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(encode_bits(9, 4), vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn wide_encodings_pad_with_leading_zeros() {
        let bits = encode_bits(5, 70);
        assert_eq!(bits.len(), 70);
        assert_eq!(&bits[67..], &[1.0, 0.0, 1.0]);
        assert!(bits[..67].iter().all(|&b| b == 0.0));
        assert_eq!(encode_bits(usize::MAX, 0), Vec::<f64>::new());
    }

    #[test]
    fn digit_set_has_ten_paired_rows() {
        let ds = digits().unwrap();
        assert_eq!(ds.len(), 10);
        assert_eq!(ds.input_size(), INPUT_BITS);
        assert_eq!(ds.target_size(), SEGMENTS);
        assert_eq!(ds.inputs().row(6), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(ds.targets().row(0), &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
        assert_eq!(ds.targets().row(1), &[0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn eight_lights_every_segment() {
        assert!(SEGMENT_TABLE[8].iter().all(|&s| s == 1));
    }
}
