//! Low-discrepancy jitter sequence for sub-pixel sampling.
//!
//! The x and y channels come from independent radix-2 and radix-3 Halton
//! sequences, giving a repeating set of offsets that covers the pixel more
//! evenly than random sampling.

use glam::Vec2;

use crate::config::{HALTON_INDEX_MASK, JITTER_PERIOD};

/// Halton sequence value in `[0, 1)` for the given index and radix.
///
/// Pure rational arithmetic in `f32`; the same inputs always produce the
/// same bits.
pub fn halton(index: u32, radix: u32) -> f32 {
    let mut result = 0.0f32;
    let mut fraction = 1.0 / radix as f32;
    let mut i = index;
    while i > 0 {
        result += (i % radix) as f32 * fraction;
        i /= radix;
        fraction /= radix as f32;
    }
    result
}

/// Repeating 2D jitter sequence of period [`JITTER_PERIOD`].
#[derive(Debug, Default)]
pub struct JitterSequence {
    sample_index: u32,
}

impl JitterSequence {
    pub fn new() -> Self {
        Self { sample_index: 0 }
    }

    /// Draws the next offset and advances the counter.
    ///
    /// The index is folded through [`HALTON_INDEX_MASK`] before evaluation,
    /// which keeps the Halton loop bounded for periods up to 1024.
    pub fn next(&mut self) -> Vec2 {
        let index = self.sample_index & HALTON_INDEX_MASK;
        let offset = Vec2::new(halton(index, 2), halton(index, 3));
        self.sample_index += 1;
        if self.sample_index >= JITTER_PERIOD {
            self.sample_index = 0;
        }
        offset
    }

    /// Restarts the sequence from the first sample.
    pub fn reset(&mut self) {
        self.sample_index = 0;
    }

    /// Position within the repeating window, always in `[0, JITTER_PERIOD)`.
    pub fn sample_index(&self) -> u32 {
        self.sample_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halton_radix_2_known_values() {
        // 1/2, 1/4, 3/4, 1/8, ...
        assert!((halton(1, 2) - 0.5).abs() < 1e-6);
        assert!((halton(2, 2) - 0.25).abs() < 1e-6);
        assert!((halton(3, 2) - 0.75).abs() < 1e-6);
        assert!((halton(4, 2) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_halton_radix_3_known_values() {
        // 1/3, 2/3, 1/9, 4/9, ...
        assert!((halton(1, 3) - 1.0 / 3.0).abs() < 1e-6);
        assert!((halton(2, 3) - 2.0 / 3.0).abs() < 1e-6);
        assert!((halton(3, 3) - 1.0 / 9.0).abs() < 1e-6);
        assert!((halton(4, 3) - 4.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_halton_stays_in_unit_interval() {
        for radix in [2u32, 3] {
            for index in 0..4096u32 {
                let value = halton(index, radix);
                assert!(
                    (0.0..1.0).contains(&value),
                    "halton({index}, {radix}) = {value}"
                );
            }
        }
    }

    #[test]
    fn test_halton_is_bit_reproducible() {
        for index in 0..256u32 {
            assert_eq!(halton(index, 2).to_bits(), halton(index, 2).to_bits());
            assert_eq!(halton(index, 3).to_bits(), halton(index, 3).to_bits());
        }
    }

    #[test]
    fn test_sample_index_wraps_at_period() {
        let mut sequence = JitterSequence::new();
        for n in 1..=3 * JITTER_PERIOD {
            sequence.next();
            assert_eq!(sequence.sample_index(), n % JITTER_PERIOD);
        }
    }

    #[test]
    fn test_sequence_repeats_after_period() {
        let mut sequence = JitterSequence::new();
        let first = sequence.next();
        for _ in 1..JITTER_PERIOD {
            sequence.next();
        }
        let ninth = sequence.next();
        assert_eq!(first, ninth, "cycle of {JITTER_PERIOD} should repeat exactly");
    }

    #[test]
    fn test_reset_restarts_the_sequence() {
        let mut sequence = JitterSequence::new();
        let first = sequence.next();
        sequence.next();
        sequence.next();
        sequence.reset();
        assert_eq!(sequence.sample_index(), 0);
        assert_eq!(sequence.next(), first);
    }
}
