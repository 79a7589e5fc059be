//! Single-bit corruption of codewords, for demos and tests
//!
//! The bit position comes from an injected [`BitIndexSource`] so callers
//! choose between real randomness and a fixed, reproducible sequence.

use crate::decoder::bch::CODEWORD_BITS;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Supplies bit positions to flip
pub trait BitIndexSource {
    /// Next bit position; values of 15 or more are reduced modulo 15 by the caller
    fn next_bit_index(&mut self) -> u8;
}

/// Uniform positions in `0..15` drawn from a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomBitIndex<R> {
    rng: R,
}

impl<R: Rng> RandomBitIndex<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBitIndex<StdRng> {
    /// Deterministic source seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandomBitIndex<ThreadRng> {
    /// Source backed by the thread-local generator
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> BitIndexSource for RandomBitIndex<R> {
    fn next_bit_index(&mut self) -> u8 {
        self.rng.random_range(0..CODEWORD_BITS as u8)
    }
}

/// Replays a fixed list of positions, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedBitIndices {
    indices: Vec<u8>,
    cursor: usize,
}

impl FixedBitIndices {
    /// An empty list always yields position 0.
    pub fn new(indices: &[u8]) -> Self {
        Self {
            indices: indices.to_vec(),
            cursor: 0,
        }
    }
}

impl BitIndexSource for FixedBitIndices {
    fn next_bit_index(&mut self) -> u8 {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor = (self.cursor + 1) % self.indices.len();
        index
    }
}

/// Flip one bit of `codeword` at a position chosen by `source`
pub fn flip_random_bit<S: BitIndexSource + ?Sized>(codeword: u16, source: &mut S) -> u16 {
    let index = source.next_bit_index() % CODEWORD_BITS as u8;
    codeword ^ (1 << index)
}

/// Flip every listed position. A position listed twice cancels out.
pub fn flip_bits(codeword: u16, positions: &[u8]) -> u16 {
    positions
        .iter()
        .fold(codeword, |word, &p| word ^ (1 << (p % CODEWORD_BITS as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bits::hamming_distance;

    #[test]
    fn test_fixed_indices_cycle() {
        let mut source = FixedBitIndices::new(&[2, 14]);
        assert_eq!(flip_random_bit(3929, &mut source), 3933);
        assert_eq!(flip_random_bit(0, &mut source), 1 << 14);
        assert_eq!(flip_random_bit(3929, &mut source), 3933);
    }

    #[test]
    fn test_empty_fixed_indices_flip_bit_zero() {
        let mut source = FixedBitIndices::new(&[]);
        assert_eq!(flip_random_bit(0, &mut source), 1);
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let mut source = FixedBitIndices::new(&[17]);
        assert_eq!(flip_random_bit(0, &mut source), 1 << 2);
    }

    #[test]
    fn test_random_flip_changes_one_bit() {
        let mut source = RandomBitIndex::seeded(7);
        for _ in 0..200 {
            let flipped = flip_random_bit(3929, &mut source);
            assert_eq!(hamming_distance(flipped, 3929), 1);
            assert!(flipped <= 0x7FFF);
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RandomBitIndex::seeded(42);
        let mut b = RandomBitIndex::seeded(42);
        for _ in 0..32 {
            assert_eq!(a.next_bit_index(), b.next_bit_index());
        }
    }

    #[test]
    fn test_flip_bits() {
        assert_eq!(flip_bits(0, &[0, 1, 2, 3]), 0b1111);
        assert_eq!(flip_bits(3929, &[2]), 3933);
        assert_eq!(flip_bits(3929, &[5, 5]), 3929);
    }
}
