//! BCH(15,5) codec for QR format information
//!
//! A codeword is the 5-bit message in bits 14..10 followed by the 10-bit
//! remainder of `message * x^10` divided by the generator polynomial
//! x^10 + x^8 + x^5 + x^4 + x^2 + x + 1. Only bits 0..=14 are meaningful.
//! Inputs are masked at the boundary: messages to 5 bits, words to 15 bits.

use crate::debug::debug_log;
use crate::models::{DecodeResult, Formatting};
use crate::utils::bits::{hamming_distance, to_binary_string};

/// Generator polynomial, degree 10
pub const GENERATOR: u16 = 0b101_0011_0111;
/// Message bits per codeword
pub const DATA_BITS: u32 = 5;
/// Error correction bits per codeword
pub const ECC_BITS: u32 = 10;
/// Total codeword length
pub const CODEWORD_BITS: u32 = DATA_BITS + ECC_BITS;
/// Meaningful bits of a codeword
pub const CODEWORD_MASK: u16 = (1 << CODEWORD_BITS) - 1;
/// Meaningful bits of a message
pub const MESSAGE_MASK: u8 = (1 << DATA_BITS) - 1;
/// Size of the message space
pub const MESSAGE_COUNT: usize = 1 << DATA_BITS;

static CODEWORDS: [u16; MESSAGE_COUNT] = build_codewords();

const fn build_codewords() -> [u16; MESSAGE_COUNT] {
    let mut table = [0u16; MESSAGE_COUNT];
    let mut message = 0;
    while message < MESSAGE_COUNT {
        table[message] = encode(message as u8);
        message += 1;
    }
    table
}

/// Remainder of `value` divided by [`GENERATOR`] over GF(2).
///
/// Zero iff `value` is a valid codeword. The result always fits in 10 bits.
pub const fn remainder(value: u16) -> u16 {
    let mut acc = value & CODEWORD_MASK;
    let mut shift = DATA_BITS;
    while shift > 0 {
        shift -= 1;
        // Each step clears bit (shift + 10) of the running remainder.
        if acc & (1 << (shift + ECC_BITS)) != 0 {
            acc ^= GENERATOR << shift;
        }
    }
    acc
}

/// Encode a 5-bit message into its 15-bit codeword
pub const fn encode(message: u8) -> u16 {
    let shifted = ((message & MESSAGE_MASK) as u16) << ECC_BITS;
    shifted ^ remainder(shifted)
}

/// Encode level and mask into the 15-bit codeword
pub fn encode_formatting(formatting: &Formatting) -> u16 {
    codeword(formatting.code())
}

/// Precomputed codeword for a 5-bit message
#[inline]
pub fn codeword(message: u8) -> u16 {
    CODEWORDS[(message & MESSAGE_MASK) as usize]
}

/// All 32 codewords, indexed by message
pub fn codewords() -> &'static [u16; MESSAGE_COUNT] {
    &CODEWORDS
}

/// Check whether `codeword` is uncorrupted
pub const fn is_valid(codeword: u16) -> bool {
    remainder(codeword) == 0
}

/// Decode a received word to the message with the nearest codeword
pub fn decode(received: u16) -> DecodeResult {
    nearest(received).0
}

/// Decode and also report the smallest distance seen to any codeword.
///
/// Candidates are scanned in message order. A strictly closer candidate
/// becomes the answer; a candidate tied with the current minimum turns the
/// answer into `Failure` without lowering the minimum, so a later strictly
/// closer candidate can still win.
pub fn nearest(received: u16) -> (DecodeResult, u32) {
    let received = received & CODEWORD_MASK;
    let mut best = DecodeResult::Failure;
    let mut min_distance = CODEWORD_BITS;

    for (message, &candidate) in CODEWORDS.iter().enumerate() {
        let distance = hamming_distance(received, candidate);
        if distance < min_distance {
            min_distance = distance;
            best = DecodeResult::Success(message as u8);
        } else if distance == min_distance {
            debug_log!(
                "decode {}: tie at distance {} with message {:05b}",
                to_binary_string(received, 15),
                distance,
                message
            );
            best = DecodeResult::Failure;
        }
    }

    debug_log!(
        "decode {}: {:?} at distance {}",
        to_binary_string(received, 15),
        best,
        min_distance
    );

    (best, min_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ECLevel, MaskPattern};
    use crate::utils::bits::popcount;

    #[test]
    fn test_generator_value() {
        assert_eq!(GENERATOR, 1335);
        assert_eq!(CODEWORD_MASK, 0x7FFF);
        assert_eq!(MESSAGE_MASK, 0x1F);
    }

    #[test]
    fn test_encode_known_codeword() {
        assert_eq!(encode(3), 3929);
        assert_eq!(to_binary_string(encode(3), 15), "000111101011001");
        let f = Formatting::new(ECLevel::M, MaskPattern::D);
        assert_eq!(encode_formatting(&f), 3929);
        assert_eq!(f.encode(), 3929);
    }

    #[test]
    fn test_encode_is_systematic() {
        for m in 0..MESSAGE_COUNT as u8 {
            assert_eq!(encode(m) >> ECC_BITS, m as u16);
            assert_eq!(codeword(m), encode(m));
        }
    }

    #[test]
    fn test_remainder_of_codewords_is_zero() {
        for m in 0..MESSAGE_COUNT as u8 {
            assert_eq!(remainder(encode(m)), 0, "message {}", m);
            assert!(is_valid(encode(m)));
        }
    }

    #[test]
    fn test_remainder_fits_ten_bits() {
        for value in 0..=CODEWORD_MASK {
            assert!(remainder(value) < (1 << ECC_BITS));
        }
    }

    #[test]
    fn test_single_flip_invalidates() {
        for &cw in codewords() {
            for bit in 0..CODEWORD_BITS {
                assert!(!is_valid(cw ^ (1 << bit)));
            }
        }
    }

    #[test]
    fn test_decode_clean_and_single_error() {
        assert_eq!(decode(3929), DecodeResult::Success(3));
        assert_eq!(decode(3933), DecodeResult::Success(3));
        assert!(!is_valid(3933));
    }

    #[test]
    fn test_four_bit_error_can_fail() {
        // Codeword 0 with bits 0..=3 flipped sits at distance 4 from
        // several codewords.
        assert_eq!(decode(0b1111), DecodeResult::Failure);
        assert_eq!(nearest(0b1111), (DecodeResult::Failure, 4));
    }

    #[test]
    fn test_tie_then_strictly_closer_wins() {
        // Messages 0, 4 and 11 are all at distance 4 from 139; message 16
        // comes later at distance 3 and overrides the tie.
        assert_eq!(popcount(139 ^ encode(0)), 4);
        assert_eq!(popcount(139 ^ encode(4)), 4);
        assert_eq!(popcount(139 ^ encode(16)), 3);
        assert_eq!(nearest(139), (DecodeResult::Success(16), 3));
    }

    #[test]
    fn test_high_bits_are_ignored() {
        assert_eq!(decode(3929 | 0x8000), DecodeResult::Success(3));
        assert!(is_valid(3929 | 0x8000));
        assert_eq!(encode(3 | 0xE0), 3929);
    }
}
