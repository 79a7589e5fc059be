//! Helpers shared by the command-line tools

use crate::decoder::bch;
use crate::models::{DecodeResult, Formatting};
use crate::utils::bits::to_binary_string;
use crate::utils::corruption::{BitIndexSource, flip_random_bit};
use std::env;
use std::fmt;

/// Read `BCH_DEMO_SEED` to make the demo's bit flip reproducible.
pub fn demo_seed_from_env() -> Option<u64> {
    env::var("BCH_DEMO_SEED")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Parse a word given as decimal, `0b` binary or `0x` hex.
pub fn parse_word(text: &str) -> Option<u16> {
    let text = text.trim().replace('_', "");
    let lower = text.to_ascii_lowercase();
    if let Some(bin) = lower.strip_prefix("0b") {
        u16::from_str_radix(bin, 2).ok()
    } else if let Some(hex) = lower.strip_prefix("0x") {
        u16::from_str_radix(hex, 16).ok()
    } else {
        lower.parse::<u16>().ok()
    }
}

/// One encode, corrupt, decode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    /// Input formatting information
    pub formatting: Formatting,
    /// Encoded codeword
    pub codeword: u16,
    /// Codeword after a single bit flip
    pub corrupted: u16,
    /// Decode result for the corrupted word
    pub result: DecodeResult,
}

/// Encode `formatting`, flip one bit chosen by `source`, and decode.
pub fn run_demo<S: BitIndexSource + ?Sized>(formatting: Formatting, source: &mut S) -> DemoReport {
    let codeword = formatting.encode();
    let corrupted = flip_random_bit(codeword, source);
    DemoReport {
        formatting,
        codeword,
        corrupted,
        result: bch::decode(corrupted),
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Formatting info: {}", self.formatting)?;
        writeln!(
            f,
            "Is {} valid format code? {}",
            to_binary_string(self.codeword, 15),
            bch::is_valid(self.codeword)
        )?;
        writeln!(
            f,
            "Is {} valid format code? {}",
            to_binary_string(self.corrupted, 15),
            bch::is_valid(self.corrupted)
        )?;
        write!(f, "Original formatting information is {}", self.result)
    }
}
