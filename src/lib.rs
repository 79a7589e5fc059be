//! qr_format_bch - BCH(15,5) codec for QR code format information
//!
//! Protects the 5-bit formatting field (error correction level + mask
//! pattern) with a 10-bit BCH suffix. Any 3 bit errors in a 15-bit word
//! are corrected by nearest-codeword search over all 32 messages.
//!
//! ```
//! use qr_format_bch::{DecodeResult, ECLevel, Formatting, MaskPattern, decode, encode};
//!
//! let formatting = Formatting::new(ECLevel::M, MaskPattern::D);
//! let codeword = encode(formatting.code());
//! assert_eq!(codeword, 3929);
//! assert_eq!(decode(codeword ^ 0b100), DecodeResult::Success(3));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Format codec (generator remainder, encode, validate, decode)
pub mod decoder;
/// Core data structures (Formatting, ECLevel, MaskPattern, DecodeResult)
pub mod models;
/// Helpers for the command-line tools
pub mod tools;
/// Utility functions (bit counting, binary text, corruption)
pub mod utils;

pub use decoder::batch::{decode_batch, minimum_distance};
pub use decoder::bch::{GENERATOR, decode, encode, encode_formatting, is_valid, remainder};
pub use decoder::format::FormatInfo;
pub use models::{DecodeResult, ECLevel, Formatting, MaskPattern, ParseFormattingError};
pub use utils::bits::{popcount, to_binary_string, zero_pad};
pub use utils::corruption::{BitIndexSource, FixedBitIndices, RandomBitIndex, flip_random_bit};
