use super::Formatting;
use crate::utils::bits::to_binary_string;
use std::fmt;

/// Outcome of nearest-codeword decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeResult {
    /// No single message is uniquely closest to the received word
    Failure,
    /// The unique closest message (5-bit, `0..=31`)
    Success(u8),
}

impl DecodeResult {
    /// True when a message was recovered
    pub fn is_success(&self) -> bool {
        matches!(self, DecodeResult::Success(_))
    }

    /// Recovered message, if any
    pub fn message(&self) -> Option<u8> {
        match self {
            DecodeResult::Success(message) => Some(*message),
            DecodeResult::Failure => None,
        }
    }

    /// Recovered message unpacked into level and mask
    pub fn formatting(&self) -> Option<Formatting> {
        self.message().and_then(Formatting::from_code)
    }
}

impl From<DecodeResult> for Option<u8> {
    fn from(result: DecodeResult) -> Self {
        result.message()
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeResult::Failure => f.write_str("Not able to decode"),
            DecodeResult::Success(message) => write!(
                f,
                "The decoded format is {}",
                to_binary_string(*message as u16, 5)
            ),
        }
    }
}
