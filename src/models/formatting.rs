use crate::utils::bits::to_binary_string;
use std::fmt;
use std::str::FromStr;

/// Error correction level
///
/// The 2-bit codes are fixed by the QR format and are not in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0b01,
    /// Medium (~15% recovery capacity)
    M = 0b00,
    /// Quartile (~25% recovery capacity)
    Q = 0b11,
    /// High (~30% recovery capacity)
    H = 0b10,
}

impl ECLevel {
    /// All levels, lowest recovery capacity first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Get the 2-bit code of this level
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Get error correction level from bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }
}

impl FromStr for ECLevel {
    type Err = ParseFormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(ParseFormattingError::UnknownLevel(s.to_string())),
        }
    }
}

/// Mask pattern `a` through `h` (indices 000 to 111)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    A = 0,
    /// i % 2 == 0
    B = 1,
    /// j % 3 == 0
    C = 2,
    /// (i + j) % 3 == 0
    D = 3,
    /// (i/2 + j/3) % 2 == 0
    E = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    F = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    G = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    H = 7,
}

impl MaskPattern {
    /// All patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::A,
        MaskPattern::B,
        MaskPattern::C,
        MaskPattern::D,
        MaskPattern::E,
        MaskPattern::F,
        MaskPattern::G,
        MaskPattern::H,
    ];

    /// Get the 3-bit index of this pattern
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Check if module at (i, j) should be masked
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::A => (i + j) % 2 == 0,
            MaskPattern::B => i % 2 == 0,
            MaskPattern::C => j % 3 == 0,
            MaskPattern::D => (i + j) % 3 == 0,
            MaskPattern::E => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::F => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::G => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::H => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

impl FromStr for MaskPattern {
    type Err = ParseFormattingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ 'a'..='h'), None) => Ok(Self::ALL[(c as u8 - b'a') as usize]),
            _ => Err(ParseFormattingError::UnknownMask(s.to_string())),
        }
    }
}

/// Formatting information: error correction level and mask pattern
///
/// Packed as a 5-bit code:
/// ```text
/// |  4 -- 3  | 2 -- 1 -- 0 |
/// | EC level | mask index  |
/// ```
/// Level M with mask `d` packs to `0b00011`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Formatting {
    /// Error correction level
    pub ecl: ECLevel,
    /// Mask pattern
    pub mask: MaskPattern,
}

impl Formatting {
    /// Create formatting information from its two fields
    pub const fn new(ecl: ECLevel, mask: MaskPattern) -> Self {
        Self { ecl, mask }
    }

    /// Packed 5-bit code, always in `0..=31`
    pub const fn code(&self) -> u8 {
        (self.ecl.bits() << 3) | self.mask.index()
    }

    /// Unpack a 5-bit code; `None` above 31
    pub fn from_code(code: u8) -> Option<Self> {
        if code > 0x1F {
            return None;
        }
        let ecl = ECLevel::from_bits(code >> 3)?;
        let mask = MaskPattern::from_index(code & 0x07)?;
        Some(Self { ecl, mask })
    }

    /// Encode into the 15-bit format codeword
    pub fn encode(&self) -> u16 {
        crate::decoder::bch::encode(self.code())
    }
}

impl From<Formatting> for u8 {
    fn from(formatting: Formatting) -> u8 {
        formatting.code()
    }
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_binary_string(self.code() as u16, 5))
    }
}

/// Failure to parse a level or mask name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFormattingError {
    /// Not one of `L`, `M`, `Q`, `H`
    UnknownLevel(String),
    /// Not one of `a` through `h`
    UnknownMask(String),
}

impl fmt::Display for ParseFormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFormattingError::UnknownLevel(s) => {
                write!(f, "unknown error correction level '{}' (expected L, M, Q or H)", s)
            }
            ParseFormattingError::UnknownMask(s) => {
                write!(f, "unknown mask pattern '{}' (expected a-h)", s)
            }
        }
    }
}

impl std::error::Error for ParseFormattingError {}
