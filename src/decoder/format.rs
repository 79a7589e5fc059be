/// Format information decoding into typed fields
use super::bch;
use crate::models::{ECLevel, Formatting, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
    /// Bits that differed from the chosen codeword
    pub corrected_bits: u32,
}

impl FormatInfo {
    /// Decode 15-bit format info, correcting up to 3 bit errors
    pub fn decode(format_bits: u16) -> Option<Self> {
        let (result, distance) = bch::nearest(format_bits);
        let formatting = result.formatting()?;

        Some(Self {
            ec_level: formatting.ecl,
            mask_pattern: formatting.mask,
            corrected_bits: distance,
        })
    }

    /// Encode level and mask into 15-bit format info
    pub fn encode(formatting: &Formatting) -> u16 {
        bch::encode_formatting(formatting)
    }

    /// Level and mask as a [`Formatting`]
    pub fn formatting(&self) -> Formatting {
        Formatting::new(self.ec_level, self.mask_pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decode_clean() {
        let info = FormatInfo::decode(3929).unwrap();
        assert_eq!(info.ec_level, ECLevel::M);
        assert_eq!(info.mask_pattern, MaskPattern::D);
        assert_eq!(info.corrected_bits, 0);
    }

    #[test]
    fn test_format_decode_reports_corrections() {
        let f = Formatting::new(ECLevel::H, MaskPattern::F);
        let corrupted = FormatInfo::encode(&f) ^ 0b100_0000_0100_0001;
        let info = FormatInfo::decode(corrupted).unwrap();
        assert_eq!(info.formatting(), f);
        assert_eq!(info.corrected_bits, 3);
    }

    #[test]
    fn test_format_decode_failure() {
        assert_eq!(FormatInfo::decode(0b1111), None);
    }
}
