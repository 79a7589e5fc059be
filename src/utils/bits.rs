//! Bit counting and binary text rendering for small words

/// Number of set bits (Hamming weight)
#[inline]
pub fn popcount(x: u16) -> u32 {
    x.count_ones()
}

/// Number of differing bits between two words
#[inline]
pub fn hamming_distance(a: u16, b: u16) -> u32 {
    popcount(a ^ b)
}

/// Left-pad a binary digit string with '0' up to `width` characters.
/// Longer inputs are returned unchanged.
pub fn zero_pad(digits: &str, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Render `value` in binary, zero-padded to `width` digits
pub fn to_binary_string(value: u16, width: usize) -> String {
    zero_pad(&format!("{:b}", value), width)
}
