//! Utility functions for the format codec
//!
//! This module provides helpers shared by the codec and its callers:
//! - Bit counting and zero-padded binary rendering
//! - Bit-flip corruption with an injectable position source

pub mod bits;
pub mod corruption;
