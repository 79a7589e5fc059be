//! Format information codec
//!
//! This module contains the BCH(15,5) logic protecting QR format info:
//! - Generator remainder, encoding and validation
//! - Nearest-codeword decoding by exhaustive search
//! - Typed format info extraction and batch decoding

/// Bulk decoding on the rayon pool
pub mod batch;
/// BCH(15,5) encode, validate and decode
pub mod bch;
pub mod config;
/// Format information decoding (mask pattern, EC level)
pub mod format;
