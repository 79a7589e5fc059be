//! Bulk decoding and code-wide properties, parallelized with rayon
use super::bch::{self, MESSAGE_COUNT};
use super::config;
use crate::debug::debug_log;
use crate::models::DecodeResult;
use crate::utils::bits::hamming_distance;
use rayon::prelude::*;

/// Decode every word; output order follows input order.
///
/// Batches at or above `BCH_PARALLEL_MIN_BATCH` run on the rayon pool.
pub fn decode_batch(words: &[u16]) -> Vec<DecodeResult> {
    let parallel = words.len() >= config::parallel_min_batch();
    debug_log!("decode_batch: {} words, parallel={}", words.len(), parallel);

    if parallel {
        words.par_iter().map(|&w| bch::decode(w)).collect()
    } else {
        words.iter().map(|&w| bch::decode(w)).collect()
    }
}

/// Decode every word on the rayon pool regardless of batch size
pub fn decode_batch_parallel(words: &[u16]) -> Vec<DecodeResult> {
    words.par_iter().map(|&w| bch::decode(w)).collect()
}

/// Minimum Hamming distance between any two distinct codewords
pub fn minimum_distance() -> u32 {
    let table = bch::codewords();
    (0..MESSAGE_COUNT)
        .into_par_iter()
        .flat_map_iter(|i| ((i + 1)..MESSAGE_COUNT).map(move |j| (i, j)))
        .map(|(i, j)| hamming_distance(table[i], table[j]))
        .min()
        .unwrap_or(0)
}
