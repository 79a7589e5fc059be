use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

/// Smallest batch decoded on the rayon pool
pub(crate) fn parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| parse_env_usize("BCH_PARALLEL_MIN_BATCH", 4096).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_usize_default() {
        assert_eq!(parse_env_usize("BCH_TEST_UNSET_VARIABLE", 17), 17);
    }

    #[test]
    fn test_parallel_min_batch_positive() {
        assert!(parallel_min_batch() >= 1);
    }
}
