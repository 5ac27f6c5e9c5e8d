//! Runtime knobs read once from environment variables.

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_BATCH_THRESHOLD: OnceLock<usize> = OnceLock::new();

/// Batch size at which `KdTree::nearest_batch` fans out across the rayon pool.
pub fn parallel_batch_threshold() -> usize {
    *PARALLEL_BATCH_THRESHOLD
        .get_or_init(|| parse_env_usize("KD_PARALLEL_BATCH_THRESHOLD", 1024).max(1))
}

static AUTOCOMPLETE_LIMIT: OnceLock<usize> = OnceLock::new();

/// Default number of matches printed by the `autocomplete` CLI command.
pub fn autocomplete_limit() -> usize {
    *AUTOCOMPLETE_LIMIT
        .get_or_init(|| parse_env_usize("KD_AUTOCOMPLETE_LIMIT", 10).clamp(1, 1000))
}
