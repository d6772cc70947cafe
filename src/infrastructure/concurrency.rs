/// Thread pool setup for the minimizer.
/// Files are independent, so one worker per core is the default.

use anyhow::{Context, Result};
use tracing::info;

/// Worker count for a requested thread setting; `None` means every core.
pub fn worker_count(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(num_cpus::get).max(1)
}

/// Initialize the global rayon thread pool.
pub fn init_thread_pool(requested: Option<usize>) -> Result<usize> {
    let workers = worker_count(requested);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("minimizer-{}", i))
        .build_global()
        .context("Failed to initialize the global thread pool")?;

    info!(
        "Initialized thread pool: {} workers (system has {} cores)",
        workers,
        num_cpus::get()
    );

    Ok(workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count() {
        assert_eq!(worker_count(Some(3)), 3);
        assert_eq!(worker_count(Some(0)), 1);
        assert_eq!(worker_count(None), num_cpus::get().max(1));
    }
}
