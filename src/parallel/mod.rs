//! Parallel file fan-out for scanner checks
//!
//! Per-file work is mapped across a bounded rayon pool when
//! `performance.parallel` is enabled. Results come back in input order,
//! so findings ordering and the aggregate blocking decision are
//! identical to sequential execution.

use crate::config::PerformanceConfig;
use rayon::prelude::*;

/// Worker count for a batch: the configured cap bounded by the CPU
/// count, never more workers than work items (0 = number of CPUs).
pub fn worker_count(max_workers: usize, work_count: usize) -> usize {
    let cpus = num_cpus::get();
    let cap = if max_workers == 0 { cpus } else { max_workers.min(cpus) };
    cap.clamp(1, work_count.max(1))
}

/// Map `op` over `files`, in parallel when configured and worthwhile.
/// Output order always matches input order.
pub fn map_files<T, F>(files: &[String], perf: &PerformanceConfig, op: F) -> Vec<T>
where
    T: Send,
    F: Fn(&str) -> T + Sync,
{
    if !perf.parallel || files.len() < 2 {
        return files.iter().map(|f| op(f)).collect();
    }

    let workers = worker_count(perf.max_workers, files.len());
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| files.par_iter().map(|f| op(f)).collect()),
        Err(e) => {
            // Thread pool creation is an infrastructure problem, not a
            // check failure; fall back to sequential scanning.
            tracing::warn!("falling back to sequential scanning: {e}");
            files.iter().map(|f| op(f)).collect()
        }
    }
}
