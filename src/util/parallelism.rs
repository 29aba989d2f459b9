//! Host parallelism detection

/// Get the number of logical CPU cores available on the system
///
/// This is the default worker count when none is configured.
///
/// # Example
///
/// ```
/// use hurricane_loss::util::parallelism::num_cpus;
///
/// let cpus = num_cpus();
/// assert!(cpus >= 1);
/// ```
pub fn num_cpus() -> usize {
    num_cpus::get().max(1)
}

/// Resolve the worker count: the explicit override, or host parallelism
pub fn resolve_worker_count(workers: Option<usize>) -> usize {
    workers.unwrap_or_else(num_cpus)
}

/// Number of threads to run `worker_count` workers on
///
/// Workers beyond the core count queue on the pool instead of getting their
/// own thread.
pub fn thread_count(worker_count: usize) -> usize {
    worker_count.clamp(1, num_cpus())
}

/// Check if the worker count exceeds the CPU count and warn if so
///
/// Returns true if the worker count exceeds the CPU count.
pub fn warn_if_oversubscribed(worker_count: usize) -> bool {
    let cpu_count = num_cpus();
    if worker_count > cpu_count {
        eprintln!(
            "Warning: Worker count ({}) exceeds CPU count ({}). \
             Workers will share threads.",
            worker_count, cpu_count
        );
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_cpus() {
        let cpus = num_cpus();
        assert!(cpus > 0);
        assert!(cpus <= 4096);
    }

    #[test]
    fn test_resolve_worker_count() {
        assert_eq!(resolve_worker_count(Some(3)), 3);
        assert_eq!(resolve_worker_count(None), num_cpus());
    }

    #[test]
    fn test_thread_count() {
        let cpus = num_cpus();
        assert_eq!(thread_count(1), 1);
        assert_eq!(thread_count(cpus), cpus);
        assert_eq!(thread_count(cpus * 4), cpus);
    }

    #[test]
    fn test_warn_if_oversubscribed() {
        let cpu_count = num_cpus();

        assert!(!warn_if_oversubscribed(cpu_count));
        assert!(!warn_if_oversubscribed(1));

        assert!(warn_if_oversubscribed(cpu_count + 1));
        assert!(warn_if_oversubscribed(cpu_count * 2));
    }
}
