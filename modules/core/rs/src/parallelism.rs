use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests count back from the number of available cores: -1 means "all cores".
fn normalize(requested: isize, cores: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (cores + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(cores) as usize,
    }
}

/// Number of worker threads to use for the requested amount.
pub fn available(requested: isize) -> Result<usize> {
    let cores = available_parallelism()?.get() as isize;
    Ok(normalize(requested, cores))
}

/// Builds a rayon pool sized with [`available`].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    Ok(pool)
}
