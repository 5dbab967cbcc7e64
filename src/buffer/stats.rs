//! Pool statistics snapshots.

use std::fmt;

/// A point-in-time snapshot of page pool state.
///
/// Produced by [`PagePool::stats`](crate::buffer::PagePool::stats); the
/// numbers describe the pool at the moment of the call and do not update.
///
/// # Example
/// ```
/// use memdb::buffer::PagePool;
///
/// let pool = PagePool::new(4096, 8);
/// let stats = pool.stats();
/// assert_eq!(stats.capacity, 8);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStats {
    /// Maximum number of resident pages.
    pub capacity: usize,

    /// Number of pages currently resident.
    pub resident: usize,

    /// Size of each page in bytes.
    pub page_size: usize,

    /// Resident pages with unflushed modifications.
    pub dirty: usize,

    /// Resident pages with a non-zero pin count.
    pub pinned: usize,

    /// Total bytes held by resident pages.
    pub resident_bytes: usize,

    /// Pages allocated over the pool's lifetime.
    pub allocations: u64,

    /// Pages evicted over the pool's lifetime.
    pub evictions: u64,

    /// Dirty-page flushes over the pool's lifetime.
    pub flushes: u64,

    /// Fraction of accesses served from memory.
    ///
    /// Always 1.0: the pool has no backing store, so there is no miss
    /// concept to measure.
    pub hit_rate: f64,
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool {{ resident: {}/{}, dirty: {}, pinned: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.resident,
            self.capacity,
            self.dirty,
            self.pinned,
            self.evictions,
            self.hit_rate * 100.0
        )
    }
}
