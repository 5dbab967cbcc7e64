//! Configuration constants for memdb.

/// Default size of a page in bytes (4KB).
///
/// Chosen to match the OS page size on most systems; pools can be built
/// with any non-zero page size.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// Default number of resident pages a pool will hold before evicting.
pub const DEFAULT_POOL_CAPACITY: usize = 1024;

/// Default B-tree order (maximum children per internal node).
///
/// Order 5 keeps nodes small enough that splits are exercised quickly in
/// tests while still fanning out.
pub const DEFAULT_TREE_ORDER: usize = 5;

/// Initial bucket count for hash tables.
pub const HASH_INITIAL_BUCKETS: usize = 16;

/// Load factor (entries / buckets) past which a hash table doubles its
/// bucket count.
pub const HASH_MAX_LOAD_FACTOR: f64 = 0.75;
