//! Error types for memdb.

use thiserror::Error;

use crate::common::{PageId, RowId};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in memdb.
///
/// Every failure in the engine is one of four flavors: a validation error,
/// something that wasn't found, an exhausted page pool, or a schema-level
/// conflict. Index-contract methods (`insert`/`remove`/`find`) report
/// absence and duplicates through `bool`/`Option` instead; this enum covers
/// everything that can fail for more than one reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested page does not exist in the pool.
    #[error("page {0} not found")]
    PageNotFound(PageId),

    /// The page is pinned and cannot be deallocated.
    #[error("page {0} is pinned")]
    PagePinned(PageId),

    /// Attempted to unpin a page whose ref-count is already zero.
    ///
    /// This indicates a bug - unpinning should match pinning.
    #[error("page {0} is not pinned")]
    PageNotPinned(PageId),

    /// A page read or write would run past the end of the buffer.
    #[error("access at offset {offset} with length {len} exceeds page size {size}")]
    PageOverflow {
        offset: usize,
        len: usize,
        size: usize,
    },

    /// The pool is at capacity and no resident page can be evicted.
    ///
    /// This happens when every resident page is pinned.
    #[error("no evictable page in a pool of capacity {capacity}")]
    PoolExhausted { capacity: usize },

    /// A row's value count does not match the schema's column count.
    #[error("row has {got} values but the schema has {expected} columns")]
    ArityMismatch { expected: usize, got: usize },

    /// Requested row does not exist in the table.
    #[error("row {0} not found")]
    RowNotFound(RowId),

    /// An index rejected a key that already exists.
    #[error("duplicate key for index on column `{column}`")]
    DuplicateKey { column: String },

    /// A column with this name is already part of the schema.
    #[error("duplicate column `{0}` in schema")]
    DuplicateColumn(String),

    /// The named column is not part of the schema.
    #[error("no column named `{0}`")]
    UnknownColumn(String),

    /// The index kind string is neither `btree` nor `hash`.
    #[error("unknown index kind `{0}`")]
    UnknownIndexKind(String),

    /// An index already exists on this column.
    #[error("index on column `{0}` already exists")]
    IndexExists(String),

    /// No index exists on this column.
    #[error("no index on column `{0}`")]
    IndexNotFound(String),

    /// The schema failed validation.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A table with this name already exists.
    #[error("table `{0}` already exists")]
    TableExists(String),

    /// No table with this name exists.
    #[error("table `{0}` not found")]
    TableNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PageNotFound(PageId::new(42));
        assert_eq!(format!("{}", err), "page Page(42) not found");

        let err = Error::PoolExhausted { capacity: 4 };
        assert_eq!(format!("{}", err), "no evictable page in a pool of capacity 4");

        let err = Error::ArityMismatch { expected: 3, got: 2 };
        assert_eq!(
            format!("{}", err),
            "row has 2 values but the schema has 3 columns"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
