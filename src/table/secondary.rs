//! Secondary indices over column values.
//!
//! An [`Index`] maps column values to row ids. Two variants exist:
//! [`BTreeIndex`] keeps `(value, row id)` pairs in order and supports
//! range queries; [`HashIndex`] is point-lookup only and enforces unique
//! keys.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, RowId};
use crate::index::{BTree, HashTable};
use crate::table::Value;

/// Which structure backs an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    BTree,
    Hash,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::BTree => write!(f, "btree"),
            IndexKind::Hash => write!(f, "hash"),
        }
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    /// Parse `"btree"` or `"hash"`; anything else is a validation error.
    /// This is the seam where the external query layer's index-kind
    /// strings are checked.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "btree" => Ok(IndexKind::BTree),
            "hash" => Ok(IndexKind::Hash),
            other => Err(Error::UnknownIndexKind(other.to_string())),
        }
    }
}

/// A secondary index over one column.
///
/// The contract consumed by [`Table`](crate::table::Table): duplicates and
/// absence are reported through `bool`/`Option`, never through errors.
pub trait Index {
    /// Which structure backs this index.
    fn kind(&self) -> IndexKind;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Check if the index has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an entry. Returns `false` if the index rejected it (duplicate).
    fn insert(&mut self, key: Value, row_id: RowId) -> bool;

    /// Remove one entry matching `key`. Returns `false` if none matched.
    fn remove(&mut self, key: &Value) -> bool;

    /// Remove the exact `(key, row_id)` entry.
    ///
    /// Row mutations go through this so that, when several rows share a
    /// value, the right row's entry is dropped. The default delegates to
    /// [`remove`](Index::remove), which is exact for unique-key indices.
    fn remove_entry(&mut self, key: &Value, row_id: RowId) -> bool {
        let _ = row_id;
        self.remove(key)
    }

    /// Find a row id for `key`.
    fn find(&self, key: &Value) -> Option<RowId>;

    /// Row ids for every entry with a key in `[lo, hi]`.
    ///
    /// Unordered indices return an empty sequence.
    fn range(&self, lo: &Value, hi: &Value) -> Vec<RowId>;
}

/// Construct an empty index of the given kind.
pub(crate) fn make_index(kind: IndexKind) -> Box<dyn Index> {
    match kind {
        IndexKind::BTree => Box::new(BTreeIndex::new()),
        IndexKind::Hash => Box::new(HashIndex::new()),
    }
}

/// Ordered index: `(value, row id)` pairs in a B-tree.
///
/// Composite keys make duplicate column values representable - two rows
/// with the same value produce two distinct pairs.
pub struct BTreeIndex {
    tree: BTree<(Value, RowId)>,
}

impl BTreeIndex {
    pub fn new() -> Self {
        Self { tree: BTree::new() }
    }

    /// All pairs whose value equals `key`, in row-id order.
    fn entries_for(&self, key: &Value) -> Vec<(Value, RowId)> {
        self.tree
            .range_query(&(key.clone(), RowId::MIN), &(key.clone(), RowId::MAX))
    }
}

impl Index for BTreeIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::BTree
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn insert(&mut self, key: Value, row_id: RowId) -> bool {
        self.tree.insert((key, row_id))
    }

    fn remove(&mut self, key: &Value) -> bool {
        match self.entries_for(key).first() {
            Some(entry) => self.tree.remove(entry),
            None => false,
        }
    }

    fn remove_entry(&mut self, key: &Value, row_id: RowId) -> bool {
        self.tree.remove(&(key.clone(), row_id))
    }

    fn find(&self, key: &Value) -> Option<RowId> {
        self.entries_for(key).first().map(|(_, id)| *id)
    }

    fn range(&self, lo: &Value, hi: &Value) -> Vec<RowId> {
        self.tree
            .range_query(&(lo.clone(), RowId::MIN), &(hi.clone(), RowId::MAX))
            .into_iter()
            .map(|(_, id)| id)
            .collect()
    }
}

impl Default for BTreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-lookup index: value → row id in a hash table.
///
/// Keys are unique; inserting a value that is already present fails, which
/// is what makes a hash index reject duplicate column values.
pub struct HashIndex {
    map: HashTable<Value, RowId>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self {
            map: HashTable::new(),
        }
    }
}

impl Index for HashIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Hash
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn insert(&mut self, key: Value, row_id: RowId) -> bool {
        self.map.insert(key, row_id)
    }

    fn remove(&mut self, key: &Value) -> bool {
        self.map.remove(key).is_some()
    }

    fn find(&self, key: &Value) -> Option<RowId> {
        self.map.find(key).copied()
    }

    /// Hash indices cannot answer range queries; always empty.
    fn range(&self, _lo: &Value, _hi: &Value) -> Vec<RowId> {
        Vec::new()
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}
