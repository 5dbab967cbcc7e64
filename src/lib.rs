//! memdb - An embedded in-memory database engine with pluggable buffer
//! eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            memdb                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          External Query Layer (not part of this crate)   │   │
//! │  │          SQL Parser → Planner → Executor                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Table Layer (table/)                      │   │
//! │  │   Schema + Rows + Secondary Indices (atomic updates)     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Index Layer (index/)                      │   │
//! │  │              B-tree  ←─OR─→  Hash table                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                                                                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Page Pool (buffer/)  [Runtime Swappable]        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Eviction Policies: LRU | FIFO             │   │   │
//! │  │   │            (hot-swappable at runtime)            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │            PagePool + Page + Statistics                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is memory-resident: pages are never written to storage
//! media, and the engine is single-threaded with exclusive ownership along
//! one call chain.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, RowId, Error, config)
//! - [`buffer`] - Page pool and eviction policies
//! - [`storage`] - Page type and layout
//! - [`index`] - Generic index structures (B-tree, hash table)
//! - [`table`] - Schemas, rows, values, secondary indices
//! - [`database`] - The engine facade
//!
//! # Quick Start
//! ```
//! use memdb::table::{Column, ColumnType, IndexKind, TableSchema, Value};
//! use memdb::Database;
//!
//! let mut db = Database::new();
//!
//! let schema = TableSchema::with_columns(vec![
//!     Column::new("id", ColumnType::Integer),
//!     Column::new("name", ColumnType::Text),
//! ]).unwrap();
//! db.create_table("users", schema).unwrap();
//!
//! let users = db.table_mut("users").unwrap();
//! let id = users.insert_row(vec![Value::Integer(1), Value::from("ada")]).unwrap();
//!
//! users.create_index("id", IndexKind::Hash).unwrap();
//! assert_eq!(users.index("id").unwrap().find(&Value::Integer(1)), Some(id));
//! ```

// Core modules
pub mod buffer;
pub mod common;
pub mod database;
pub mod index;
pub mod storage;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_PAGE_SIZE, DEFAULT_POOL_CAPACITY};
pub use common::{Error, PageId, Result, RowId};

pub use buffer::{PagePool, PoolStats, ReplacementPolicy};
pub use database::Database;
pub use storage::Page;
pub use table::{Table, TableSchema, Value};
