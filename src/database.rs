//! Database - the engine facade owning the page pool and table catalog.

use std::collections::HashMap;

use crate::buffer::PagePool;
use crate::common::{Error, Result};
use crate::table::{Table, TableSchema};

/// An embedded, in-memory database instance.
///
/// Owns the [`PagePool`] and every [`Table`] along a single call chain -
/// this is the entry point the external query layer holds. The pool is
/// exposed for page-backed storage accounting; table row data is not
/// routed through page storage in this design.
///
/// # Example
/// ```
/// use memdb::table::{Column, ColumnType, TableSchema, Value};
/// use memdb::Database;
///
/// let mut db = Database::new();
/// let schema = TableSchema::with_columns(vec![
///     Column::new("id", ColumnType::Integer),
/// ]).unwrap();
/// db.create_table("items", schema).unwrap();
///
/// let items = db.table_mut("items").unwrap();
/// items.insert_row(vec![Value::Integer(1)]).unwrap();
/// assert_eq!(items.row_count(), 1);
/// ```
pub struct Database {
    pool: PagePool,
    tables: HashMap<String, Table>,
}

impl Database {
    /// Create a database with a default-configured page pool.
    pub fn new() -> Self {
        Self::with_pool(PagePool::default())
    }

    /// Create a database around an explicitly configured pool.
    pub fn with_pool(pool: PagePool) -> Self {
        Self {
            pool,
            tables: HashMap::new(),
        }
    }

    // ========================================================================
    // Table catalog
    // ========================================================================

    /// Create a table under `name`.
    ///
    /// # Errors
    /// - `Error::TableExists` if the name is taken
    /// - `Error::InvalidSchema` if the schema fails validation
    pub fn create_table(&mut self, name: impl Into<String>, schema: TableSchema) -> Result<()> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::TableExists(name));
        }

        let table = Table::new(schema)?;
        self.tables.insert(name, table);
        Ok(())
    }

    /// Drop the table under `name`, discarding its rows and indices.
    ///
    /// # Errors
    /// - `Error::TableNotFound` if no such table exists
    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Borrow a table.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Mutably borrow a table.
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Names of every table, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    // ========================================================================
    // Page pool
    // ========================================================================

    /// Borrow the page pool.
    pub fn page_pool(&self) -> &PagePool {
        &self.pool
    }

    /// Mutably borrow the page pool.
    pub fn page_pool_mut(&mut self) -> &mut PagePool {
        &mut self.pool
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
