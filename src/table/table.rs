//! Table - rows plus the secondary indices kept consistent with them.

use std::collections::HashMap;

use crate::common::{Error, Result, RowId};
use crate::table::secondary::{make_index, Index, IndexKind};
use crate::table::{Row, TableSchema, Value};

/// A table: schema, insertion-ordered rows, and per-column indices.
///
/// # Consistency
/// Every mutation keeps the indices synchronized with the rows, and does
/// so atomically: an insert or update that any index rejects is rolled
/// back completely, leaving both rows and indices untouched. After every
/// operation, each index entry corresponds to exactly one live row's
/// column value.
///
/// # Row ids
/// Ids are assigned monotonically starting at 1 and never reused, even
/// after deletion. A rejected insert does not consume an id.
///
/// # Example
/// ```
/// use memdb::table::{Column, ColumnType, IndexKind, Table, TableSchema, Value};
///
/// let schema = TableSchema::with_columns(vec![
///     Column::new("id", ColumnType::Integer),
///     Column::new("name", ColumnType::Text),
/// ]).unwrap();
/// let mut table = Table::new(schema).unwrap();
///
/// let id = table.insert_row(vec![Value::Integer(1), Value::from("ada")]).unwrap();
/// table.create_index("id", IndexKind::Hash).unwrap();
/// assert_eq!(table.index("id").unwrap().find(&Value::Integer(1)), Some(id));
/// ```
pub struct Table {
    schema: TableSchema,
    /// Live rows in insertion order.
    rows: Vec<Row>,
    /// Secondary indices keyed by column name.
    indices: HashMap<String, Box<dyn Index>>,
    /// Next row id to assign. Monotonic; never reused.
    next_row_id: u64,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("schema", &self.schema)
            .field("rows", &self.rows)
            .field("indices", &self.indices.keys().collect::<Vec<_>>())
            .field("next_row_id", &self.next_row_id)
            .finish()
    }
}

impl Table {
    /// Create an empty table over a validated schema.
    ///
    /// # Errors
    /// `Error::InvalidSchema` if the schema fails validation.
    pub fn new(schema: TableSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self {
            schema,
            rows: Vec::new(),
            indices: HashMap::new(),
            next_row_id: 1,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The table's schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Number of live rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of schema columns.
    pub fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    /// Live rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row with the given id.
    ///
    /// A linear scan over the row collection; acceptable, but not a fast
    /// path.
    pub fn get_row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// The index on `column`, if one exists.
    pub fn index(&self, column: &str) -> Option<&dyn Index> {
        self.indices.get(column).map(|b| b.as_ref())
    }

    /// Check whether `column` has an index.
    pub fn has_index(&self, column: &str) -> bool {
        self.indices.contains_key(column)
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    // ========================================================================
    // Row mutation
    // ========================================================================

    /// Insert a row, propagating its values to every index.
    ///
    /// Atomic: if any index rejects its entry, entries already added are
    /// removed, the row is not appended, and the candidate id is not
    /// consumed.
    ///
    /// # Errors
    /// - `Error::ArityMismatch` if the value count differs from the schema
    /// - `Error::DuplicateKey` if an index rejects a value
    pub fn insert_row(&mut self, values: Vec<Value>) -> Result<RowId> {
        if values.len() != self.schema.column_count() {
            return Err(Error::ArityMismatch {
                expected: self.schema.column_count(),
                got: values.len(),
            });
        }

        let row_id = RowId::new(self.next_row_id);

        let entries = self.indexed_values(&values);
        for (applied, (column, value)) in entries.iter().enumerate() {
            let accepted = match self.indices.get_mut(column) {
                Some(index) => index.insert(value.clone(), row_id),
                None => false,
            };
            if !accepted {
                self.undo_inserts(&entries[..applied], row_id);
                return Err(Error::DuplicateKey {
                    column: column.clone(),
                });
            }
        }

        self.rows.push(Row::new(row_id, values));
        self.next_row_id += 1;
        Ok(row_id)
    }

    /// Replace a row's values, moving every index entry from old to new.
    ///
    /// Per index the old value is removed *before* the new one is
    /// inserted, so unique-style indices don't spuriously reject an update
    /// that keeps the same value. Atomic: a rejection undoes all partial
    /// index work before returning.
    ///
    /// # Errors
    /// - `Error::RowNotFound` if `id` is unknown (no side effects)
    /// - `Error::ArityMismatch` if the value count differs from the schema
    /// - `Error::DuplicateKey` if an index rejects a new value
    pub fn update_row(&mut self, id: RowId, values: Vec<Value>) -> Result<()> {
        if values.len() != self.schema.column_count() {
            return Err(Error::ArityMismatch {
                expected: self.schema.column_count(),
                got: values.len(),
            });
        }

        let pos = self
            .rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(Error::RowNotFound(id))?;

        // (column, old value, new value, whether the old entry existed)
        let mut applied: Vec<(String, Value, Value, bool)> = Vec::new();

        let columns: Vec<String> = self.indices.keys().cloned().collect();
        for column in columns {
            let Some(cidx) = self.schema.column_index(&column) else {
                continue;
            };
            let old = self.rows[pos].values()[cidx].clone();
            let new = values[cidx].clone();

            let Some(index) = self.indices.get_mut(&column) else {
                continue;
            };
            let old_removed = index.remove_entry(&old, id);
            if index.insert(new.clone(), id) {
                applied.push((column, old, new, old_removed));
                continue;
            }

            // Rejected: restore this index, then unwind the earlier ones.
            if old_removed {
                index.insert(old, id);
            }
            self.undo_updates(&applied, id);
            return Err(Error::DuplicateKey { column });
        }

        self.rows[pos] = Row::new(id, values);
        Ok(())
    }

    /// Delete a row, removing its values from every index first.
    ///
    /// # Errors
    /// - `Error::RowNotFound` if `id` is unknown (no side effects)
    pub fn delete_row(&mut self, id: RowId) -> Result<()> {
        let pos = self
            .rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(Error::RowNotFound(id))?;

        let values = self.rows[pos].values().to_vec();
        let entries = self.indexed_values(&values);
        for (column, value) in &entries {
            if let Some(index) = self.indices.get_mut(column) {
                index.remove_entry(value, id);
            }
        }

        self.rows.remove(pos);
        Ok(())
    }

    // ========================================================================
    // Index management
    // ========================================================================

    /// Create an index on `column` and backfill it from every live row.
    ///
    /// # Errors
    /// - `Error::UnknownColumn` if the column doesn't exist
    /// - `Error::IndexExists` if the column is already indexed
    /// - `Error::DuplicateKey` if backfill hits a value the index rejects;
    ///   the half-built index is discarded
    pub fn create_index(&mut self, column: &str, kind: IndexKind) -> Result<()> {
        let cidx = self
            .schema
            .column_index(column)
            .ok_or_else(|| Error::UnknownColumn(column.to_string()))?;
        if self.indices.contains_key(column) {
            return Err(Error::IndexExists(column.to_string()));
        }

        let mut index = make_index(kind);
        for row in &self.rows {
            if !index.insert(row.values()[cidx].clone(), row.id()) {
                return Err(Error::DuplicateKey {
                    column: column.to_string(),
                });
            }
        }

        self.indices.insert(column.to_string(), index);
        Ok(())
    }

    /// Drop the index on `column`, discarding its data.
    ///
    /// # Errors
    /// - `Error::IndexNotFound` if no index exists on the column
    pub fn drop_index(&mut self, column: &str) -> Result<()> {
        self.indices
            .remove(column)
            .map(|_| ())
            .ok_or_else(|| Error::IndexNotFound(column.to_string()))
    }

    /// Drop every row and index and restart the id counter.
    ///
    /// Full reset: the table behaves like a freshly constructed instance
    /// afterwards, including assigning row ids from 1 again.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.indices.clear();
        self.next_row_id = 1;
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// The (column, value) pair each index will see for a row with these
    /// values.
    fn indexed_values(&self, values: &[Value]) -> Vec<(String, Value)> {
        self.indices
            .keys()
            .filter_map(|column| {
                self.schema
                    .column_index(column)
                    .map(|cidx| (column.clone(), values[cidx].clone()))
            })
            .collect()
    }

    /// Remove entries added by a failed insert.
    fn undo_inserts(&mut self, entries: &[(String, Value)], row_id: RowId) {
        for (column, value) in entries {
            if let Some(index) = self.indices.get_mut(column) {
                index.remove_entry(value, row_id);
            }
        }
    }

    /// Reverse the per-index work of a failed update.
    fn undo_updates(&mut self, applied: &[(String, Value, Value, bool)], row_id: RowId) {
        for (column, old, new, old_removed) in applied.iter().rev() {
            if let Some(index) = self.indices.get_mut(column) {
                index.remove_entry(new, row_id);
                if *old_removed {
                    index.insert(old.clone(), row_id);
                }
            }
        }
    }
}
