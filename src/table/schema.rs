//! Column definitions and table schemas.

use std::collections::HashMap;
use std::fmt;

use crate::common::{Error, Result};

/// The declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    Real,
    Blob,
    Null,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Real => "REAL",
            ColumnType::Blob => "BLOB",
            ColumnType::Null => "NULL",
        };
        write!(f, "{}", name)
    }
}

/// A column definition: name, type, and constraint flags.
///
/// Constraint flags are schema metadata consumed by the external query
/// layer; the table itself enforces only arity and index uniqueness.
///
/// # Example
/// ```
/// use memdb::table::{Column, ColumnType};
///
/// let col = Column::new("id", ColumnType::Integer).primary_key();
/// assert!(col.primary_key);
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
}

impl Column {
    /// Create a column with no constraint flags set.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            not_null: false,
            unique: false,
        }
    }

    /// Mark this column as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark this column as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark this column as UNIQUE.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// An ordered sequence of columns with by-name lookup.
///
/// # Example
/// ```
/// use memdb::table::{Column, ColumnType, TableSchema};
///
/// let mut schema = TableSchema::new();
/// schema.add_column(Column::new("id", ColumnType::Integer)).unwrap();
/// schema.add_column(Column::new("name", ColumnType::Text)).unwrap();
///
/// assert_eq!(schema.column_count(), 2);
/// assert_eq!(schema.column_index("name"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    columns: Vec<Column>,
    positions: HashMap<String, usize>,
}

impl TableSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from a list of columns.
    ///
    /// # Errors
    /// `Error::DuplicateColumn` on a repeated name.
    pub fn with_columns(columns: Vec<Column>) -> Result<Self> {
        let mut schema = Self::new();
        for column in columns {
            schema.add_column(column)?;
        }
        Ok(schema)
    }

    /// Append a column.
    ///
    /// # Errors
    /// `Error::DuplicateColumn` if the name is already taken.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.positions.contains_key(&column.name) {
            return Err(Error::DuplicateColumn(column.name));
        }
        self.positions.insert(column.name.clone(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Borrow the column at `index`.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Borrow the column named `name`.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.positions.get(name).map(|&i| &self.columns[i])
    }

    /// Position of the column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns, in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Validate the schema: at least one column and at most one primary
    /// key.
    ///
    /// # Errors
    /// `Error::InvalidSchema` describing the violation.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::InvalidSchema("schema has no columns".into()));
        }

        let primary_keys = self.columns.iter().filter(|c| c.primary_key).count();
        if primary_keys > 1 {
            return Err(Error::InvalidSchema(format!(
                "{} primary key columns, at most 1 allowed",
                primary_keys
            )));
        }

        Ok(())
    }
}
