//! Row layout declarations.
//!
//! The layout is declared once, before the first row is written, and
//! lists every column in the order it is serialized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use evtable_foundation::{ColumnType, Error, ErrorKind, Result};

/// Schema definition for one column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSchema {
    /// Column name as written to the output.
    pub name: String,
    /// Column type.
    pub ty: ColumnType,
}

impl ColumnSchema {
    /// Creates a column.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Ordered column layout of an output row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowSchema {
    /// Name of the output table.
    pub table: String,
    /// Columns in serialization order.
    pub columns: Vec<ColumnSchema>,
}

impl RowSchema {
    /// Creates an empty schema for the named table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Adds a column to the schema.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push(ColumnSchema::new(name, ty));
        self
    }

    /// Returns the column schema by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks that column names are unique.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first duplicated column.
    pub fn validate(&self) -> Result<()> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "duplicate column in table '{}': {}",
                    self.table, column.name
                ))));
            }
        }
        Ok(())
    }
}
