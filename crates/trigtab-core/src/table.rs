//! Column-ordered tabular result sets.
//!
//! An [`EventTable`] is constructed once from a query response and is
//! immutable afterwards. Cells are `serde_json::Value`s so a table can hold
//! whatever column types the source database exposes.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Tabular event-trigger data: named columns over rows of JSON cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl EventTable {
    /// Builds a table from column names and row data.
    ///
    /// # Errors
    ///
    /// Returns an error if a column name repeats or any row does not have
    /// exactly one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::RowWidth {
                    row: i,
                    got: row.len(),
                    expected: columns.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// A table with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Column names, in table order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// One cell, addressed by row index and column name.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Numeric view of a column, for plotting and statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist or any cell is not a
    /// number.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row[idx].as_f64().ok_or_else(|| Error::NonNumericCell {
                    column: name.to_string(),
                    row: i,
                })
            })
            .collect()
    }

    /// Replaces null cells with the column's type default.
    ///
    /// The default is taken from the first non-null cell in the column:
    /// 0 for numbers, the empty string for strings, `false` for booleans.
    /// Columns that are entirely null are left untouched.
    #[must_use]
    pub fn filled(&self) -> Self {
        let defaults: Vec<Value> = (0..self.columns.len())
            .map(|idx| {
                self.rows
                    .iter()
                    .map(|row| &row[idx])
                    .find(|v| !v.is_null())
                    .map_or(Value::Null, type_default)
            })
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(idx, cell)| {
                        if cell.is_null() {
                            defaults[idx].clone()
                        } else {
                            cell.clone()
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Rows as JSON objects keyed by column name.
    #[must_use]
    pub fn to_records(&self) -> Vec<serde_json::Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

fn type_default(sample: &Value) -> Value {
    match sample {
        Value::Number(_) => Value::from(0),
        Value::String(_) => Value::from(""),
        Value::Bool(_) => Value::from(false),
        _ => Value::Null,
    }
}
