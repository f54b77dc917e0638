//! Tabular form of a category.
//!
//! Responsibilities:
//! - Hold ordered rows of text cells keyed by field name.
//! - Union row keys into a column set (first-seen order).
//! - Drop every column in which any cell is unresolved.
//!
//! Invariants:
//! - Inserting an existing key into a [`Row`] replaces the value in place.
//! - A missing cell renders as the empty string.

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// A nested value with no tabular representation.
    Unresolved,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Unresolved => None,
        }
    }
}

/// Ordered mapping of field name to cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, replacing any existing value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, cell: Cell) {
        let key = key.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = cell,
            None => self.cells.push((key, cell)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    /// Merge `other` into this row; values from `other` win on collision.
    pub fn merge(&mut self, other: Row) {
        for (key, cell) in other.cells {
            self.insert(key, cell);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, cell) in iter {
            row.insert(key, cell);
        }
        row
    }
}

/// Rows of one category and the union of their keys.
#[derive(Debug, Clone, Default)]
pub struct Table {
    keys: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) {
        for (key, _) in row.iter() {
            if !self.keys.iter().any(|k| k == key) {
                self.keys.push(key.to_string());
            }
        }
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn is_resolved(&self, key: &str) -> bool {
        !self
            .rows
            .iter()
            .any(|row| matches!(row.get(key), Some(Cell::Unresolved)))
    }

    /// Columns that survive table assembly, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|key| self.is_resolved(key))
            .collect()
    }

    /// Columns removed because at least one cell is unresolved.
    pub fn dropped_columns(&self) -> Vec<&str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|key| !self.is_resolved(key))
            .collect()
    }

    /// Text of the cell at (`row`, `column`); empty when absent.
    pub fn value(&self, row: usize, column: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(Cell::as_text)
            .unwrap_or("")
    }
}
