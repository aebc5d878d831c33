//! Named-column tables of text records.

use crate::error::{EdaError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Raw text, tokenized on demand.
    Text(String),
    /// A pre-tokenized value.
    Tokens(Vec<String>),
    /// Missing value.
    Missing,
}

impl Cell {
    /// Parse a raw field value.
    ///
    /// Empty fields and `NA` are missing. A JSON array of strings
    /// (`["good", "value"]`) is a pre-tokenized cell. Anything else is text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "NA" {
            return Cell::Missing;
        }
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Ok(tokens) = serde_json::from_str::<Vec<String>>(trimmed) {
                return Cell::Tokens(tokens);
            }
        }
        Cell::Text(trimmed.to_string())
    }

    /// Check if this is a missing value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Try to get as raw text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a token list.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Cell::Tokens(t) => Some(t),
            _ => None,
        }
    }

    /// Tokens of this cell: stored tokens, whitespace-split text, or nothing.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Cell::Text(s) => s.split_whitespace().collect(),
            Cell::Tokens(t) => t.iter().map(String::as_str).collect(),
            Cell::Missing => Vec::new(),
        }
    }

    /// The cell as one string, with tokens joined by a single space.
    pub fn joined_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Tokens(t) => t.join(" "),
            Cell::Missing => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Tokens(t) => write!(f, "[{}]", t.join(", ")),
            Cell::Missing => write!(f, "NA"),
        }
    }
}

/// Anything that exposes its values by column name.
///
/// Consumers only iterate one named column at a time, so any row- or
/// column-oriented structure can implement this.
pub trait ColumnTable {
    /// Column names, in order.
    fn column_names(&self) -> Vec<&str>;

    /// Number of rows.
    fn n_rows(&self) -> usize;

    /// The cell at `row` in `column`, if present.
    fn cell(&self, row: usize, column: &str) -> Option<&Cell>;

    /// Check if a column exists.
    fn has_column(&self, column: &str) -> bool {
        self.column_names().contains(&column)
    }

    /// Get all values for a column, in row order.
    ///
    /// Absent cells read as [`Cell::Missing`].
    fn column(&self, column: &str) -> Result<Vec<&Cell>> {
        if !self.has_column(column) {
            return Err(EdaError::MissingColumn(column.to_string()));
        }
        Ok((0..self.n_rows())
            .map(|row| self.cell(row, column).unwrap_or(&Cell::Missing))
            .collect())
    }
}

/// Row-oriented records loaded from a delimited file.
#[derive(Debug, Clone, Default)]
pub struct Records {
    /// Column names from the header.
    column_names: Vec<String>,
    /// Rows, each with one cell per column.
    rows: Vec<Vec<Cell>>,
}

impl Records {
    /// Build records from a header and rows.
    ///
    /// Rows shorter than the header are padded with missing cells; longer
    /// rows are rejected.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let n_columns = column_names.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (idx, mut row) in rows.into_iter().enumerate() {
            if row.len() > n_columns {
                return Err(EdaError::RaggedRow {
                    row: idx + 1,
                    expected: n_columns,
                    actual: row.len(),
                });
            }
            row.resize(n_columns, Cell::Missing);
            padded.push(row);
        }
        Ok(Self {
            column_names,
            rows: padded,
        })
    }

    /// Load records from a file, choosing the delimiter from the extension.
    ///
    /// `.tsv` and `.tab` files are tab-separated; everything else is
    /// comma-separated.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some("tsv") | Some("tab") => b'\t',
            _ => b',',
        };
        log::debug!("Reading records from {:?}", path);
        Self::from_reader(File::open(path)?, delimiter)
    }

    /// Load records from a comma-separated file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?, b',')
    }

    /// Load records from a tab-separated file.
    pub fn from_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?, b'\t')
    }

    /// Load records from any reader.
    ///
    /// Expected format:
    /// - First row: header with column names
    /// - Subsequent rows: one field per column (see [`Cell::parse`])
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let column_names: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if column_names.iter().all(|name| name.is_empty()) {
            return Err(EdaError::EmptyData(
                "Table must have a header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::parse).collect());
        }

        let records = Self::new(column_names, rows)?;
        log::debug!(
            "Loaded {} rows x {} columns",
            records.n_rows(),
            records.n_columns()
        );
        Ok(records)
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            column_names: self.column_names.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == column)
    }
}

impl ColumnTable for Records {
    fn column_names(&self) -> Vec<&str> {
        self.column_names.iter().map(String::as_str).collect()
    }

    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Column-oriented in-memory table: column name -> cells.
impl ColumnTable for IndexMap<String, Vec<Cell>> {
    fn column_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn n_rows(&self) -> usize {
        self.values().map(Vec::len).max().unwrap_or(0)
    }

    fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        self.get(column).and_then(|cells| cells.get(row))
    }
}
