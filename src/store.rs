// src/store.rs
//
// In-memory tables as read from / written to disk. Cells stay strings;
// typed views (see `model`) are built on top and never mutate the table.

use std::{error::Error, fs, path::Path};

use crate::csv::{parse_rows, split_headers};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_text(text: &str) -> Result<Self, Box<dyn Error>> {
        let (headers, rows) = split_headers(parse_rows(text.as_bytes())?);
        Ok(Self { headers, rows })
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
        let ds = Self::from_text(&text)
            .map_err(|e| format!("Cannot parse {}: {e}", path.display()))?;
        logd!("Loaded {} rows from {}", ds.rows.len(), path.display());
        Ok(ds)
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of a column by exact header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column`, but a missing column is an error naming the table.
    pub fn require_column(&self, name: &str, table: &str) -> Result<usize, Box<dyn Error>> {
        self.column(name)
            .ok_or_else(|| format!("{table}: missing required column '{name}'").into())
    }

    /// Cell text; short (ragged) rows read as empty.
    pub fn cell<'a>(&'a self, row: &'a [String], col: Option<usize>) -> &'a str {
        col.and_then(|c| row.get(c)).map(|s| s.as_str()).unwrap_or("")
    }

    /// Rows kept by `keep`, headers unchanged.
    pub fn filter_rows<F>(&self, mut keep: F) -> DataSet
    where
        F: FnMut(&[String]) -> bool,
    {
        DataSet {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
