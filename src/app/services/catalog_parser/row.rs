//! Row normalization and column lookup
//!
//! Spreadsheet exports often pad header names with stray whitespace. Headers
//! are trimmed once when the table is read, and every row is then addressed by
//! trimmed column name, so column order never matters but presence does.

use super::sentinel::value_or_null;
use crate::app::models::{Category, FieldMap};
use crate::constants::NAME_COLUMN;
use crate::{Error, Result};
use csv::StringRecord;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// A parsed CSV table for one catalog category
#[derive(Debug, Clone)]
pub struct CsvTable {
    category: Category,

    /// Trimmed column name to index mapping
    name_to_index: HashMap<String, usize>,

    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Read CSV text with a header row
    ///
    /// Rows may be shorter or longer than the header; missing trailing cells
    /// read as empty strings.
    pub fn parse(text: &str, category: Category) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(|e| {
            Error::csv_parsing(
                category.to_string(),
                "Failed to read CSV headers",
                Some(e),
            )
        })?;

        // Later duplicates of a trimmed name shadow earlier ones
        let name_to_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (normalize_header(header).to_string(), index))
            .collect();

        let records = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                Error::csv_parsing(category.to_string(), "Failed to read CSV record", Some(e))
            })?;

        debug!(
            "Read {} table: {} columns, {} data rows",
            category,
            name_to_index.len(),
            records.len()
        );

        Ok(Self {
            category,
            name_to_index,
            records,
        })
    }

    /// Data rows in file order, numbered from 1
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().enumerate().map(move |(index, record)| Row {
            table: self,
            record,
            number: index + 1,
        })
    }

    /// Check if a column exists in the table
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// One data row addressed by trimmed column name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a CsvTable,
    record: &'a StringRecord,
    number: usize,
}

impl<'a> Row<'a> {
    /// 1-based position among the data rows
    pub fn number(&self) -> usize {
        self.number
    }

    /// Raw cell text for a column, untrimmed
    pub fn get(&self, column_name: &str) -> Result<&'a str> {
        let index = self
            .table
            .name_to_index
            .get(column_name)
            .ok_or_else(|| {
                Error::missing_column(self.table.category.to_string(), column_name, self.number)
            })?;

        Ok(self.record.get(*index).unwrap_or(""))
    }

    /// The `Name` cell when it has any non-whitespace content
    pub fn name(&self) -> Result<Option<&'a str>> {
        let name = self.get(NAME_COLUMN)?;
        Ok(if name.trim().is_empty() { None } else { Some(name) })
    }

    /// Check if every cell in the row is blank
    pub fn is_blank(&self) -> bool {
        self.record.iter().all(|cell| cell.trim().is_empty())
    }

    /// Build a flat field map from `(column, field)` pairs
    pub fn map_fields(&self, mappings: &[(&str, &str)]) -> Result<FieldMap> {
        mappings
            .iter()
            .map(|(column, field)| -> Result<(String, Value)> {
                Ok((field.to_string(), value_or_null(self.get(column)?)))
            })
            .collect()
    }
}

/// Trim a header name, including a UTF-8 byte order mark left by some exporters
fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}
