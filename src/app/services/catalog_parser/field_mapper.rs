//! Field insertion along backslash-delimited destination paths
//!
//! A mapping entry such as `Q (l/s)\Cold` -> `qLS\cold` writes the cell into
//! `{"qLS": {"cold": ...}}`, creating the `qLS` grouping on first use.

use super::sentinel::value_or_null;
use crate::app::models::FieldMap;
use crate::constants::PATH_DELIMITER;
use crate::{Error, Result};
use serde_json::Value;

/// Write a sentinel-normalized cell into `target` at `destination_field`
///
/// `source_field` and `destination_field` must contain the same number of
/// delimiters; otherwise the mapping table is misconfigured and a
/// [`Error::StructureMismatch`] is returned without touching `target`.
pub fn insert_field(
    target: &mut FieldMap,
    raw_value: &str,
    source_field: &str,
    destination_field: &str,
) -> Result<()> {
    if depth(source_field) != depth(destination_field) {
        return Err(Error::structure_mismatch(source_field, destination_field));
    }

    insert_at(target, raw_value, source_field, destination_field)
}

fn insert_at(target: &mut FieldMap, raw_value: &str, source: &str, destination: &str) -> Result<()> {
    match (
        destination.split_once(PATH_DELIMITER),
        source.split_once(PATH_DELIMITER),
    ) {
        (Some((head, destination_tail)), Some((_, source_tail))) => {
            let nested = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(FieldMap::new()));

            match nested {
                Value::Object(map) => insert_at(map, raw_value, source_tail, destination_tail),
                // A leaf already occupies the grouping name
                _ => Err(Error::structure_mismatch(source, destination)),
            }
        }
        (None, None) => {
            target.insert(destination.to_string(), value_or_null(raw_value));
            Ok(())
        }
        _ => Err(Error::structure_mismatch(source, destination)),
    }
}

fn depth(field: &str) -> usize {
    field.matches(PATH_DELIMITER).count()
}
