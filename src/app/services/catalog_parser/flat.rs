//! Shared parsing for categories where each row is its own record

use super::field_mapper::insert_field;
use super::identifier::derive_identifier;
use super::row::CsvTable;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Category, FlatRecord};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Parse a table where every non-blank row is an independent record
///
/// Each row needs a `Name`; a later row with the same derived identifier
/// replaces the earlier record.
pub(super) fn parse_flat_records(
    text: &str,
    category: Category,
    mappings: &[(&str, &str)],
) -> Result<ParseResult<FlatRecord>> {
    let table = CsvTable::parse(text, category)?;
    let mut records = BTreeMap::new();
    let mut stats = ParseStats::new();

    for row in table.rows() {
        stats.rows_read += 1;

        if row.is_blank() {
            stats.rows_skipped += 1;
            continue;
        }

        let name = row
            .name()?
            .ok_or_else(|| Error::missing_name(category.to_string(), row.number()))?;
        let uid = derive_identifier(name);

        let mut record = FlatRecord::new(name, &uid);
        for (source_field, destination_field) in mappings {
            insert_field(
                record.fields_mut(),
                row.get(source_field)?,
                source_field,
                destination_field,
            )?;
        }

        if records.insert(uid.clone(), record).is_some() {
            debug!("{} entry '{}' replaces an earlier entry", category, uid);
            stats.record_duplicate(&uid);
        }
        stats.records_created += 1;
    }

    Ok(ParseResult { records, stats })
}
