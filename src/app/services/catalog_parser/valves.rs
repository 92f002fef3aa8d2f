//! Valves table parser
//!
//! Same grouping as the pipe materials table, with the valve abbreviation
//! captured once from the row that starts each group.

use super::identifier::derive_identifier;
use super::row::{CsvTable, Row};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Category, Valve, ValveSize};
use crate::constants::{ABBREVIATION_COLUMN, SIZE_COLUMN, VALVE_SIZE_FIELDS};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Parse the valves table into valves keyed by identifier
pub fn parse_valves(text: &str) -> Result<ParseResult<Valve>> {
    let table = CsvTable::parse(text, Category::Valves)?;

    let valves = table
        .rows()
        .try_fold(ValveFold::default(), |mut fold, row| {
            fold.push(row)?;
            Ok::<_, Error>(fold)
        })?;

    info!(
        "Parsed {} valves with {} sizes from {} rows",
        valves.records.len(),
        valves.stats.size_variants,
        valves.stats.rows_read
    );

    Ok(ParseResult {
        records: valves.records,
        stats: valves.stats,
    })
}

#[derive(Debug, Default)]
struct ValveFold {
    records: BTreeMap<String, Valve>,
    current: Option<String>,
    stats: ParseStats,
}

impl ValveFold {
    fn push(&mut self, row: Row<'_>) -> Result<()> {
        self.stats.rows_read += 1;

        if let Some(name) = row.name()? {
            let uid = derive_identifier(name);
            let abbreviation = row.get(ABBREVIATION_COLUMN)?;
            let previous = self
                .records
                .insert(uid.clone(), Valve::new(name, uid.as_str(), abbreviation));
            if previous.is_some() {
                debug!("Valve '{}' replaces an earlier entry", uid);
                self.stats.record_duplicate(&uid);
            }
            self.stats.records_created += 1;
            self.current = Some(uid);
        }

        let uid = self
            .current
            .as_deref()
            .ok_or_else(|| Error::missing_group(Category::Valves.to_string(), row.number()))?;
        let valve = self
            .records
            .get_mut(uid)
            .ok_or_else(|| Error::missing_group(Category::Valves.to_string(), row.number()))?;

        let size = row.get(SIZE_COLUMN)?.to_string();
        let variant = ValveSize {
            fields: row.map_fields(VALVE_SIZE_FIELDS)?,
            valve_uid: uid.to_string(),
        };
        valve.valves_by_size.insert(size, variant);
        self.stats.size_variants += 1;

        Ok(())
    }
}
