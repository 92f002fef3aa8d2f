//! Fixtures table parser

use super::flat::parse_flat_records;
use super::stats::ParseResult;
use crate::Result;
use crate::app::models::{Category, FlatRecord};
use crate::constants::FIXTURE_FIELDS;
use tracing::info;

/// Parse the fixtures table into fixtures keyed by identifier
///
/// Loading units and flow rates land in nested groupings
/// (`loadingUnits.as3500.cold`, `qLS.hot`, ...); the remaining fields are flat.
pub fn parse_fixtures(text: &str) -> Result<ParseResult<FlatRecord>> {
    let result = parse_flat_records(text, Category::Fixtures, FIXTURE_FIELDS)?;

    info!(
        "Parsed {} fixtures from {} rows",
        result.records.len(),
        result.stats.rows_read
    );

    Ok(result)
}
