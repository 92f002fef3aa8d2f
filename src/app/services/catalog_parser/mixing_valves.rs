//! Mixing valves table parser

use super::flat::parse_flat_records;
use super::stats::ParseResult;
use crate::Result;
use crate::app::models::{Category, FlatRecord};
use crate::constants::MIXING_VALVE_FIELDS;
use tracing::info;

/// Parse the mixing valves table into mixing valves keyed by identifier
pub fn parse_mixing_valves(text: &str) -> Result<ParseResult<FlatRecord>> {
    let result = parse_flat_records(text, Category::MixingValves, MIXING_VALVE_FIELDS)?;

    info!(
        "Parsed {} mixing valves from {} rows",
        result.records.len(),
        result.stats.rows_read
    );

    Ok(result)
}
