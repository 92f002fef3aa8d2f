//! Pipe materials table parser
//!
//! Rows are grouped: a row with a `Name` starts a new material, and every row
//! (that one included) adds a size variant to the most recently started
//! material.

use super::identifier::derive_identifier;
use super::row::{CsvTable, Row};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{Category, PipeMaterial, PipeSize};
use crate::constants::{PIPE_SIZE_FIELDS, SIZE_COLUMN};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Parse the pipe materials table into materials keyed by identifier
pub fn parse_pipe_materials(text: &str) -> Result<ParseResult<PipeMaterial>> {
    let table = CsvTable::parse(text, Category::Pipes)?;

    let materials = table
        .rows()
        .try_fold(MaterialFold::default(), |mut fold, row| {
            fold.push(row)?;
            Ok::<_, Error>(fold)
        })?;

    info!(
        "Parsed {} pipe materials with {} sizes from {} rows",
        materials.records.len(),
        materials.stats.size_variants,
        materials.stats.rows_read
    );

    Ok(ParseResult {
        records: materials.records,
        stats: materials.stats,
    })
}

/// Accumulator carrying the current material across rows
#[derive(Debug, Default)]
struct MaterialFold {
    records: BTreeMap<String, PipeMaterial>,
    current: Option<String>,
    stats: ParseStats,
}

impl MaterialFold {
    fn push(&mut self, row: Row<'_>) -> Result<()> {
        self.stats.rows_read += 1;

        if let Some(name) = row.name()? {
            let uid = derive_identifier(name);
            let previous = self
                .records
                .insert(uid.clone(), PipeMaterial::new(name, uid.as_str()));
            if previous.is_some() {
                debug!("Pipe material '{}' replaces an earlier entry", uid);
                self.stats.record_duplicate(&uid);
            }
            self.stats.records_created += 1;
            self.current = Some(uid);
        }

        let uid = self
            .current
            .as_deref()
            .ok_or_else(|| Error::missing_group(Category::Pipes.to_string(), row.number()))?;
        let material = self
            .records
            .get_mut(uid)
            .ok_or_else(|| Error::missing_group(Category::Pipes.to_string(), row.number()))?;

        let size = row.get(SIZE_COLUMN)?.to_string();
        let variant = PipeSize {
            fields: row.map_fields(PIPE_SIZE_FIELDS)?,
            pipe_uid: uid.to_string(),
        };
        material.pipes_by_size.insert(size, variant);
        self.stats.size_variants += 1;

        Ok(())
    }
}
