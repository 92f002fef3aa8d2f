//! Catalog assembly from the four category tables
//!
//! The assembler runs every category parser over its own CSV text and gathers
//! the results into one [`CatalogDocument`] stamped with the time of assembly.
//! The time source is injected so tests can pin `lastModified`.

use crate::app::models::{Category, CatalogDocument};
use crate::app::services::catalog_parser::{
    ParseStats, parse_fixtures, parse_mixing_valves, parse_pipe_materials, parse_valves,
};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Source of the `lastModified` timestamp
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// A clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Raw CSV text for each category, already read from wherever it lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSources {
    pub pipe_materials: String,
    pub valves: String,
    pub fixtures: String,
    pub mixing_valves: String,
}

impl CatalogSources {
    /// Text for one category
    pub fn text(&self, category: Category) -> &str {
        match category {
            Category::Pipes => &self.pipe_materials,
            Category::Valves => &self.valves,
            Category::Fixtures => &self.fixtures,
            Category::MixingValves => &self.mixing_valves,
        }
    }
}

/// An assembled document with the statistics of every category parse
#[derive(Debug, Clone)]
pub struct Assembly {
    pub document: CatalogDocument,
    pub stats: BTreeMap<Category, ParseStats>,
}

impl Assembly {
    /// Total number of identifiers that replaced an earlier record
    pub fn duplicate_count(&self) -> usize {
        self.stats
            .values()
            .map(|stats| stats.duplicate_identifiers.len())
            .sum()
    }
}

/// Catalog assembler with an injected clock
#[derive(Debug, Clone)]
pub struct CatalogAssembler<C: Clock = SystemClock> {
    clock: C,
    warn_on_duplicates: bool,
}

impl Default for CatalogAssembler<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> CatalogAssembler<C> {
    /// Create an assembler reading time from `clock`
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            warn_on_duplicates: true,
        }
    }

    /// Enable or disable warnings for duplicate identifiers
    pub fn with_duplicate_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_duplicates = enabled;
        self
    }

    /// Parse all four categories and assemble the catalog
    ///
    /// Any category failing aborts the whole assembly.
    pub fn assemble(&self, sources: &CatalogSources) -> Result<Assembly> {
        let pipes = parse_pipe_materials(&sources.pipe_materials)?;
        let valves = parse_valves(&sources.valves)?;
        let fixtures = parse_fixtures(&sources.fixtures)?;
        let mixing_valves = parse_mixing_valves(&sources.mixing_valves)?;

        let last_modified = self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, false);
        debug!("Stamping catalog with lastModified={}", last_modified);

        let stats = BTreeMap::from([
            (Category::Pipes, pipes.stats),
            (Category::Valves, valves.stats),
            (Category::Fixtures, fixtures.stats),
            (Category::MixingValves, mixing_valves.stats),
        ]);
        self.report_duplicates(&stats);

        let document = CatalogDocument {
            last_modified,
            pipes: pipes.records,
            valves: valves.records,
            fixtures: fixtures.records,
            mixing_valves: mixing_valves.records,
        };

        info!(
            "Assembled catalog: {} pipes, {} valves, {} fixtures, {} mixing valves",
            document.pipes.len(),
            document.valves.len(),
            document.fixtures.len(),
            document.mixing_valves.len()
        );

        Ok(Assembly { document, stats })
    }

    /// Parse one category on its own, returning its records as JSON
    pub fn parse_category(&self, category: Category, text: &str) -> Result<(Value, ParseStats)> {
        let (records, stats) = match category {
            Category::Pipes => {
                let result = parse_pipe_materials(text)?;
                (serde_json::to_value(result.records), result.stats)
            }
            Category::Valves => {
                let result = parse_valves(text)?;
                (serde_json::to_value(result.records), result.stats)
            }
            Category::Fixtures => {
                let result = parse_fixtures(text)?;
                (serde_json::to_value(result.records), result.stats)
            }
            Category::MixingValves => {
                let result = parse_mixing_valves(text)?;
                (serde_json::to_value(result.records), result.stats)
            }
        };

        let records = records.map_err(|e| {
            Error::serialization(format!("Failed to convert {} to JSON", category), e)
        })?;
        self.report_duplicates(&BTreeMap::from([(category, stats.clone())]));

        Ok((records, stats))
    }

    fn report_duplicates(&self, stats: &BTreeMap<Category, ParseStats>) {
        if !self.warn_on_duplicates {
            return;
        }

        for (category, category_stats) in stats {
            for uid in &category_stats.duplicate_identifiers {
                warn!(
                    "Duplicate identifier '{}' in {}: the later row replaced the earlier one",
                    uid, category
                );
            }
        }
    }
}

/// Assemble a catalog with the given clock and default settings
pub fn assemble_catalog(sources: &CatalogSources, clock: &impl Clock) -> Result<CatalogDocument> {
    let assembly = CatalogAssembler::new(clock).assemble(sources)?;
    Ok(assembly.document)
}
