//! CSV catalog parser for plumbing reference tables
//!
//! This module turns the raw CSV text of each catalog category into a mapping
//! keyed by derived identifier. Parsing is pure: every function takes the CSV
//! text and returns records plus statistics, with no shared state between
//! categories.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`identifier`] - Camel-case identifier derivation from display names
//! - [`sentinel`] - "Not applicable" cell normalization
//! - [`field_mapper`] - Nested field insertion for delimited column names
//! - [`row`] - Header trimming and column lookup per data row
//! - [`pipe_materials`] / [`valves`] - Grouped parsers with size variants
//! - [`fixtures`] / [`mixing_valves`] - Flat one-row-per-record parsers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use plumbing_catalog::app::services::catalog_parser::parse_pipe_materials;
//!
//! # fn example() -> plumbing_catalog::Result<()> {
//! let csv = "Name,Size (DN),Internal Diameter (mm),Colebrook White Coefficient,Safe Working Pressure (kPa)\n\
//!            Copper,15,13.84,0.0015,2000\n\
//!            ,20,19.94,0.0015,2000\n";
//! let result = parse_pipe_materials(csv)?;
//!
//! assert_eq!(result.records["copper"].pipes_by_size.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod field_mapper;
pub mod fixtures;
mod flat;
pub mod identifier;
pub mod mixing_valves;
pub mod pipe_materials;
pub mod row;
pub mod sentinel;
pub mod stats;
pub mod valves;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_mapper::insert_field;
pub use fixtures::parse_fixtures;
pub use identifier::derive_identifier;
pub use mixing_valves::parse_mixing_valves;
pub use pipe_materials::parse_pipe_materials;
pub use row::{CsvTable, Row};
pub use sentinel::{is_null_sentinel, value_or_null};
pub use stats::{ParseResult, ParseStats};
pub use valves::parse_valves;
