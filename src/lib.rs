//! Plumbing Catalog Library
//!
//! A Rust library for converting plumbing-engineering reference tables
//! from CSV format into a single structured JSON catalog.
//!
//! This library provides tools for:
//! - Deriving stable camel-case identifiers from display names
//! - Mapping flat or backslash-delimited CSV columns onto nested JSON paths
//! - Normalizing "not applicable" sentinel cells to explicit nulls
//! - Grouping pipe and valve size variants under their owning record
//! - Assembling the four category mappings into one timestamped document

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_assembler;
        pub mod catalog_parser;
        pub mod catalog_writer;
        pub mod source_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Category, CatalogDocument, FlatRecord, PipeMaterial, Valve};
pub use app::services::catalog_assembler::{CatalogSources, Clock, FixedClock, SystemClock};
pub use config::CatalogConfig;

/// Result type alias for the catalog converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV text could not be read
    #[error("CSV parsing error in '{source_name}': {message}")]
    CsvParsing {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Wrong number or shape of command-line arguments
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Source and destination field names disagree on nesting depth
    #[error(
        "Field mapping '{source_field}' -> '{destination_field}' has mismatched nesting: \
         {source_depth} vs {destination_depth} delimiters"
    )]
    StructureMismatch {
        source_field: String,
        destination_field: String,
        source_depth: usize,
        destination_depth: usize,
    },

    /// A size-variant row appeared before any row that names its group
    #[error("{category}: data row {row} has no Name and no preceding group to attach to")]
    MissingGroup { category: String, row: usize },

    /// A flat-category row carries data but no Name
    #[error("{category}: data row {row} has an empty Name")]
    MissingName { category: String, row: usize },

    /// A referenced column header is absent
    #[error("{category}: column '{column}' not found (data row {row})")]
    MissingColumn {
        category: String,
        column: String,
        row: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON rendering failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a structural mapping error
    pub fn structure_mismatch(source_field: &str, destination_field: &str) -> Self {
        Self::StructureMismatch {
            source_field: source_field.to_string(),
            destination_field: destination_field.to_string(),
            source_depth: source_field.matches(constants::PATH_DELIMITER).count(),
            destination_depth: destination_field.matches(constants::PATH_DELIMITER).count(),
        }
    }

    /// Create a missing group error
    pub fn missing_group(category: impl Into<String>, row: usize) -> Self {
        Self::MissingGroup {
            category: category.into(),
            row,
        }
    }

    /// Create a missing name error
    pub fn missing_name(category: impl Into<String>, row: usize) -> Self {
        Self::MissingName {
            category: category.into(),
            row,
        }
    }

    /// Create a missing column error
    pub fn missing_column(category: impl Into<String>, column: impl Into<String>, row: usize) -> Self {
        Self::MissingColumn {
            category: category.into(),
            column: column.into(),
            row,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error should be reported with the usage text
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
