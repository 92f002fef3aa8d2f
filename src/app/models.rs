//! Data models for the plumbing catalog
//!
//! This module contains the record types emitted for each catalog category and
//! the top-level document that gathers them. Engineering quantities are carried
//! as the raw cell text (or null); no numeric coercion happens here.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Mapping of field name to normalized cell value (string or null), possibly nested
pub type FieldMap = serde_json::Map<String, Value>;

// =============================================================================
// Catalog Categories
// =============================================================================

/// The four sections of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Pipe materials with per-size variants
    Pipes,
    /// Valves with per-size variants
    Valves,
    /// Fixtures, one record per row
    Fixtures,
    /// Mixing valves, one record per row
    MixingValves,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 4] = [
        Category::Pipes,
        Category::Valves,
        Category::Fixtures,
        Category::MixingValves,
    ];

    /// Key used for this category in the catalog document
    pub fn document_key(self) -> &'static str {
        match self {
            Category::Pipes => "pipes",
            Category::Valves => "valves",
            Category::Fixtures => "fixtures",
            Category::MixingValves => "mixingValves",
        }
    }

    /// Name accepted on the command line
    pub fn cli_name(self) -> &'static str {
        match self {
            Category::Pipes => "pipes",
            Category::Valves => "valves",
            Category::Fixtures => "fixtures",
            Category::MixingValves => "mixing-valves",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Pipes => "pipe materials",
            Category::Valves => "valves",
            Category::Fixtures => "fixtures",
            Category::MixingValves => "mixing valves",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pipes" | "pipe-materials" => Ok(Category::Pipes),
            "valves" => Ok(Category::Valves),
            "fixtures" => Ok(Category::Fixtures),
            "mixing-valves" | "mixingvalves" => Ok(Category::MixingValves),
            _ => Err(Error::usage(format!(
                "Unknown category '{}'. Available categories: pipes, valves, fixtures, mixing-valves",
                s
            ))),
        }
    }
}

// =============================================================================
// Size-Variant Categories
// =============================================================================

/// A pipe material and its nominal-size variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeMaterial {
    /// Display name exactly as it appeared in the table
    pub name: String,

    /// Identifier derived from `name`
    pub uid: String,

    /// Variants keyed by the literal `Size (DN)` cell
    #[serde(rename = "pipesBySize")]
    pub pipes_by_size: BTreeMap<String, PipeSize>,
}

impl PipeMaterial {
    /// Start a material with no size variants yet
    pub fn new(name: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
            pipes_by_size: BTreeMap::new(),
        }
    }
}

/// One nominal size of a pipe material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSize {
    /// Mapped engineering parameters
    #[serde(flatten)]
    pub fields: FieldMap,

    /// Identifier of the owning material
    #[serde(rename = "pipeUid")]
    pub pipe_uid: String,
}

impl PipeSize {
    /// Look up a mapped field as text (None when absent or null)
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// A valve type and its nominal-size variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valve {
    pub name: String,
    pub uid: String,

    /// Taken from the row that starts the valve group
    pub abbreviation: String,

    #[serde(rename = "valvesBySize")]
    pub valves_by_size: BTreeMap<String, ValveSize>,
}

impl Valve {
    pub fn new(
        name: impl Into<String>,
        uid: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            uid: uid.into(),
            abbreviation: abbreviation.into(),
            valves_by_size: BTreeMap::new(),
        }
    }
}

/// One nominal size of a valve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValveSize {
    #[serde(flatten)]
    pub fields: FieldMap,

    #[serde(rename = "valveUid")]
    pub valve_uid: String,
}

impl ValveSize {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

// =============================================================================
// Flat Categories
// =============================================================================

/// A fixture or mixing valve: one row, one record
///
/// Every key lives in a single map so nested groupings produced by the field
/// mapper (e.g. `loadingUnits.as3500.cold`) sit next to `name` and `uid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: FieldMap,
}

impl FlatRecord {
    /// Create a record carrying only its name and identifier
    pub fn new(name: &str, uid: &str) -> Self {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("uid".to_string(), Value::String(uid.to_string()));
        Self { fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn uid(&self) -> Option<&str> {
        self.fields.get("uid").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldMap {
        &mut self.fields
    }

    /// Walk nested groupings, e.g. `lookup(&["qLS", "cold"])`
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.fields.get(*first)?, |value, segment| value.get(segment))
    }
}

// =============================================================================
// Catalog Document
// =============================================================================

/// The assembled catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// ISO-8601 timestamp taken when the document was assembled
    pub last_modified: String,
    pub pipes: BTreeMap<String, PipeMaterial>,
    pub valves: BTreeMap<String, Valve>,
    pub fixtures: BTreeMap<String, FlatRecord>,
    pub mixing_valves: BTreeMap<String, FlatRecord>,
}

impl CatalogDocument {
    /// Number of top-level records in a category
    pub fn record_count(&self, category: Category) -> usize {
        match category {
            Category::Pipes => self.pipes.len(),
            Category::Valves => self.valves.len(),
            Category::Fixtures => self.fixtures.len(),
            Category::MixingValves => self.mixing_valves.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("pipes").unwrap(), Category::Pipes);
        assert_eq!(Category::from_str("Valves").unwrap(), Category::Valves);
        assert_eq!(
            Category::from_str(" mixing-valves ").unwrap(),
            Category::MixingValves
        );
        assert!(Category::from_str("boilers").is_err());
    }

    #[test]
    fn test_category_document_keys() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.document_key()).collect();
        assert_eq!(keys, vec!["pipes", "valves", "fixtures", "mixingValves"]);

        for category in Category::ALL {
            assert_eq!(Category::from_str(category.cli_name()).unwrap(), category);
        }
    }

    #[test]
    fn test_pipe_size_serialization_flattens_fields() {
        let mut fields = FieldMap::new();
        fields.insert("diameterNominalMM".to_string(), json!("15"));
        fields.insert("colebrookWhiteCoefficient".to_string(), Value::Null);
        let size = PipeSize {
            fields,
            pipe_uid: "copper".to_string(),
        };

        let value = serde_json::to_value(&size).unwrap();
        assert_eq!(
            value,
            json!({
                "diameterNominalMM": "15",
                "colebrookWhiteCoefficient": null,
                "pipeUid": "copper"
            })
        );
        assert_eq!(size.field("diameterNominalMM"), Some("15"));
        assert_eq!(size.field("colebrookWhiteCoefficient"), None);
    }

    #[test]
    fn test_flat_record_lookup() {
        let mut record = FlatRecord::new("Basin", "basin");
        record
            .fields_mut()
            .insert("qLS".to_string(), json!({"cold": "0.1", "hot": null}));

        assert_eq!(record.name(), Some("Basin"));
        assert_eq!(record.uid(), Some("basin"));
        assert_eq!(record.lookup(&["qLS", "cold"]), Some(&json!("0.1")));
        assert_eq!(record.lookup(&["qLS", "hot"]), Some(&Value::Null));
        assert_eq!(record.lookup(&["qLS", "warm"]), None);
        assert_eq!(record.lookup(&[]), None);
    }

    #[test]
    fn test_document_serializes_camel_case_keys() {
        let document = CatalogDocument {
            last_modified: "2024-01-01T00:00:00+00:00".to_string(),
            pipes: BTreeMap::new(),
            valves: BTreeMap::new(),
            fixtures: BTreeMap::new(),
            mixing_valves: BTreeMap::new(),
        };

        let value = serde_json::to_value(&document).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["fixtures", "lastModified", "mixingValves", "pipes", "valves"]
        );
        assert_eq!(document.record_count(Category::Fixtures), 0);
    }
}
