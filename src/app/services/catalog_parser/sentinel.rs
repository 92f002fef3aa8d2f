//! "Not applicable" cell normalization

use crate::constants::NULL_SENTINELS;
use serde_json::Value;

/// Check if a raw cell is one of the closed set of null sentinels
///
/// Membership is exact: `"NA"` and `"na"` are sentinels, `"Na"` and `"0"` are not.
pub fn is_null_sentinel(raw: &str) -> bool {
    NULL_SENTINELS.contains(&raw)
}

/// Map a raw cell to JSON null or to the unchanged string
pub fn value_or_null(raw: &str) -> Value {
    if is_null_sentinel(raw) {
        Value::Null
    } else {
        Value::String(raw.to_string())
    }
}
