//! JSON rendering and output of the catalog
//!
//! Documents are rendered with lexicographically sorted keys at every level
//! and a configurable indentation width (0 renders compact JSON).

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Render any serializable value as JSON text ending in a newline
pub fn render<T: Serialize + ?Sized>(value: &T, indent_width: usize) -> Result<String> {
    // `Value` objects keep their keys sorted, whatever the struct field order
    let value = serde_json::to_value(value)
        .map_err(|e| Error::serialization("Failed to convert catalog to JSON", e))?;

    let mut buffer = Vec::new();
    if indent_width == 0 {
        serde_json::to_writer(&mut buffer, &value)
            .map_err(|e| Error::serialization("Failed to render catalog JSON", e))?;
    } else {
        let indent = " ".repeat(indent_width);
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
        Value::serialize(&value, &mut serializer)
            .map_err(|e| Error::serialization("Failed to render catalog JSON", e))?;
    }

    let mut rendered = String::from_utf8_lossy(&buffer).into_owned();
    rendered.push('\n');

    debug!("Rendered {} bytes of JSON", rendered.len());
    Ok(rendered)
}

/// Write rendered JSON to a file, or to standard output when no path is given
pub async fn write_output(rendered: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            tokio::fs::write(path, rendered).await.map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            info!("Wrote catalog to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| Error::io("Failed to write catalog to stdout", e))?;
        }
    }

    Ok(())
}
