//! JSON input from files or stdin.

use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;

/// Read a JSON document from a path, or from stdin when the path is `-`.
pub fn read_json(path: &str) -> Result<Value> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON file '{}'", path))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in '{}'", path))
    }
}

/// Like [`read_json`], but the document must be a JSON object.
pub fn read_json_object(path: &str) -> Result<Value> {
    let value = read_json(path)?;
    anyhow::ensure!(value.is_object(), "Expected a JSON object in '{}'", path);
    Ok(value)
}
