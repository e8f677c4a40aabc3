//! JSON input loading for the command-line front end

use bopt_common::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Read and deserialize one JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    debug!(path = %path.display(), bytes = content.len(), "Read JSON input");
    Ok(value)
}

/// Like [`read_json`], passing through an absent path
pub fn read_optional_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<Option<T>> {
    path.map(read_json::<T>).transpose()
}

/// Accept a measured value only when it is a finite number
pub fn finite_reading(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

/// Serialize a report for stdout
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from)
}
