//! Pipeline Parameters
//!
//! Loads the per-run parameter file (a YAML key-value document) and
//! resolves the `{globus_root}` placeholder inside string values. The
//! resolved document is serialized to JSON and embedded verbatim in the
//! launch payload as `paramsText`.

use std::fs;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::error::SeqeraError;

/// Placeholder token replaced with the resolved base path.
pub const GLOBUS_ROOT_TOKEN: &str = "{globus_root}";

/// Loads a parameter file into a JSON object.
///
/// The file is YAML on disk; values survive as-is (strings, numbers,
/// booleans, nested structures).
pub fn load_params(path: &str) -> Result<Map<String, Value>, SeqeraError> {
    let content = fs::read_to_string(path).map_err(|e| SeqeraError::ParamsIo {
        path: path.to_string(),
        source: e,
    })?;

    debug!("Params file loaded ({} bytes)", content.len());

    let params: Map<String, Value> =
        serde_yaml::from_str(&content).map_err(|e| SeqeraError::ParamsFormat {
            path: path.to_string(),
            source: e,
        })?;

    info!("Parsed {} parameters from: {}", params.len(), path);
    Ok(params)
}

/// Replaces every `{globus_root}` occurrence in string values with the
/// given base path. Non-string values pass through unchanged.
///
/// The substitution is idempotent: resolving an already-resolved document
/// with the same base path is a no-op.
pub fn resolve_placeholders(params: &Map<String, Value>, globus_root: &str) -> Map<String, Value> {
    params
        .iter()
        .map(|(key, value)| {
            let resolved = match value {
                Value::String(s) => Value::String(s.replace(GLOBUS_ROOT_TOKEN, globus_root)),
                other => other.clone(),
            };
            (key.clone(), resolved)
        })
        .collect()
}
