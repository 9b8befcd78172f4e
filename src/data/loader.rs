use std::path::Path;

use serde_json::{Map, Value};

use super::rhai_runtime;
use crate::error::{LetterpressError, Result};

/// The kind of a data file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Json,
    /// A Rhai script whose final expression is an object map.
    Script,
}

impl DataKind {
    /// `.rhai` files are scripts, everything else is parsed as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("rhai") => DataKind::Script,
            _ => DataKind::Json,
        }
    }
}

/// Load a JSON or Rhai data file into a key/value map.
///
/// Rhai data files are executed without sandboxing. Only load scripts that
/// belong to the project being rendered.
pub fn load_data_file(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| LetterpressError::DataRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value = match DataKind::from_path(path) {
        DataKind::Json => {
            serde_json::from_str(&content).map_err(|e| LetterpressError::DataParse {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        DataKind::Script => rhai_runtime::eval_script(path, &content)?,
    };

    tracing::debug!(path = %path.display(), "loaded data file");

    match value {
        Value::Object(map) => Ok(map),
        other => Err(LetterpressError::DataType {
            path: path.to_path_buf(),
            found: json_type_name(&other).to_string(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
