use std::path::Path;

use rhai::{Dynamic, Engine};
use serde_json::Value;

use crate::error::{LetterpressError, Result};

/// Create the engine used to evaluate data scripts.
///
/// Data scripts are project files and are trusted: no operation limits are
/// applied. Rhai itself has no filesystem or process access.
pub fn create_engine() -> Engine {
    Engine::new()
}

/// Evaluate a data script and convert its final expression to JSON.
pub fn eval_script(path: &Path, script: &str) -> Result<Value> {
    let engine = create_engine();

    let result: Dynamic = engine
        .eval(script)
        .map_err(|e| LetterpressError::DataEval {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !result.is_map() {
        return Err(LetterpressError::DataType {
            path: path.to_path_buf(),
            found: result.type_name().to_string(),
        });
    }

    rhai::serde::from_dynamic(&result).map_err(|e| LetterpressError::DataEval {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
