pub mod loader;
pub mod locate;
mod rhai_runtime;

use std::path::Path;

use serde_json::{Map, Value};

use crate::config::DataSource;
use crate::error::Result;

pub use loader::{load_data_file, DataKind};
pub use locate::{locate_companion, COMPANION_SUFFIXES};

pub const ENVIRONMENT_KEY: &str = "environment";
pub const ENVIRONMENT_DEV: &str = "dev";
pub const ENVIRONMENT_PROD: &str = "prod";

/// Build the context for one render.
///
/// Layers, lowest precedence first: the `environment` global, the companion
/// file, an external data file, inline data. Merging is shallow: a key from a
/// higher layer replaces the lower value wholesale, nested objects included.
pub fn merge_context(
    data: &DataSource,
    companion: Option<&Path>,
    optimize: bool,
) -> Result<Map<String, Value>> {
    let environment = if optimize {
        ENVIRONMENT_PROD
    } else {
        ENVIRONMENT_DEV
    };

    let mut context = Map::new();
    context.insert(ENVIRONMENT_KEY.to_string(), Value::from(environment));

    if let Some(path) = companion {
        context.extend(load_data_file(path)?);
    }

    match data {
        DataSource::Absent => {}
        DataSource::ExternalPath(path) => context.extend(load_data_file(path)?),
        DataSource::Inline(map) => context.extend(map.clone()),
    }

    tracing::debug!(keys = context.len(), environment, "merged render context");
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn inline(value: Value) -> DataSource {
        DataSource::from_value(&value).unwrap()
    }

    #[test]
    fn test_environment_defaults_to_dev() {
        let context = merge_context(&DataSource::Absent, None, false).unwrap();
        assert_eq!(context.len(), 1);
        assert_eq!(context[ENVIRONMENT_KEY], ENVIRONMENT_DEV);
    }

    #[test]
    fn test_environment_prod_when_optimized() {
        let context = merge_context(&DataSource::Absent, None, true).unwrap();
        assert_eq!(context[ENVIRONMENT_KEY], ENVIRONMENT_PROD);
    }

    #[test]
    fn test_inline_overrides_environment() {
        let data = inline(json!({ "environment": "staging" }));
        let context = merge_context(&data, None, true).unwrap();
        assert_eq!(context[ENVIRONMENT_KEY], "staging");
    }

    #[test]
    fn test_precedence_inline_over_external_over_companion() {
        let dir = tempfile::tempdir().unwrap();
        let companion = dir.path().join("page.data.json");
        let external = dir.path().join("site.json");
        fs::write(
            &companion,
            r#"{"k": "companion", "from_companion": true, "shared": "companion"}"#,
        )
        .unwrap();
        fs::write(&external, r#"{"k": "external", "shared": "external"}"#).unwrap();

        let context = merge_context(
            &DataSource::ExternalPath(external.clone()),
            Some(&companion),
            false,
        )
        .unwrap();
        assert_eq!(context["k"], "external");
        assert_eq!(context["shared"], "external");
        assert_eq!(context["from_companion"], true);

        let context = merge_context(&inline(json!({ "k": "inline" })), Some(&companion), false)
            .unwrap();
        assert_eq!(context["k"], "inline");
        assert_eq!(context["shared"], "companion");
    }

    #[test]
    fn test_merge_is_shallow() {
        let dir = tempfile::tempdir().unwrap();
        let companion = dir.path().join("page.data.json");
        fs::write(&companion, r#"{"a": {"x": 1}}"#).unwrap();

        let data = inline(json!({ "a": { "y": 2 } }));
        let context = merge_context(&data, Some(&companion), false).unwrap();
        assert_eq!(context["a"], json!({ "y": 2 }));
    }

    #[test]
    fn test_companion_load_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let companion = dir.path().join("page.data.json");
        fs::write(&companion, "not json").unwrap();

        assert!(merge_context(&DataSource::Absent, Some(&companion), false).is_err());
    }

    #[test]
    fn test_missing_external_file_is_error() {
        let data = DataSource::ExternalPath("/nonexistent/site.json".into());
        assert!(merge_context(&data, None, false).is_err());
    }
}
