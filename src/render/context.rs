use minijinja::Value;
use serde_json::Map;

/// Convert a merged data map into a template context.
pub fn build_context(variables: &Map<String, serde_json::Value>) -> Value {
    Value::from_serialize(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_context_exposes_keys() {
        let mut variables = Map::new();
        variables.insert("title".into(), json!("Home"));
        variables.insert("nav".into(), json!({ "items": [1, 2] }));

        let context = build_context(&variables);
        assert_eq!(
            context.get_attr("title").unwrap().as_str(),
            Some("Home")
        );
        assert_eq!(
            context
                .get_attr("nav")
                .unwrap()
                .get_attr("items")
                .unwrap()
                .len(),
            Some(2)
        );
    }
}
