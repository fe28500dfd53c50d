//! JSON layer merge
//!
//! Used for stacking default layers and for patching `package.json`:
//! - Objects: deep-merge by key
//! - Arrays: REPLACE (last wins)
//! - Scalars: override (last wins)
//!
//! Settings lists follow their own concatenation rules in
//! [`crate::settings::ConfigMerger`]; this module never concatenates.

use serde_json::Value;

/// Deep merge two JSON values.
///
/// Merge semantics:
/// - Objects: deep-merge by key (recursive); new keys keep overlay order
/// - Arrays: REPLACE (second wins entirely)
/// - Scalars: override (second wins)
/// - Null: override (null can override any value)
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value.take(), overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        (Value::Array(_), overlay @ Value::Array(_)) => overlay,

        (_, overlay) => overlay,
    }
}

/// Merge multiple layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let base = json!({"babel": true});
        let overlay = json!({"babel": false});
        let result = deep_merge(base, overlay);
        assert_eq!(result["babel"], false);
    }

    #[test]
    fn test_object_deep_merge() {
        let base = json!({
            "name": "my-app",
            "scripts": {
                "test": "mocha",
                "lint": "jshint ."
            }
        });
        let overlay = json!({
            "scripts": {
                "lint": "eslint ."
            }
        });
        let result = deep_merge(base, overlay);

        assert_eq!(result["scripts"]["lint"], "eslint .");
        assert_eq!(result["scripts"]["test"], "mocha");
        assert_eq!(result["name"], "my-app");
    }

    #[test]
    fn test_existing_key_order_preserved() {
        let base = json!({"name": "my-app", "version": "1.0.0", "scripts": {}});
        let overlay = json!({"version": "2.0.0", "eslintConfig": {}});
        let result = deep_merge(base, overlay);

        let keys: Vec<_> = result.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "version", "scripts", "eslintConfig"]);
    }

    #[test]
    fn test_array_replace() {
        let base = json!({"envs": ["node", "browser", "jquery"]});
        let overlay = json!({"envs": ["mocha"]});
        let result = deep_merge(base, overlay);

        let envs = result["envs"].as_array().unwrap();
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0], "mocha");
    }

    #[test]
    fn test_null_override() {
        let base = json!({"extends": "eslint:recommended"});
        let overlay = json!({"extends": null});
        let result = deep_merge(base, overlay);

        assert!(result["extends"].is_null());
    }

    #[test]
    fn test_merge_layers() {
        let builtin = json!({
            "babel": true,
            "lint_script": "eslint ."
        });
        let project = json!({
            "lint_script": "eslint src test"
        });

        let result = merge_layers(vec![builtin, project]);

        assert_eq!(result["babel"], true);
        assert_eq!(result["lint_script"], "eslint src test");
    }
}
