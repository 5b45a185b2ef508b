use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while building a theme or typography table from options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{what} options must be a JSON object, got {found}")]
    NotAnObject {
        what: &'static str,
        found: &'static str,
    },
}

/// Recursively merges `overrides` into `base`.
///
/// Objects merge key by key. Any other value (including arrays) replaces
/// what was there.
pub fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

/// Parses `defaults`, merges `options` over it and deserializes the result.
pub(crate) fn merge_over_defaults<T: DeserializeOwned>(
    defaults: &str,
    options: Value,
    what: &'static str,
) -> Result<T, ConfigError> {
    if !options.is_object() {
        return Err(ConfigError::NotAnObject {
            what,
            found: json_kind(&options),
        });
    }

    let mut merged: Value =
        serde_json::from_str(defaults).map_err(|source| ConfigError::Parse { what, source })?;
    merge_json(&mut merged, options);

    serde_json::from_value(merged).map_err(|source| ConfigError::Parse { what, source })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_json_is_deep() {
        let mut base = json!({
            "colors": { "primary": "#000000", "text": { "primary": "#111111", "secondary": "#222222" } },
            "spacing": { "xs": 4 }
        });

        merge_json(
            &mut base,
            json!({ "colors": { "text": { "secondary": "#333333" } }, "spacing": { "sm": 8 } }),
        );

        assert_eq!(
            base,
            json!({
                "colors": { "primary": "#000000", "text": { "primary": "#111111", "secondary": "#333333" } },
                "spacing": { "xs": 4, "sm": 8 }
            })
        );
    }

    #[test]
    fn test_merge_json_replaces_arrays_and_scalars() {
        let mut base = json!({ "family": ["Roboto", "Arial"], "size": 12 });
        merge_json(&mut base, json!({ "family": ["Inter"], "size": { "nested": true } }));
        assert_eq!(base, json!({ "family": ["Inter"], "size": { "nested": true } }));
    }

    #[test]
    fn test_non_object_options_are_rejected() {
        let result = merge_over_defaults::<Value>("{}", json!([1, 2]), "theme");
        assert!(matches!(
            result,
            Err(ConfigError::NotAnObject { what: "theme", found: "an array" })
        ));
    }
}
