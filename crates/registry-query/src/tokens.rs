//! Token tree flattening.
//!
//! A node is a token leaf iff it is an object carrying a `value` field.
//! Other objects are groups and are walked recursively. Scalars and arrays
//! that are not leaves are dropped from the flat projection.
//!
//! Flattening is recomputed on every query. There is no cache, so cost grows
//! linearly with the size of the tree on each call.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ordered::OrderedMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatToken {
    pub path: String,
    pub value: Value,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Always the first segment of `path`.
    pub category: String,
}

/// Returns the category of a token path: its first dot segment.
pub fn category_of(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}

/// Flattens a token tree into path-addressed entries in document order.
pub fn flatten_tokens(tree: &Value) -> OrderedMap<FlatToken> {
    let mut flat = OrderedMap::new();
    if let Value::Object(entries) = tree {
        flatten_into(entries, "", &mut flat);
    }
    log::trace!("flattened token tree into {} entries", flat.len());
    flat
}

fn flatten_into(entries: &Map<String, Value>, prefix: &str, flat: &mut OrderedMap<FlatToken>) {
    for (key, node) in entries {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let Value::Object(fields) = node else {
            continue;
        };
        match fields.get("value") {
            Some(value) => {
                let token = leaf_token(path.as_str(), value, fields);
                flat.insert(path, token);
            }
            None => flatten_into(fields, path.as_str(), flat),
        }
    }
}

fn leaf_token(path: &str, value: &Value, fields: &Map<String, Value>) -> FlatToken {
    FlatToken {
        path: path.to_string(),
        value: value.clone(),
        token_type: fields
            .get("type")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        category: category_of(path).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "colors": {
                "primary": { "value": "#0066cc", "type": "color", "description": "Brand" },
                "neutral": {
                    "100": { "value": "#f5f5f5", "type": "color" },
                    "900": { "value": "#111111", "type": "color", "category": "ignored" }
                }
            },
            "spacing": {
                "sm": { "value": 4, "type": "dimension" },
                "scale": [4, 8, 16],
                "base": 8
            },
            "loose": "not a token"
        })
    }

    #[test]
    fn flattens_in_document_order() {
        let flat = flatten_tokens(&tree());
        assert_eq!(
            flat.keys().collect::<Vec<_>>(),
            vec![
                "colors.primary",
                "colors.neutral.100",
                "colors.neutral.900",
                "spacing.sm"
            ]
        );
    }

    #[test]
    fn category_is_first_path_segment_at_any_depth() {
        let flat = flatten_tokens(&tree());
        for (path, token) in flat.iter() {
            assert_eq!(token.category, path.split('.').next().unwrap());
            assert_eq!(token.path, path);
        }
        assert_eq!(flat.get("colors.neutral.900").unwrap().category, "colors");
    }

    #[test]
    fn drops_untyped_scalars_and_arrays() {
        let flat = flatten_tokens(&tree());
        assert!(!flat.contains_key("spacing.scale"));
        assert!(!flat.contains_key("spacing.base"));
        assert!(!flat.contains_key("loose"));
    }

    #[test]
    fn copies_leaf_fields() {
        let flat = flatten_tokens(&tree());
        let primary = flat.get("colors.primary").unwrap();
        assert_eq!(primary.value, json!("#0066cc"));
        assert_eq!(primary.token_type.as_deref(), Some("color"));
        assert_eq!(primary.description.as_deref(), Some("Brand"));
    }

    #[test]
    fn null_value_field_still_marks_a_leaf() {
        let flat = flatten_tokens(&json!({ "misc": { "unset": { "value": null } } }));
        assert_eq!(flat.get("misc.unset").unwrap().value, Value::Null);
    }

    #[test]
    fn non_object_tree_is_empty() {
        assert!(flatten_tokens(&Value::Null).is_empty());
        assert!(flatten_tokens(&json!([1, 2])).is_empty());
    }

    #[test]
    fn category_of_single_segment() {
        assert_eq!(category_of("radius"), "radius");
        assert_eq!(category_of("a.b.c"), "a");
    }
}
