//! Dot-path property resolution over generic JSON records.

use serde_json::Value;

/// Resolves a dot path such as `props.name` or `props[0].name` against a record.
///
/// Returns `None` as soon as a segment is missing or a `null` would have to be
/// walked through. A trailing `null` is returned as-is. An
/// indexed segment `name[n]` only indexes when `name` resolves to an array;
/// anything else makes the whole path unresolved.
pub fn resolve_property<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        if current.is_null() {
            return None;
        }
        current = match parse_indexed_segment(segment) {
            Some((name, index)) => match lookup(current, name)? {
                Value::Array(items) => items.get(index)?,
                _ => return None,
            },
            None => lookup(current, segment)?,
        };
    }
    Some(current)
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Splits `name[n]` into `("name", n)`.
fn parse_indexed_segment(segment: &str) -> Option<(&str, usize)> {
    let inner = segment.strip_suffix(']')?;
    let open = inner.find('[')?;
    let name = &inner[..open];
    let digits = &inner[open + 1..];
    if name.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((name, digits.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "name": "Button",
            "category": "actions",
            "props": [
                { "name": "variant", "required": true },
                { "name": "size", "default": null }
            ],
            "meta": { "status": "stable", "owner": null }
        })
    }

    #[test]
    fn resolves_top_level_and_nested_fields() {
        let record = record();
        assert_eq!(resolve_property(&record, "name"), Some(&json!("Button")));
        assert_eq!(resolve_property(&record, "meta.status"), Some(&json!("stable")));
    }

    #[test]
    fn resolves_indexed_segments() {
        let record = record();
        assert_eq!(
            resolve_property(&record, "props[1].name"),
            Some(&json!("size"))
        );
        assert_eq!(resolve_property(&record, "props[5].name"), None);
    }

    #[test]
    fn indexing_a_non_array_is_unresolved() {
        let record = record();
        assert_eq!(resolve_property(&record, "meta[0]"), None);
        assert_eq!(resolve_property(&record, "name[0]"), None);
    }

    #[test]
    fn nullish_short_circuits() {
        let record = record();
        assert_eq!(resolve_property(&record, "meta.owner"), Some(&Value::Null));
        assert_eq!(resolve_property(&record, "meta.owner.name"), None);
        assert_eq!(resolve_property(&record, "missing.deeper.still"), None);
        assert_eq!(resolve_property(&record, "props[1].default.value"), None);
    }

    #[test]
    fn property_of_array_without_index_is_unresolved() {
        let record = record();
        assert_eq!(resolve_property(&record, "props.name"), None);
        assert_eq!(resolve_property(&record, "props.0.name"), Some(&json!("variant")));
    }

    #[test]
    fn scalars_have_no_properties() {
        let record = record();
        assert_eq!(resolve_property(&record, "name.first"), None);
    }
}
