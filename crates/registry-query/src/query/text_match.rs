//! String-form rendering and case-insensitive text comparisons.

use serde_json::Value;

/// Renders a value the way it is compared as text.
///
/// Arrays join their elements with `,` (null elements render empty);
/// objects render as compact JSON.
pub fn string_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => int.to_string(),
            (None, Some(uint), _) => uint.to_string(),
            (None, None, Some(float)) => float.to_string(),
            (None, None, None) => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatchKind {
    Substr,
    Prefix,
    Suffix,
}

/// Compares `candidate` against `needle` ignoring case.
pub fn text_matches_ignore_case(kind: TextMatchKind, candidate: &str, needle: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let needle = needle.to_lowercase();
    match kind {
        TextMatchKind::Substr => candidate.contains(needle.as_str()),
        TextMatchKind::Prefix => candidate.starts_with(needle.as_str()),
        TextMatchKind::Suffix => candidate.ends_with(needle.as_str()),
    }
}
