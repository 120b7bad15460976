//! Filter evaluation against resolved values.

use serde_json::Value;

use crate::tokens::FlatToken;

use super::expression::{Filter, FilterOperator};
use super::path::resolve_property;
use super::text_match::{string_form, text_matches_ignore_case, TextMatchKind};

/// Token fields a token-mode filter may address.
pub const TOKEN_FILTER_PROPERTIES: [&str; 4] = ["category", "path", "value", "type"];

/// Evaluates one filter.
///
/// Component mode resolves arbitrary dot paths; token mode only knows the
/// fields in [`TOKEN_FILTER_PROPERTIES`]. Unknown operators match nothing.
#[derive(Debug, Clone, Copy)]
pub struct FilterMatcher<'a> {
    filter: &'a Filter,
}

impl<'a> FilterMatcher<'a> {
    pub fn new(filter: &'a Filter) -> Self {
        Self { filter }
    }

    /// Component mode: resolves the filter property as a dot path on `record`.
    pub fn matches_record(&self, record: &Value) -> bool {
        self.matches_value(resolve_property(record, self.filter.property.as_str()))
    }

    /// Token mode: only `category`, `path`, `value` and `type` are addressable.
    pub fn matches_token(&self, token: &FlatToken) -> bool {
        let actual = match self.filter.property.as_str() {
            "category" => Some(Value::String(token.category.clone())),
            "path" => Some(Value::String(token.path.clone())),
            "value" => Some(token.value.clone()),
            "type" => token.token_type.clone().map(Value::String),
            _ => return false,
        };
        self.matches_value(actual.as_ref())
    }

    /// Matches a mapping key (not its value) as a string.
    pub fn matches_key(&self, key: &str) -> bool {
        self.matches_value(Some(&Value::String(key.to_string())))
    }

    /// Applies the operator to an already-resolved value.
    pub fn matches_value(&self, actual: Option<&Value>) -> bool {
        let sentinel = Value::Bool(true);
        let expected = self.filter.value.literal().unwrap_or(&sentinel);

        match &self.filter.operator {
            FilterOperator::Exists => actual.is_some_and(|value| !value.is_null()),
            FilterOperator::Equals => equals_or_contains(actual, expected),
            FilterOperator::NotEquals => !equals_or_contains(actual, expected),
            FilterOperator::Contains => text_op(TextMatchKind::Substr, actual, expected),
            FilterOperator::StartsWith => text_op(TextMatchKind::Prefix, actual, expected),
            FilterOperator::EndsWith => text_op(TextMatchKind::Suffix, actual, expected),
            FilterOperator::Unsupported(_) => false,
        }
    }
}

/// Returns true when every filter matches `record` (component mode).
pub fn record_matches_all(filters: &[Filter], record: &Value) -> bool {
    filters
        .iter()
        .all(|filter| FilterMatcher::new(filter).matches_record(record))
}

fn equals_or_contains(actual: Option<&Value>, expected: &Value) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    if actual == expected || string_form(actual) == string_form(expected) {
        return true;
    }
    match actual {
        Value::Array(items) => items.contains(expected),
        _ => false,
    }
}

fn text_op(kind: TextMatchKind, actual: Option<&Value>, expected: &Value) -> bool {
    let Some(actual) = actual else {
        return false;
    };
    text_matches_ignore_case(
        kind,
        string_form(actual).as_str(),
        string_form(expected).as_str(),
    )
}
