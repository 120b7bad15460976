//! Parsed query types.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Resource a selector queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Components,
    Tokens,
    Usage,
}

impl QueryType {
    pub const ALL: [QueryType; 3] = [Self::Components, Self::Tokens, Self::Usage];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Tokens => "tokens",
            Self::Usage => "usage",
        }
    }

    pub fn lookup(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// A parsed selector: the raw type identifier plus its filters.
///
/// The type is kept as written; routing to a [`QueryType`] happens at
/// execution time so an unknown type is a routing failure, not a syntax one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    #[serde(rename = "type")]
    pub query_type: String,
    pub filters: Vec<Filter>,
    pub original: String,
}

impl Query {
    pub fn new(query_type: impl Into<String>, filters: Vec<Filter>) -> Self {
        let query_type = query_type.into();
        Self {
            original: query_type.clone(),
            query_type,
            filters,
        }
    }

    pub fn kind(&self) -> Option<QueryType> {
        QueryType::lookup(self.query_type.as_str())
    }
}

/// One `[property op value]` constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub property: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn exists(property: impl Into<String>) -> Self {
        Self::new(property, FilterOperator::Exists, FilterValue::Exists)
    }

    pub fn equals(property: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(property, FilterOperator::Equals, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Exists,
    Equals,
    NotEquals,
    Contains,
    StartsWith,
    EndsWith,
    /// Any operator token the matcher does not know. Matches nothing.
    Unsupported(String),
}

impl FilterOperator {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "exists" => Self::Exists,
            "=" => Self::Equals,
            "!=" => Self::NotEquals,
            "*=" => Self::Contains,
            "^=" => Self::StartsWith,
            "$=" => Self::EndsWith,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Exists => "exists",
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Contains => "*=",
            Self::StartsWith => "^=",
            Self::EndsWith => "$=",
            Self::Unsupported(raw) => raw.as_str(),
        }
    }
}

impl Serialize for FilterOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Expected value of a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Marker for bare `[property]` filters.
    Exists,
    Literal(Value),
}

impl FilterValue {
    pub fn literal(&self) -> Option<&Value> {
        match self {
            Self::Exists => None,
            Self::Literal(value) => Some(value),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Exists => serializer.serialize_bool(true),
            Self::Literal(value) => value.serialize(serializer),
        }
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::String(value))
    }
}
