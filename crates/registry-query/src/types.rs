//! Registry document types.
//!
//! The registry is produced by the extraction pipeline and handed to the
//! engine as an immutable snapshot. Components are typed records; fields the
//! extractor emits beyond the known ones are kept in `extra` so dynamic
//! property paths can still reach them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{QueryError, Result};

/// The extracted design-system document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub components: Vec<Component>,
    /// Hierarchical token tree. Always an object once loaded.
    #[serde(default = "empty_token_tree")]
    pub tokens: Value,
}

/// One UI component's extracted metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Raw category as extracted. An explicit `null` is kept so it stays
    /// visible to path lookups.
    #[serde(
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Vec<Prop>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<Value>,
    /// Usage examples in whatever shape the extractor emitted. Only counted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<Value>,
    /// Raw children descriptor. Only its presence matters for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub prop_type: Option<String>,
    /// Anything but `true` reads as optional.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub values: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Present fields deserialize to `Some`, including an explicit `null`.
fn keep_null<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strings pass through, `null` is absent, other scalars keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn empty_token_tree() -> Value {
    Value::Object(Map::new())
}

impl Registry {
    pub fn new(components: Vec<Component>, tokens: Value) -> Result<Self> {
        let tokens = normalize_token_tree(tokens)?;
        Ok(Self { components, tokens })
    }

    /// Parses a registry from its JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Builds a registry from an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(QueryError::InvalidRegistry(
                "registry document must be an object".to_string(),
            ));
        }
        let registry: Registry = serde_json::from_value(value)?;
        Self::new(registry.components, registry.tokens)
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|component| component.name == name)
    }
}

fn normalize_token_tree(tokens: Value) -> Result<Value> {
    match tokens {
        Value::Null => Ok(empty_token_tree()),
        Value::Object(_) => Ok(tokens),
        _ => Err(QueryError::InvalidRegistry(
            "tokens must be an object tree".to_string(),
        )),
    }
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            props: Vec::new(),
            variants: Vec::new(),
            examples: Vec::new(),
            children: None,
            extra: Map::new(),
        }
    }

    /// Category name, when the extractor emitted one as a string.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(Value::as_str)
    }

    /// Returns whether the component declares children.
    ///
    /// Follows truthiness: `null`, `false`, `0` and `""` count as absent.
    pub fn has_children(&self) -> bool {
        match &self.children {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    /// Projects the component into a generic JSON record for path lookups.
    pub fn to_record(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Prop {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: None,
            required: false,
            description: None,
            default: None,
            values: None,
            extra: Map::new(),
        }
    }
}
