//! Query executors for component and token selectors.

use crate::error::Result;
use crate::tokens::{flatten_tokens, FlatToken};
use crate::types::{Component, Registry};

use super::expression::Filter;
use super::matcher::{record_matches_all, FilterMatcher};

/// Filters components by every filter (logical AND), keeping declaration order.
pub fn execute_component_query(registry: &Registry, filters: &[Filter]) -> Result<Vec<Component>> {
    if filters.is_empty() {
        return Ok(registry.components.clone());
    }

    let mut matched = Vec::new();
    for component in &registry.components {
        let record = component.to_record()?;
        if record_matches_all(filters, &record) {
            matched.push(component.clone());
        }
    }
    Ok(matched)
}

/// Flattens the token tree and keeps tokens matching every filter.
pub fn execute_token_query(registry: &Registry, filters: &[Filter]) -> Vec<FlatToken> {
    let flat = flatten_tokens(&registry.tokens);
    flat.iter()
        .map(|(_, token)| token)
        .filter(|token| {
            filters
                .iter()
                .all(|filter| FilterMatcher::new(filter).matches_token(token))
        })
        .cloned()
        .collect()
}
