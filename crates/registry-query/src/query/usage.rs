//! Usage analytics over the whole registry.

use serde::Serialize;
use serde_json::{json, Value};

use crate::complexity::{Complexity, ComplexityScore};
use crate::ordered::{group_by, GroupCounts, OrderedMap};
use crate::tokens::flatten_tokens;
use crate::types::{Component, Registry};

use super::expression::Filter;
use super::matcher::FilterMatcher;

pub const USAGE_COMPONENTS: &str = "components";
pub const USAGE_TOKENS: &str = "tokens";
pub const USAGE_AGGREGATES: &str = "aggregates";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUsage {
    pub props: usize,
    pub variants: usize,
    pub examples: usize,
    pub category: Option<String>,
    pub complexity: Complexity,
}

/// Per-component stats, per-category token counts and registry aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    pub components: OrderedMap<ComponentUsage>,
    pub tokens: GroupCounts,
    pub aggregates: OrderedMap<Value>,
}

impl UsageReport {
    pub fn build(registry: &Registry) -> Self {
        let mut components = OrderedMap::new();
        for component in &registry.components {
            components.insert(
                component.name.clone(),
                ComponentUsage {
                    props: component.props.len(),
                    variants: component.variants.len(),
                    examples: component.examples.len(),
                    category: component.category_name().map(ToString::to_string),
                    complexity: ComplexityScore::of(component).band,
                },
            );
        }

        let flat = flatten_tokens(&registry.tokens);
        let tokens = group_by(flat.iter(), |(_, token)| token.category.clone());

        let mut categories: Vec<&str> = Vec::new();
        for category in registry.components.iter().filter_map(Component::category_name) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut histogram = OrderedMap::new();
        for band in Complexity::ALL {
            histogram.insert(band.as_str(), 0usize);
        }
        for usage in components.iter().map(|(_, usage)| usage) {
            histogram.increment(usage.complexity.as_str());
        }

        let mut aggregates = OrderedMap::new();
        aggregates.insert("totalComponents", json!(registry.components.len()));
        aggregates.insert("totalTokens", json!(flat.len()));
        aggregates.insert("categories", json!(categories));
        aggregates.insert("complexityDistribution", json!(histogram));

        Self {
            components,
            tokens,
            aggregates,
        }
    }

    /// Number of top-level structures in the report.
    pub fn key_count(&self) -> usize {
        [USAGE_COMPONENTS, USAGE_TOKENS, USAGE_AGGREGATES].len()
    }

    /// Narrows the structure a filter names by matching entry keys.
    ///
    /// Filters naming anything other than `components`, `tokens` or
    /// `aggregates` are ignored.
    pub fn apply_filter(&mut self, filter: &Filter) {
        let matcher = FilterMatcher::new(filter);
        match filter.property.as_str() {
            USAGE_COMPONENTS => self.components.retain(|key, _| matcher.matches_key(key)),
            USAGE_TOKENS => self.tokens.retain(|key, _| matcher.matches_key(key)),
            USAGE_AGGREGATES => self.aggregates.retain(|key, _| matcher.matches_key(key)),
            other => log::debug!("usage filter on unknown structure {other:?} ignored"),
        }
    }
}

/// Computes the usage report and narrows it by `filters`.
pub fn execute_usage_query(registry: &Registry, filters: &[Filter]) -> UsageReport {
    let mut report = UsageReport::build(registry);
    for filter in filters {
        report.apply_filter(filter);
    }
    report
}
