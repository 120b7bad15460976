//! Result post-processing: summaries and result counts.

use serde::Serialize;

use crate::complexity::ComplexityScore;
use crate::ordered::{group_by, GroupCounts};
use crate::options::SUMMARY_SAMPLE_SIZE;
use crate::query::UsageReport;
use crate::tokens::{category_of, FlatToken};
use crate::types::Component;

/// Group key for components without a category.
pub const UNCATEGORIZED: &str = "uncategorized";
/// Group key for tokens without a type.
pub const UNTYPED: &str = "untyped";

/// Raw executor output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResults {
    Components(Vec<Component>),
    Tokens(Vec<FlatToken>),
    Usage(UsageReport),
}

impl QueryResults {
    /// Length for sequences, top-level key count for the usage report.
    pub fn count(&self) -> usize {
        match self {
            Self::Components(components) => components.len(),
            Self::Tokens(tokens) => tokens.len(),
            Self::Usage(report) => report.key_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub total: usize,
    pub categories: GroupCounts,
    pub complexity: GroupCounts,
    pub sample_components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub total: usize,
    pub categories: GroupCounts,
    pub types: GroupCounts,
    pub sample_tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    Components(ComponentSummary),
    Tokens(TokenSummary),
}

impl Summary {
    /// Summaries are mapping-shaped; the count is their key count.
    pub fn count(&self) -> usize {
        4
    }
}

/// What a query hands back before an optional metadata envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryPayload {
    Results(QueryResults),
    Summary(Summary),
}

impl QueryPayload {
    pub fn count(&self) -> usize {
        match self {
            Self::Results(results) => results.count(),
            Self::Summary(summary) => summary.count(),
        }
    }
}

pub fn summarize_components(components: &[Component]) -> ComponentSummary {
    ComponentSummary {
        total: components.len(),
        categories: group_by(components, |component| {
            component
                .category_name()
                .unwrap_or(UNCATEGORIZED)
                .to_string()
        }),
        complexity: group_by(components, |component| {
            ComplexityScore::of(component).band.as_str()
        }),
        sample_components: components
            .iter()
            .take(SUMMARY_SAMPLE_SIZE)
            .map(|component| component.name.clone())
            .collect(),
    }
}

pub fn summarize_tokens(tokens: &[FlatToken]) -> TokenSummary {
    TokenSummary {
        total: tokens.len(),
        categories: group_by(tokens, |token| category_of(token.path.as_str()).to_string()),
        types: group_by(tokens, |token| {
            token
                .token_type
                .clone()
                .unwrap_or_else(|| UNTYPED.to_string())
        }),
        sample_tokens: tokens
            .iter()
            .take(SUMMARY_SAMPLE_SIZE)
            .map(|token| token.path.clone())
            .collect(),
    }
}

/// Reduces results to a summary. Usage reports pass through unchanged.
pub fn summarize(results: QueryResults) -> QueryPayload {
    match results {
        QueryResults::Components(components) => {
            QueryPayload::Summary(Summary::Components(summarize_components(&components)))
        }
        QueryResults::Tokens(tokens) => {
            QueryPayload::Summary(Summary::Tokens(summarize_tokens(&tokens)))
        }
        usage @ QueryResults::Usage(_) => QueryPayload::Results(usage),
    }
}
