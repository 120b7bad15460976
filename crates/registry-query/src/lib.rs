//! Selector-based search over design-system registries.
//!
//! This crate provides the query core for an extracted registry document:
//! - Registry model for components and design tokens
//! - A CSS-attribute-like selector language (`components[category=actions]`)
//! - Token tree flattening and categorization
//! - Component, token, and usage queries with optional metadata and summaries

pub mod complexity;
pub mod engine;
pub mod error;
pub mod options;
pub mod ordered;
pub mod query;
pub mod summary;
pub mod tokens;
pub mod types;

// Re-export main types
pub use complexity::{Complexity, ComplexityScore};
pub use engine::{query, MetadataEnvelope, QueryEngine, QueryMetadata, QueryOutput};
pub use error::{QueryError, Result};
pub use options::{OutputFormat, QueryOptions};
pub use ordered::{group_by, GroupCounts, OrderedMap};
pub use query::{Filter, FilterOperator, FilterValue, Query, QueryType, SelectorParser};
pub use summary::{QueryPayload, QueryResults, Summary};
pub use tokens::{category_of, flatten_tokens, FlatToken};
pub use types::{Component, Prop, Registry};
