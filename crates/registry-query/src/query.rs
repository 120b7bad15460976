//! Selector parsing, filter matching, and query execution.
//!
//! This module provides the selector language for registry queries:
//! - Query and filter types
//! - Selector parsing (`type[property]`, `type[property=value]`)
//! - Dot-path property resolution over component records
//! - Filter matching in component and token modes
//! - Component, token, and usage executors

mod evaluate;
mod expression;
mod matcher;
mod parser;
mod path;
mod text_match;
mod usage;

// Re-export public types
pub use evaluate::{execute_component_query, execute_token_query};
pub use expression::{Filter, FilterOperator, FilterValue, Query, QueryType};
pub use matcher::{record_matches_all, FilterMatcher, TOKEN_FILTER_PROPERTIES};
pub use parser::SelectorParser;
pub use path::resolve_property;
pub use text_match::string_form;
pub use usage::{
    execute_usage_query, ComponentUsage, UsageReport, USAGE_AGGREGATES, USAGE_COMPONENTS,
    USAGE_TOKENS,
};
