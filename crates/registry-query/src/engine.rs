//! Top-level query entry point.
//!
//! `QueryEngine::query` parses a selector, routes it to an executor, and
//! post-processes the result. Every failure along the way is reported once as
//! [`QueryError::QueryFailed`] carrying the selector text. The engine only
//! reads the registry, so one snapshot can be shared by any number of callers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::{QueryError, Result};
use crate::options::QueryOptions;
use crate::query::{
    execute_component_query, execute_token_query, execute_usage_query, Filter, Query, QueryType,
    SelectorParser,
};
use crate::summary::{summarize, QueryPayload, QueryResults};
use crate::types::Registry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMetadata {
    /// Selector text as the caller wrote it.
    pub query: String,
    #[serde(rename = "type")]
    pub query_type: QueryType,
    pub filters: Vec<Filter>,
    pub count: usize,
    pub executed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataEnvelope {
    pub results: QueryPayload,
    pub metadata: QueryMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Plain(QueryPayload),
    WithMetadata(Box<MetadataEnvelope>),
}

impl QueryOutput {
    pub fn payload(&self) -> &QueryPayload {
        match self {
            Self::Plain(payload) => payload,
            Self::WithMetadata(envelope) => &envelope.results,
        }
    }

    pub fn metadata(&self) -> Option<&QueryMetadata> {
        match self {
            Self::Plain(_) => None,
            Self::WithMetadata(envelope) => Some(&envelope.metadata),
        }
    }

    /// Returns the raw results when no summary was requested.
    pub fn results(&self) -> Option<&QueryResults> {
        match self.payload() {
            QueryPayload::Results(results) => Some(results),
            QueryPayload::Summary(_) => None,
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub struct QueryEngine<'r> {
    registry: &'r Registry,
}

impl<'r> QueryEngine<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Query types a selector may start with.
    pub fn supported_types() -> Vec<&'static str> {
        QueryType::ALL.iter().map(|kind| kind.as_str()).collect()
    }

    /// Runs a selector such as `components[category=actions]`.
    pub fn query(&self, selector: &str, options: &QueryOptions) -> Result<QueryOutput> {
        SelectorParser::parse(selector)
            .and_then(|query| self.run(&query, options))
            .map_err(|error| QueryError::failed(selector, error))
    }

    /// Runs an already-built query, e.g. one using operators the selector
    /// grammar cannot express.
    pub fn execute(&self, query: &Query, options: &QueryOptions) -> Result<QueryOutput> {
        self.run(query, options)
            .map_err(|error| QueryError::failed(query.original.as_str(), error))
    }

    fn run(&self, query: &Query, options: &QueryOptions) -> Result<QueryOutput> {
        let kind = query
            .kind()
            .ok_or_else(|| QueryError::UnknownQueryType(query.query_type.clone()))?;
        log::debug!(
            "executing {} query with {} filter(s)",
            kind.as_str(),
            query.filters.len()
        );

        let results = self.execute_kind(kind, &query.filters)?;
        log::debug!("{} query matched {} result(s)", kind.as_str(), results.count());

        let payload = if options.wants_summary() {
            summarize(results)
        } else {
            QueryPayload::Results(results)
        };

        if !options.include_metadata {
            return Ok(QueryOutput::Plain(payload));
        }
        let metadata = QueryMetadata {
            query: query.original.clone(),
            query_type: kind,
            filters: query.filters.clone(),
            count: payload.count(),
            executed_at: Utc::now(),
        };
        Ok(QueryOutput::WithMetadata(Box::new(MetadataEnvelope {
            results: payload,
            metadata,
        })))
    }

    fn execute_kind(&self, kind: QueryType, filters: &[Filter]) -> Result<QueryResults> {
        Ok(match kind {
            QueryType::Components => {
                QueryResults::Components(execute_component_query(self.registry, filters)?)
            }
            QueryType::Tokens => QueryResults::Tokens(execute_token_query(self.registry, filters)),
            QueryType::Usage => QueryResults::Usage(execute_usage_query(self.registry, filters)),
        })
    }
}

/// Convenience wrapper for a one-off query against `registry`.
pub fn query(registry: &Registry, selector: &str, options: &QueryOptions) -> Result<QueryOutput> {
    QueryEngine::new(registry).query(selector, options)
}
