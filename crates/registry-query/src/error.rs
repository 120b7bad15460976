#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Selector syntax error: {0}")]
    Syntax(String),

    #[error("Unknown query type: {0}")]
    UnknownQueryType(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    #[error("Query failed for selector \"{selector}\": {source}")]
    QueryFailed {
        selector: String,
        #[source]
        source: Box<QueryError>,
    },
}

impl QueryError {
    /// Wraps an error as a query failure for `selector`.
    ///
    /// Errors that are already query failures are returned unchanged so the
    /// selector context is attached exactly once.
    pub fn failed(selector: &str, source: QueryError) -> Self {
        match source {
            failed @ QueryError::QueryFailed { .. } => failed,
            other => QueryError::QueryFailed {
                selector: selector.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, unwrapping `QueryFailed` layers.
    pub fn root_cause(&self) -> &QueryError {
        match self {
            QueryError::QueryFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the selector text attached to a query failure.
    pub fn selector(&self) -> Option<&str> {
        match self {
            QueryError::QueryFailed { selector, .. } => Some(selector.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        QueryError::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
