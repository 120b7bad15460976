//! Caller-facing query options.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Number of names/paths listed in a summary sample.
pub const SUMMARY_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Results as produced by the executor.
    #[default]
    Full,
    /// Reduced counts and samples (components and tokens only).
    Summary,
}

/// Options for a single `query` call.
///
/// Deserializes from `{"includeMetadata": true, "format": "summary"}`; both
/// fields are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    pub include_metadata: bool,
    pub format: OutputFormat,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }

    pub fn summary(mut self) -> Self {
        self.format = OutputFormat::Summary;
        self
    }

    pub fn wants_summary(&self) -> bool {
        self.format == OutputFormat::Summary
    }
}
