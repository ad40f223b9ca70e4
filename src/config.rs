//! Configuration for the processing pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoplistError};
use crate::processor::{DEFAULT_PATTERN, DEFAULT_TOP_N};
use crate::registry::{DocumentType, StorageLayout};
use crate::stopwords::store::DEFAULT_LANGUAGE;

/// Configuration for [`NlpPipeline`](crate::pipeline::NlpPipeline).
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```
/// use stoplist::config::PipelineConfig;
///
/// let config: PipelineConfig = serde_json::from_str(r#"{"default_type": "news"}"#).unwrap();
/// assert_eq!(config.default_type, "news");
/// assert_eq!(config.top_n, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Document type used when a call does not name one.
    pub default_type: String,

    /// Language of every store opened by the registry.
    pub language: String,

    /// Where document-type stores are kept.
    pub storage: StorageLayout,

    /// Number of words reported by frequency analysis.
    pub top_n: usize,

    /// Glob pattern for directory scans.
    pub pattern: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_type: DocumentType::Technical.label().to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            storage: StorageLayout::default(),
            top_n: DEFAULT_TOP_N,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the default document type.
    pub fn with_default_type<S: Into<String>>(mut self, default_type: S) -> Self {
        self.default_type = default_type.into();
        self
    }

    /// Set the store language.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Set the storage layout.
    pub fn with_storage(mut self, storage: StorageLayout) -> Self {
        self.storage = storage;
        self
    }

    /// Set the number of words reported by frequency analysis.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the directory scan pattern.
    pub fn with_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.default_type.trim().is_empty() {
            return Err(StoplistError::invalid_config("default_type must not be empty"));
        }
        if self.language.trim().is_empty() {
            return Err(StoplistError::invalid_config("language must not be empty"));
        }
        if self.top_n == 0 {
            return Err(StoplistError::invalid_config("top_n must be greater than 0"));
        }
        if self.pattern.is_empty() {
            return Err(StoplistError::invalid_config("pattern must not be empty"));
        }
        Ok(())
    }
}
