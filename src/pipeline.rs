//! End-to-end text processing across document types.
//!
//! [`NlpPipeline`] resolves a document type to a cached [`TextProcessor`]
//! (built once through the [`ProcessorRegistry`] and reused), filters
//! stopwords out of texts, files and directories, and keeps a log of every
//! result for aggregate statistics.
//!
//! # Examples
//!
//! ```no_run
//! use stoplist::config::PipelineConfig;
//! use stoplist::pipeline::{NlpPipeline, TextOptions};
//!
//! let mut pipeline = NlpPipeline::new(PipelineConfig::default()).unwrap();
//! let result = pipeline
//!     .process_text("The browser renders the page", Some("web"), &TextOptions::default())
//!     .unwrap();
//! assert_eq!(result.tokens, vec!["renders"]);
//! ```

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::{Result, StoplistError};
use crate::processor::{
    DEFAULT_TOP_N, FileOutcome, TextProcessor, WordCount, matching_files, read_text, top_words,
    unique_count,
};
use crate::registry::ProcessorRegistry;

/// Per-call options for text processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Whether to compute the most frequent words.
    pub compute_frequency: bool,
    /// How many words to report when `compute_frequency` is set.
    pub top_n: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            compute_frequency: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl TextOptions {
    /// Options that also compute the `top_n` most frequent words.
    pub fn with_frequency(top_n: usize) -> Self {
        Self {
            compute_frequency: true,
            top_n,
        }
    }
}

/// Result of processing one text through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResult {
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Length of the input in characters.
    pub original_length: usize,
    pub token_count: usize,
    pub unique_tokens: usize,
    pub tokens: Vec<String>,
    /// Share of whitespace-delimited words removed, in percent.
    pub reduction_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordCount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Aggregates over every result the pipeline has produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub total_documents: usize,
    pub total_tokens: usize,
    pub total_unique_tokens: usize,
    pub avg_tokens_per_doc: f64,
    pub document_types: Vec<String>,
}

/// Pipeline statistics, or a marker that nothing has been processed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineStats {
    NoResults,
    Summary(PipelineSummary),
}

/// Stopword filtering pipeline with one cached processor per document type.
pub struct NlpPipeline {
    config: PipelineConfig,
    registry: ProcessorRegistry,
    processors: HashMap<String, TextProcessor>,
    results: Vec<TextResult>,
}

impl NlpPipeline {
    /// Create a pipeline with the preset registry described by `config`.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let registry =
            ProcessorRegistry::with_presets(config.storage.clone(), config.language.clone());
        Self::with_registry(config, registry)
    }

    /// Create a pipeline over an explicit registry.
    ///
    /// Fails if the configured default type is not registered.
    pub fn with_registry(config: PipelineConfig, registry: ProcessorRegistry) -> Result<Self> {
        config.validate()?;
        if !registry.contains(&config.default_type) {
            return Err(StoplistError::unknown_document_type(
                config.default_type.clone(),
                registry.list_types(),
            ));
        }

        Ok(NlpPipeline {
            config,
            registry,
            processors: HashMap::new(),
            results: Vec::new(),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to register new document types.
    ///
    /// Processors that are already cached are not rebuilt.
    pub fn registry_mut(&mut self) -> &mut ProcessorRegistry {
        &mut self.registry
    }

    /// Every result recorded since creation or the last [`reset`](Self::reset).
    pub fn results(&self) -> &[TextResult] {
        &self.results
    }

    /// Options used by calls that do not take explicit options.
    pub fn default_options(&self) -> TextOptions {
        TextOptions {
            compute_frequency: false,
            top_n: self.config.top_n,
        }
    }

    /// The processor for `doc_type`, built on first request and cached.
    pub fn get_processor(&mut self, doc_type: &str) -> Result<&mut TextProcessor> {
        match self.processors.entry(doc_type.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let processor = self.registry.get_processor(doc_type)?;
                info!("Created processor for document type '{doc_type}'");
                Ok(entry.insert(processor))
            }
        }
    }

    /// Filter stopwords out of `text` and record the result.
    pub fn process_text(
        &mut self,
        text: &str,
        doc_type: Option<&str>,
        options: &TextOptions,
    ) -> Result<TextResult> {
        self.record(text, doc_type, options, None)
    }

    /// Read `path` and process its text.
    ///
    /// A read failure yields [`FileOutcome::Failed`] and nothing is recorded.
    /// An unknown document type or a store failure is still an error.
    pub fn process_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        doc_type: Option<&str>,
        options: &TextOptions,
    ) -> Result<FileOutcome<TextResult>> {
        let path = path.as_ref();
        let doc_type = self.resolve_type(doc_type);
        self.get_processor(&doc_type)?;

        let text = match read_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                let error = if e.is_not_found() {
                    "File not found".to_string()
                } else {
                    e.to_string()
                };
                return Ok(FileOutcome::Failed {
                    file: path.to_path_buf(),
                    error,
                });
            }
        };

        let result = self.record(&text, Some(&doc_type), options, Some(path.to_path_buf()))?;
        Ok(FileOutcome::Processed(result))
    }

    /// Process every file in `dir` matching `pattern` (the configured pattern
    /// when `None`), in path order. A missing `dir` yields no outcomes.
    pub fn process_directory<P: AsRef<Path>>(
        &mut self,
        dir: P,
        pattern: Option<&str>,
        doc_type: Option<&str>,
        options: &TextOptions,
    ) -> Result<Vec<FileOutcome<TextResult>>> {
        let pattern = pattern.unwrap_or(&self.config.pattern).to_string();
        let files = matching_files(dir.as_ref(), &pattern)?;

        files
            .iter()
            .map(|file| self.process_file(file, doc_type, options))
            .collect()
    }

    /// Process `(text, doc_type)` pairs in order with the default options.
    pub fn process_batch<T, D>(&mut self, items: &[(T, D)]) -> Result<Vec<TextResult>>
    where
        T: AsRef<str>,
        D: AsRef<str>,
    {
        let options = self.default_options();
        items
            .iter()
            .map(|(text, doc_type)| {
                self.process_text(text.as_ref(), Some(doc_type.as_ref()), &options)
            })
            .collect()
    }

    /// Aggregate statistics over the result log.
    pub fn pipeline_stats(&self) -> PipelineStats {
        if self.results.is_empty() {
            return PipelineStats::NoResults;
        }

        let total_documents = self.results.len();
        let total_tokens: usize = self.results.iter().map(|r| r.token_count).sum();
        let total_unique_tokens: usize = self.results.iter().map(|r| r.unique_tokens).sum();
        let document_types: BTreeSet<&str> =
            self.results.iter().map(|r| r.doc_type.as_str()).collect();

        PipelineStats::Summary(PipelineSummary {
            total_documents,
            total_tokens,
            total_unique_tokens,
            avg_tokens_per_doc: round2(total_tokens as f64 / total_documents as f64),
            document_types: document_types.into_iter().map(String::from).collect(),
        })
    }

    /// Clear the result log. Cached processors are kept.
    pub fn reset(&mut self) {
        self.results.clear();
    }

    pub fn available_document_types(&self) -> Vec<String> {
        self.registry.list_types()
    }

    fn resolve_type(&self, doc_type: Option<&str>) -> String {
        doc_type.unwrap_or(&self.config.default_type).to_string()
    }

    fn record(
        &mut self,
        text: &str,
        doc_type: Option<&str>,
        options: &TextOptions,
        file: Option<PathBuf>,
    ) -> Result<TextResult> {
        let doc_type = self.resolve_type(doc_type);
        let tokens = self.get_processor(&doc_type)?.analyze(text, true)?;

        let raw_words = text.split_whitespace().count();
        let reduction_percent = if raw_words == 0 {
            0.0
        } else {
            round2((1.0 - tokens.len() as f64 / raw_words as f64) * 100.0)
        };
        let ranked = options
            .compute_frequency
            .then(|| top_words(&tokens, options.top_n));

        let result = TextResult {
            doc_type,
            original_length: text.chars().count(),
            token_count: tokens.len(),
            unique_tokens: unique_count(&tokens),
            tokens,
            reduction_percent,
            top_words: ranked,
            file,
        };
        self.results.push(result.clone());
        Ok(result)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
