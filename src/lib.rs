//! # stoplist
//!
//! Stopword filtering with a persistent, per-language, user-extensible
//! stopword set layered on top of a built-in base list.
//!
//! ## Features
//!
//! - Custom stopwords persisted to a JSON file, one entry per language
//! - Regex tokenization and order-preserving stopword removal
//! - File and directory processing with per-file statistics
//! - Preset document types (technical, web, business, academic, news)
//! - A pipeline that caches processors and aggregates statistics
//!
//! ## Example
//!
//! ```no_run
//! use stoplist::analysis::analyzer::preprocess;
//! use stoplist::stopwords::store::{StopwordStore, StoreConfig};
//!
//! let mut store = StopwordStore::open(StoreConfig::default()).unwrap();
//! store.add(&["api", "client", "request", "server"]).unwrap();
//!
//! let tokens = preprocess("The API client sends a request to the server.", &store, true);
//! assert_eq!(tokens, vec!["sends"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod registry;
pub mod stopwords;

pub mod prelude {
    pub use crate::analysis::analyzer::{filter_tokens, preprocess, tokenize};
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Result, StoplistError};
    pub use crate::pipeline::{NlpPipeline, PipelineStats, TextOptions, TextResult};
    pub use crate::processor::{FileOutcome, TextProcessor, WordCount};
    pub use crate::registry::{DocumentType, ProcessorRegistry, StorageLayout};
    pub use crate::stopwords::store::{StopwordStore, StoreConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
