//! Document-type registry.
//!
//! Maps a document-type label to a factory that builds a [`TextProcessor`]
//! whose store is pre-seeded with domain-specific stopwords. Five presets are
//! registered by [`ProcessorRegistry::with_presets`]; callers may add or
//! replace entries at runtime.
//!
//! Where each label's store lives is decided by the registry's
//! [`StorageLayout`]. By default every label gets its own file, so words
//! added for one type never leak into another. A single shared file is used
//! only when [`StorageLayout::Shared`] is configured.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoplistError};
use crate::processor::TextProcessor;
use crate::stopwords::store::{DEFAULT_LANGUAGE, DEFAULT_STORAGE_PATH, StopwordStore, StoreConfig};

/// Builds a processor for the store location the registry assigns to a label.
pub type ProcessorFactory = Arc<dyn Fn(&StoreConfig) -> Result<TextProcessor> + Send + Sync>;

/// Preset document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Technical documentation, code comments and API docs.
    Technical,
    /// Web content, articles and blog posts.
    Web,
    /// Business documents, reports and proposals.
    Business,
    /// Academic papers and research documents.
    Academic,
    /// News articles and journalistic content.
    News,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Technical,
        DocumentType::Web,
        DocumentType::Business,
        DocumentType::Academic,
        DocumentType::News,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Technical => "technical",
            DocumentType::Web => "web",
            DocumentType::Business => "business",
            DocumentType::Academic => "academic",
            DocumentType::News => "news",
        }
    }

    /// Extra stopwords this preset adds on top of the base list.
    pub fn extra_words(&self) -> &'static [&'static str] {
        match self {
            // Documentation only; no extra words.
            DocumentType::Technical => &[],
            DocumentType::Web => &[
                "html", "css", "javascript", "browser", "page", "link", "button", "form",
            ],
            DocumentType::Business => &[
                "company", "business", "market", "customer", "product", "revenue", "profit",
            ],
            DocumentType::Academic => &[
                "abstract",
                "introduction",
                "conclusion",
                "method",
                "result",
                "study",
                "research",
                "paper",
                "author",
            ],
            DocumentType::News => &[
                "said", "says", "reported", "according", "news", "article", "story", "source",
                "today",
            ],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = StoplistError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentType::ALL
            .into_iter()
            .find(|doc_type| doc_type.label() == s)
            .ok_or_else(|| {
                StoplistError::unknown_document_type(
                    s,
                    DocumentType::ALL.iter().map(|t| t.label().to_string()).collect(),
                )
            })
    }
}

/// Where the stores of registered document types are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StorageLayout {
    /// Each label owns `<directory>/<label>.json`.
    PerType { directory: PathBuf },
    /// Every label reads and writes the same file.
    Shared { path: PathBuf },
}

impl Default for StorageLayout {
    fn default() -> Self {
        StorageLayout::PerType {
            directory: PathBuf::from("stopwords"),
        }
    }
}

impl StorageLayout {
    /// A layout where all labels share the default storage file.
    pub fn shared_default() -> Self {
        StorageLayout::Shared {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }

    /// The storage file for `doc_type`.
    pub fn store_path(&self, doc_type: &str) -> PathBuf {
        match self {
            StorageLayout::PerType { directory } => directory.join(format!("{doc_type}.json")),
            StorageLayout::Shared { path } => path.clone(),
        }
    }
}

/// Registry of document-type processor factories.
#[derive(Clone)]
pub struct ProcessorRegistry {
    factories: IndexMap<String, ProcessorFactory>,
    layout: StorageLayout,
    language: String,
}

impl ProcessorRegistry {
    /// Create a registry with no entries.
    pub fn new(layout: StorageLayout, language: impl Into<String>) -> Self {
        ProcessorRegistry {
            factories: IndexMap::new(),
            layout,
            language: language.into(),
        }
    }

    /// Create a registry with the five preset document types.
    pub fn with_presets(layout: StorageLayout, language: impl Into<String>) -> Self {
        let mut registry = Self::new(layout, language);
        for doc_type in DocumentType::ALL {
            registry.register_processor(doc_type.label(), preset_factory(doc_type));
        }
        registry
    }

    /// Add or replace the factory for `doc_type`.
    pub fn register_processor<S, F>(&mut self, doc_type: S, factory: F)
    where
        S: Into<String>,
        F: Fn(&StoreConfig) -> Result<TextProcessor> + Send + Sync + 'static,
    {
        let doc_type = doc_type.into();
        debug!("Registering processor for document type '{doc_type}'");
        self.factories.insert(doc_type, Arc::new(factory));
    }

    /// Build a fresh processor for `doc_type`.
    pub fn get_processor(&self, doc_type: &str) -> Result<TextProcessor> {
        let factory = self
            .factories
            .get(doc_type)
            .ok_or_else(|| StoplistError::unknown_document_type(doc_type, self.list_types()))?;
        factory(&self.store_config(doc_type))
    }

    /// Store location and language assigned to `doc_type`.
    pub fn store_config(&self, doc_type: &str) -> StoreConfig {
        StoreConfig::new(self.layout.store_path(doc_type)).with_language(self.language.clone())
    }

    /// Registered labels, in registration order.
    pub fn list_types(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    pub fn contains(&self, doc_type: &str) -> bool {
        self.factories.contains_key(doc_type)
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_presets(StorageLayout::default(), DEFAULT_LANGUAGE)
    }
}

fn preset_factory(
    doc_type: DocumentType,
) -> impl Fn(&StoreConfig) -> Result<TextProcessor> + Send + Sync + 'static {
    move |config: &StoreConfig| {
        let mut store = StopwordStore::open(config.clone())?;
        let words = doc_type.extra_words();
        if !words.is_empty() {
            store.add(words)?;
        }
        Ok(TextProcessor::new(store))
    }
}
