//! Persistent custom stopword store.
//!
//! A [`StopwordStore`] layers a user-extensible set of custom stopwords for
//! one language on top of the read-only base list for that language.
//!
//! Custom words are kept in a single JSON file shared by all languages:
//!
//! ```text
//! {
//!     "english": [
//!         "api",
//!         "client"
//!     ]
//! }
//! ```
//!
//! Every [`add`](StopwordStore::add) and [`remove`](StopwordStore::remove)
//! re-reads the file, replaces this store's language entry and rewrites the
//! whole file. Entries for other languages are carried over untouched. There
//! is no locking: two processes writing the same file race and the last
//! writer wins.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, StoplistError};
use crate::stopwords::corpus::{BundledCorpus, StopwordSource};

/// Default location of the persisted custom stopword file.
pub const DEFAULT_STORAGE_PATH: &str = "custom_stopwords.json";

/// Default language of a store.
pub const DEFAULT_LANGUAGE: &str = "english";

/// Where a store lives and which language entry it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON file holding custom stopwords.
    pub path: PathBuf,

    /// Language key inside the file, also used for the base corpus lookup.
    pub language: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config for the default language at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the language.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }
}

/// Base stopwords for one language plus persisted custom additions.
#[derive(Debug, Clone)]
pub struct StopwordStore {
    config: StoreConfig,
    custom: BTreeSet<String>,
    base: HashSet<String>,
}

impl StopwordStore {
    /// Open the store described by `config`, using the bundled base corpus.
    pub fn open(config: StoreConfig) -> Result<Self> {
        Self::open_with_source(config, &BundledCorpus)
    }

    /// Open the store described by `config`, looking up base words in `source`.
    ///
    /// A missing storage file is created as an empty object first.
    pub fn open_with_source(config: StoreConfig, source: &dyn StopwordSource) -> Result<Self> {
        if !config.path.exists() {
            initialize_storage(&config.path)?;
        }

        let data = read_storage(&config.path)?;
        let custom = language_entry(&data, &config.language, &config.path)?;
        let base = source.lookup(&config.language)?;

        debug!(
            "Loaded stopword store {} ({}): {} base, {} custom",
            config.path.display(),
            config.language,
            base.len(),
            custom.len()
        );

        Ok(StopwordStore {
            config,
            custom,
            base,
        })
    }

    /// Add words (lowercased) to the custom set and persist.
    ///
    /// Adding a word that is already present is a no-op for that word. If the
    /// store cannot be written the in-memory set is left unchanged.
    pub fn add<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
        self.update(|custom| custom.extend(words.iter().map(|word| word.as_ref().to_lowercase())))
    }

    /// Remove words (lowercased) from the custom set and persist.
    ///
    /// Words that are not custom stopwords are ignored. Base words cannot be
    /// removed. If the store cannot be written the in-memory set is left
    /// unchanged.
    pub fn remove<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
        self.update(|custom| {
            for word in words {
                custom.remove(&word.as_ref().to_lowercase());
            }
        })
    }

    /// The union of base and custom stopwords, computed on every call.
    pub fn effective_set(&self) -> HashSet<String> {
        self.base.iter().chain(self.custom.iter()).cloned().collect()
    }

    /// Whether `word` (case-insensitively) is in the effective set.
    pub fn is_stopword(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.base.contains(&word) || self.custom.contains(&word)
    }

    /// Custom stopwords, in sorted order.
    pub fn custom_stopwords(&self) -> &BTreeSet<String> {
        &self.custom
    }

    /// Read-only base stopwords for this store's language.
    pub fn base_stopwords(&self) -> &HashSet<String> {
        &self.base
    }

    pub fn language(&self) -> &str {
        &self.config.language
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn update<F>(&mut self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeSet<String>),
    {
        let previous = self.custom.clone();
        apply(&mut self.custom);
        if let Err(e) = self.save() {
            warn!("Discarding unsaved change to {}: {e}", self.config.path.display());
            self.custom = previous;
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let mut data = if self.config.path.exists() {
            read_storage(&self.config.path)?
        } else {
            Map::new()
        };

        let words = self.custom.iter().cloned().map(Value::String).collect();
        data.insert(self.config.language.clone(), Value::Array(words));
        write_storage(&self.config.path, &data)?;

        info!(
            "Saved {} custom stopwords for {} to {}",
            self.custom.len(),
            self.config.language,
            self.config.path.display()
        );
        Ok(())
    }
}

fn initialize_storage(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    debug!("Initializing empty stopword store at {}", path.display());
    write_storage(path, &Map::new())
}

fn read_storage(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(StoplistError::malformed_store(path, "expected a JSON object")),
        Err(e) => Err(StoplistError::malformed_store(path, e.to_string())),
    }
}

fn write_storage(path: &Path, data: &Map<String, Value>) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    Ok(())
}

fn language_entry(
    data: &Map<String, Value>,
    language: &str,
    path: &Path,
) -> Result<BTreeSet<String>> {
    let Some(entry) = data.get(language) else {
        return Ok(BTreeSet::new());
    };
    let Value::Array(items) = entry else {
        return Err(StoplistError::malformed_store(
            path,
            format!("entry for '{language}' is not an array"),
        ));
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(word) => Ok(word.clone()),
            other => Err(StoplistError::malformed_store(
                path,
                format!("entry for '{language}' contains a non-string value: {other}"),
            )),
        })
        .collect()
}
