//! File and directory processing on top of a [`StopwordStore`].
//!
//! [`TextProcessor`] reads text files, runs them through the stopword
//! analyzer and reports per-file token statistics. Directory scans turn
//! per-file failures into [`FileOutcome::Failed`] entries so one bad file
//! never aborts the batch.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::StopwordAnalyzer;
use crate::error::{Result, StoplistError};
use crate::stopwords::store::StopwordStore;

/// Default glob pattern for directory scans.
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Default number of entries returned by frequency analysis.
pub const DEFAULT_TOP_N: usize = 10;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new<S: Into<String>>(word: S, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub original_text: String,
    pub tokens: Vec<String>,
    pub token_count: usize,
    pub unique_tokens: usize,
    pub remove_stopwords: bool,
}

/// Outcome of one file in a batch: a result, or the error that replaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome<T> {
    Processed(T),
    Failed { file: PathBuf, error: String },
}

impl<T> FileOutcome<T> {
    pub fn is_processed(&self) -> bool {
        matches!(self, FileOutcome::Processed(_))
    }

    /// The successful result, if any.
    pub fn processed(&self) -> Option<&T> {
        match self {
            FileOutcome::Processed(result) => Some(result),
            FileOutcome::Failed { .. } => None,
        }
    }

    /// The error message, if this file failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FileOutcome::Processed(_) => None,
            FileOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Counts describing a store's current stopword sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordStats {
    pub total_stopwords: usize,
    pub base_stopwords: usize,
    pub custom_stopwords: usize,
    pub custom_words_list: Vec<String>,
}

/// Processes texts and files with one stopword store.
#[derive(Clone)]
pub struct TextProcessor {
    store: StopwordStore,
    analyzer: StopwordAnalyzer,
}

impl TextProcessor {
    /// Create a processor over `store` with the default analyzer.
    pub fn new(store: StopwordStore) -> Self {
        Self::with_analyzer(store, StopwordAnalyzer::default())
    }

    /// Create a processor over `store` with a custom analyzer.
    pub fn with_analyzer(store: StopwordStore, analyzer: StopwordAnalyzer) -> Self {
        TextProcessor { store, analyzer }
    }

    pub fn store(&self) -> &StopwordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StopwordStore {
        &mut self.store
    }

    /// Tokenize `text` and optionally drop stopwords.
    pub fn analyze(&self, text: &str, remove_stopwords: bool) -> Result<Vec<String>> {
        self.analyzer
            .analyze_words(text, &self.store, remove_stopwords)
    }

    /// Read and analyze a single file.
    ///
    /// Fails with [`StoplistError::FileNotFound`] if `path` does not exist.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        remove_stopwords: bool,
    ) -> Result<FileResult> {
        let path = path.as_ref();
        let text = read_text(path)?;
        let tokens = self.analyze(&text, remove_stopwords)?;

        debug!("Processed {}: {} tokens", path.display(), tokens.len());

        Ok(FileResult {
            file: path.to_path_buf(),
            token_count: tokens.len(),
            unique_tokens: unique_count(&tokens),
            original_text: text,
            tokens,
            remove_stopwords,
        })
    }

    /// Process every file directly inside `dir` whose name matches `pattern`.
    ///
    /// Files are visited in path order. Per-file failures are recorded as
    /// [`FileOutcome::Failed`]. A missing directory yields no outcomes; only
    /// an invalid pattern or an unreadable directory fails the call.
    pub fn process_directory<P: AsRef<Path>>(
        &self,
        dir: P,
        pattern: &str,
        remove_stopwords: bool,
    ) -> Result<Vec<FileOutcome<FileResult>>> {
        let files = matching_files(dir.as_ref(), pattern)?;

        Ok(files
            .into_iter()
            .map(|file| match self.process_file(&file, remove_stopwords) {
                Ok(result) => FileOutcome::Processed(result),
                Err(e) => {
                    warn!("Failed to process {}: {e}", file.display());
                    FileOutcome::Failed {
                        file,
                        error: e.to_string(),
                    }
                }
            })
            .collect())
    }

    /// The `top_n` most frequent tokens of a file.
    ///
    /// Words with equal counts are ordered by first occurrence.
    pub fn word_frequency<P: AsRef<Path>>(
        &self,
        path: P,
        top_n: usize,
        remove_stopwords: bool,
    ) -> Result<Vec<WordCount>> {
        let result = self.process_file(path, remove_stopwords)?;
        Ok(top_words(&result.tokens, top_n))
    }

    pub fn add_custom_stopwords<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
        self.store.add(words)
    }

    pub fn remove_custom_stopwords<S: AsRef<str>>(&mut self, words: &[S]) -> Result<()> {
        self.store.remove(words)
    }

    /// Snapshot of the store's stopword counts.
    pub fn stats_snapshot(&self) -> StopwordStats {
        let custom = self.store.custom_stopwords();
        StopwordStats {
            total_stopwords: self.store.effective_set().len(),
            base_stopwords: self.store.base_stopwords().len(),
            custom_stopwords: custom.len(),
            custom_words_list: custom.iter().cloned().collect(),
        }
    }
}

/// Count tokens and return the `top_n` most frequent.
///
/// Sorting is stable over first-occurrence order, so ties keep the order in
/// which the words first appeared.
pub fn top_words(tokens: &[String], top_n: usize) -> Vec<WordCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

pub(crate) fn unique_count(tokens: &[String]) -> usize {
    tokens.iter().collect::<HashSet<_>>().len()
}

/// Read a UTF-8 text file, mapping a missing path to `FileNotFound`.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoplistError::file_not_found(path),
        _ => StoplistError::Io(e),
    })
}

/// Regular files directly inside `dir` whose file name matches `pattern`,
/// sorted by path. Hidden files only match patterns that start with a dot.
/// A missing `dir` matches nothing.
pub(crate) fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(pattern).map_err(|e| StoplistError::invalid_pattern(e.to_string()))?;
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches_with(name, options));
        if matched {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::store::StoreConfig;
    use tempfile::TempDir;

    fn processor(dir: &TempDir) -> TextProcessor {
        let config = StoreConfig::new(dir.path().join("store").join("words.json"));
        TextProcessor::new(StopwordStore::open(config).unwrap())
    }

    #[test]
    fn test_process_file() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);
        let path = temp_dir.path().join("sample.txt");
        fs::write(&path, "The API client sends requests to the server").unwrap();

        let result = processor.process_file(&path, true).unwrap();
        assert_eq!(result.tokens, vec!["api", "client", "sends", "requests", "server"]);
        assert_eq!(result.token_count, 5);
        assert_eq!(result.unique_tokens, 5);
        assert_eq!(result.original_text, "The API client sends requests to the server");
        assert!(result.remove_stopwords);

        let all = processor.process_file(&path, false).unwrap();
        assert_eq!(all.token_count, 8);
        assert_eq!(all.unique_tokens, 7);
    }

    #[test]
    fn test_process_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);

        let err = processor
            .process_file(temp_dir.path().join("absent.txt"), true)
            .unwrap_err();
        assert!(matches!(err, StoplistError::FileNotFound(_)));
    }

    #[test]
    fn test_word_frequency_ranks_and_breaks_ties_by_first_occurrence() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);
        let path = temp_dir.path().join("freq.txt");

        fs::write(&path, "a a b b b c").unwrap();
        let top = processor.word_frequency(&path, 2, false).unwrap();
        assert_eq!(top, vec![WordCount::new("b", 3), WordCount::new("a", 2)]);

        fs::write(&path, "zeta alpha zeta alpha mid").unwrap();
        let top = processor.word_frequency(&path, 10, false).unwrap();
        assert_eq!(
            top,
            vec![
                WordCount::new("zeta", 2),
                WordCount::new("alpha", 2),
                WordCount::new("mid", 1),
            ]
        );
    }

    #[test]
    fn test_top_words_with_zero_limit() {
        let tokens = vec!["x".to_string(), "y".to_string()];
        assert!(top_words(&tokens, 0).is_empty());
        assert!(top_words(&[], 5).is_empty());
    }

    #[test]
    fn test_custom_stopwords_and_stats() {
        let temp_dir = TempDir::new().unwrap();
        let mut processor = processor(&temp_dir);
        let base = processor.stats_snapshot().base_stopwords;

        processor.add_custom_stopwords(&["Zebra", "apple", "the"]).unwrap();
        let stats = processor.stats_snapshot();
        assert_eq!(stats.custom_stopwords, 3);
        assert_eq!(stats.custom_words_list, vec!["apple", "the", "zebra"]);
        // "the" is already a base word, so the union only grows by two.
        assert_eq!(stats.total_stopwords, base + 2);

        processor.remove_custom_stopwords(&["APPLE"]).unwrap();
        assert_eq!(
            processor.stats_snapshot().custom_words_list,
            vec!["the", "zebra"]
        );
    }

    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("nested")).unwrap();
        fs::write(docs.join("b.txt"), "beta words here").unwrap();
        fs::write(docs.join("a.txt"), "alpha words").unwrap();
        fs::write(docs.join("notes.md"), "ignored").unwrap();
        fs::write(docs.join(".hidden.txt"), "ignored").unwrap();
        fs::write(docs.join("nested").join("c.txt"), "ignored").unwrap();
        fs::write(docs.join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let outcomes = processor.process_directory(&docs, "*.txt", true).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].processed().unwrap().tokens, vec!["alpha", "words"]);
        assert_eq!(outcomes[1].processed().unwrap().tokens, vec!["beta", "words"]);
        assert!(!outcomes[2].is_processed());
        assert!(outcomes[2].error().is_some());
    }

    #[test]
    fn test_process_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);

        let outcomes = processor
            .process_directory(temp_dir.path().join("nope"), "*.txt", true)
            .unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_process_directory_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&temp_dir);

        let err = processor
            .process_directory(temp_dir.path(), "[", true)
            .unwrap_err();
        assert!(matches!(err, StoplistError::InvalidPattern(_)));
    }
}
