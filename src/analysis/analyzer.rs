//! Stopword analyzer: tokenizer followed by an optional stop filter.
//!
//! The analyzer applies processing in this order:
//! 1. Tokenizer: lowercases the text and splits it into word tokens
//! 2. Stop filter: drops tokens found in the store's effective stopword set
//!
//! The stop filter is rebuilt from the store on every call, so words added to
//! or removed from the store take effect immediately.
//!
//! # Examples
//!
//! ```
//! use stoplist::analysis::analyzer::tokenize;
//!
//! assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;
use crate::stopwords::store::StopwordStore;

static DEFAULT_TOKENIZER: LazyLock<RegexTokenizer> = LazyLock::new(RegexTokenizer::default);

/// Combines a tokenizer with stopword removal against a [`StopwordStore`].
#[derive(Clone)]
pub struct StopwordAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl StopwordAnalyzer {
    /// Create an analyzer around the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        StopwordAnalyzer { tokenizer }
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Tokenize `text`, removing stopwords when `remove_stopwords` is set.
    pub fn analyze(
        &self,
        text: &str,
        store: &StopwordStore,
        remove_stopwords: bool,
    ) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        if !remove_stopwords {
            return Ok(tokens);
        }
        StopFilter::from_store(store).filter(tokens)
    }

    /// Like [`analyze`](Self::analyze) but returns only the token texts.
    pub fn analyze_words(
        &self,
        text: &str,
        store: &StopwordStore,
        remove_stopwords: bool,
    ) -> Result<Vec<String>> {
        Ok(self
            .analyze(text, store, remove_stopwords)?
            .map(|token| token.text)
            .collect())
    }
}

impl Default for StopwordAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(DEFAULT_TOKENIZER.clone()))
    }
}

/// Lowercase `text` and split it into maximal runs of word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER
        .extract(text)
        .into_iter()
        .map(|token| token.text)
        .collect()
}

/// Drop tokens that are stopwords in `store`, keeping order and duplicates.
///
/// With `remove_stopwords == false` the tokens are returned unchanged.
pub fn filter_tokens(
    tokens: Vec<String>,
    store: &StopwordStore,
    remove_stopwords: bool,
) -> Vec<String> {
    if !remove_stopwords {
        return tokens;
    }
    tokens
        .into_iter()
        .filter(|token| !store.is_stopword(token))
        .collect()
}

/// Tokenize `text` and filter it against `store` in one step.
pub fn preprocess(text: &str, store: &StopwordStore, remove_stopwords: bool) -> Vec<String> {
    filter_tokens(tokenize(text), store, remove_stopwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::corpus::BundledCorpus;
    use crate::stopwords::store::StoreConfig;
    use tempfile::TempDir;

    fn english_store(dir: &TempDir) -> StopwordStore {
        let config = StoreConfig::new(dir.path().join("custom_stopwords.json"));
        StopwordStore::open_with_source(config, &BundledCorpus).unwrap()
    }

    #[test]
    fn test_tokenize_is_pure() {
        let text = "Rust's ownership: borrow, move & copy!";
        assert_eq!(tokenize(text), tokenize(text));
        assert_eq!(
            tokenize(text),
            vec!["rust", "s", "ownership", "borrow", "move", "copy"]
        );
    }

    #[test]
    fn test_filter_without_removal_is_identity() {
        let temp_dir = TempDir::new().unwrap();
        let store = english_store(&temp_dir);
        let tokens = tokenize("The cat and the hat");

        assert_eq!(filter_tokens(tokens.clone(), &store, false), tokens);
    }

    #[test]
    fn test_preprocess_with_custom_stopwords() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = english_store(&temp_dir);
        store.add(&["api", "client", "request", "server"]).unwrap();

        let text = "The API client sends a request to the server.";
        assert_eq!(preprocess(text, &store, true), vec!["sends"]);
        assert_eq!(
            preprocess(text, &store, false),
            vec!["the", "api", "client", "sends", "a", "request", "to", "the", "server"]
        );
    }

    #[test]
    fn test_analyzer_sees_store_mutations() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = english_store(&temp_dir);
        let analyzer = StopwordAnalyzer::default();

        let before = analyzer.analyze_words("compile the crate", &store, true).unwrap();
        assert_eq!(before, vec!["compile", "crate"]);

        store.add(&["crate"]).unwrap();
        let after = analyzer.analyze_words("compile the crate", &store, true).unwrap();
        assert_eq!(after, vec!["compile"]);
        assert_eq!(analyzer.tokenizer().name(), "regex");
    }
}
