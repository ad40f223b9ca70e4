//! Stop filter implementation.
//!
//! Removes tokens whose text is a stop word. The word set is captured when
//! the filter is built; build a fresh filter from a
//! [`StopwordStore`](crate::stopwords::store::StopwordStore) whenever the
//! store may have changed.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::stopwords::store::StopwordStore;

/// A filter that removes stop words from the token stream.
///
/// Matching is exact: tokens are expected to be lowercase already, as the
/// default tokenizer produces them.
///
/// # Examples
///
/// ```
/// use stoplist::analysis::token::Token;
/// use stoplist::analysis::token_filter::Filter;
/// use stoplist::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["this", "is"]);
/// let tokens = vec![
///     Token::new("this", 0),
///     Token::new("is", 1),
///     Token::new("test", 2)
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "test");
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the given stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Snapshot the current effective stopword set of a store.
    pub fn from_store(store: &StopwordStore) -> Self {
        Self::with_stop_words(store.effective_set())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
