//! Base stopword corpus.
//!
//! A [`StopwordSource`] maps a language name to its fixed set of common words.
//! [`BundledCorpus`] ships the standard English list; [`StaticCorpus`] lets
//! callers supply their own lists.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, StoplistError};

/// The standard English stopword list used by common NLP toolkits.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Read-only lookup of base stopwords by language.
pub trait StopwordSource {
    /// Return the base stopword set for `language`.
    ///
    /// Fails with [`StoplistError::UnsupportedLanguage`] when the source has
    /// no list for that language.
    fn lookup(&self, language: &str) -> Result<HashSet<String>>;

    /// Languages this source knows about.
    fn languages(&self) -> Vec<String>;
}

/// The corpus compiled into the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledCorpus;

impl StopwordSource for BundledCorpus {
    fn lookup(&self, language: &str) -> Result<HashSet<String>> {
        match language.to_lowercase().as_str() {
            "english" | "en" => Ok(ENGLISH_STOP_WORDS.iter().map(|&w| w.to_string()).collect()),
            _ => Err(StoplistError::unsupported_language(language)),
        }
    }

    fn languages(&self) -> Vec<String> {
        vec!["english".to_string()]
    }
}

/// An in-memory corpus built from caller-supplied word lists.
#[derive(Clone, Debug, Default)]
pub struct StaticCorpus {
    lists: HashMap<String, HashSet<String>>,
}

impl StaticCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the word list for `language`.
    pub fn with_language<L, I, S>(mut self, language: L, words: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self.lists.insert(language.into(), words);
        self
    }
}

impl StopwordSource for StaticCorpus {
    fn lookup(&self, language: &str) -> Result<HashSet<String>> {
        self.lists
            .get(language)
            .cloned()
            .ok_or_else(|| StoplistError::unsupported_language(language))
    }

    fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.lists.keys().cloned().collect();
        languages.sort();
        languages
    }
}
