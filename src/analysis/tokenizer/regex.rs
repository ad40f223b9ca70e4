//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, StoplistError};

/// The default token pattern: maximal runs of letters, numeric characters
/// and underscores. Combining marks end a token.
pub const DEFAULT_PATTERN: &str = r"[\p{L}\p{N}_]+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// By default the whole input is lowercased before matching, so every token
/// it produces is lowercase and offsets refer to the lowercased text.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to lowercase the text before matching
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default word pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| StoplistError::invalid_pattern(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            lowercase: true,
        })
    }

    /// Set whether the text is lowercased before matching.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer lowercases its input.
    pub fn is_lowercase(&self) -> bool {
        self.lowercase
    }

    /// Extract all tokens from `text`, left to right.
    pub fn extract(&self, text: &str) -> Vec<Token> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_owned()
        };

        self.pattern
            .find_iter(&text)
            .filter(|mat| !mat.as_str().is_empty())
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.extract(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
