//! Text analysis: tokenization and stopword filtering.
//!
//! The pieces mirror a classic analysis chain: a [`tokenizer`] produces a
//! token stream, [`token_filter`]s transform it, and the [`analyzer`] ties
//! both to a [`StopwordStore`](crate::stopwords::store::StopwordStore).

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
