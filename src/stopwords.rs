//! Stopword sets: the read-only base corpus and the persistent custom store.

pub mod corpus;
pub mod store;
