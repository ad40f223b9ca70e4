//! Error types for the stoplist library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StoplistError`] enum.
//!
//! # Examples
//!
//! ```
//! use stoplist::error::{Result, StoplistError};
//!
//! fn lookup(language: &str) -> Result<()> {
//!     Err(StoplistError::unsupported_language(language))
//! }
//!
//! match lookup("klingon") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for stoplist operations.
#[derive(Error, Debug)]
pub enum StoplistError {
    /// A requested file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The base corpus has no stopword list for this language.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The registry has no processor for this document type.
    #[error("Unknown document type '{doc_type}'. Available: {}", .available.join(", "))]
    UnknownDocumentType {
        doc_type: String,
        available: Vec<String>,
    },

    /// The persisted stopword file could not be understood.
    #[error("Malformed stopword store {}: {reason}", .path.display())]
    MalformedStore { path: PathBuf, reason: String },

    /// A glob pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration values are out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (file reads, writes, directory scans)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with StoplistError.
pub type Result<T> = std::result::Result<T, StoplistError>;

impl StoplistError {
    /// Create a new file-not-found error.
    pub fn file_not_found<P: AsRef<Path>>(path: P) -> Self {
        StoplistError::FileNotFound(path.as_ref().to_path_buf())
    }

    /// Create a new unsupported-language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        StoplistError::UnsupportedLanguage(language.into())
    }

    /// Create a new unknown-document-type error.
    pub fn unknown_document_type<S: Into<String>>(doc_type: S, available: Vec<String>) -> Self {
        StoplistError::UnknownDocumentType {
            doc_type: doc_type.into(),
            available,
        }
    }

    /// Create a new malformed-store error.
    pub fn malformed_store<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        StoplistError::MalformedStore {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid pattern error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        StoplistError::InvalidPattern(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StoplistError::InvalidConfig(msg.into())
    }

    /// Whether this error means the requested file was absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoplistError::FileNotFound(_) => true,
            StoplistError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
