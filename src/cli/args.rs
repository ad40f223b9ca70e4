//! Command line argument parsing for the stoplist CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::processor::DEFAULT_TOP_N;
use crate::stopwords::store::{DEFAULT_LANGUAGE, DEFAULT_STORAGE_PATH};

/// stoplist - persistent, user-extensible stopword filtering
#[derive(Parser, Debug, Clone)]
#[command(name = "stoplist")]
#[command(about = "Filter stopwords out of text with a persistent custom stopword store")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StoplistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StoplistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add custom stopwords to a store
    Add(WordsArgs),

    /// Remove custom stopwords from a store
    Remove(WordsArgs),

    /// Check whether words are stopwords
    Check(WordsArgs),

    /// Show stopword counts and the custom word list
    Stats(StatsArgs),

    /// Tokenize text and filter it against a store
    Tokens(TokensArgs),

    /// Show the most frequent words of a file
    Freq(FreqArgs),

    /// Run text, a file or a directory through the document-type pipeline
    Process(ProcessArgs),

    /// List available document types
    Types(TypesArgs),
}

/// Location of a stopword store.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path of the custom stopword file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub store: PathBuf,

    /// Language of the store
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}

/// Arguments for commands taking a list of words
#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Words to operate on
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for showing store statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Arguments for tokenizing text
#[derive(Args, Debug, Clone)]
pub struct TokensArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Keep stopwords in the output
    #[arg(long)]
    pub keep_stopwords: bool,
}

/// Arguments for frequency analysis
#[derive(Args, Debug, Clone)]
pub struct FreqArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// File to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of words to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Count stopwords too
    #[arg(long)]
    pub keep_stopwords: bool,
}

/// Arguments for pipeline processing
#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Document type (defaults to the configured default type)
    #[arg(short = 't', long = "type", value_name = "DOC_TYPE")]
    pub doc_type: Option<String>,

    /// Compute the most frequent words
    #[arg(long)]
    pub frequency: bool,

    /// Number of frequent words to show (defaults to the configured value)
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Text to process
    #[arg(long, group = "input")]
    pub text: Option<String>,

    /// File to process
    #[arg(long, group = "input", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory to process
    #[arg(long, group = "input", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File pattern for --dir (defaults to the configured pattern)
    #[arg(long, requires = "dir")]
    pub pattern: Option<String>,

    /// Print aggregate pipeline statistics after processing
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for listing document types
#[derive(Args, Debug, Clone)]
pub struct TypesArgs {
    /// Pipeline configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_add_command() {
        let args = StoplistArgs::try_parse_from([
            "stoplist",
            "add",
            "api",
            "client",
            "--store",
            "/tmp/words.json",
        ])
        .unwrap();

        if let Command::Add(add_args) = args.command {
            assert_eq!(add_args.words, vec!["api", "client"]);
            assert_eq!(add_args.store.store, PathBuf::from("/tmp/words.json"));
            assert_eq!(add_args.store.language, "english");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_add_requires_words() {
        assert!(StoplistArgs::try_parse_from(["stoplist", "add"]).is_err());
    }

    #[test]
    fn test_freq_command() {
        let args =
            StoplistArgs::try_parse_from(["stoplist", "freq", "doc.txt", "-n", "3", "--keep-stopwords"])
                .unwrap();

        if let Command::Freq(freq_args) = args.command {
            assert_eq!(freq_args.file, PathBuf::from("doc.txt"));
            assert_eq!(freq_args.top_n, 3);
            assert!(freq_args.keep_stopwords);
            assert_eq!(freq_args.store.store, PathBuf::from(DEFAULT_STORAGE_PATH));
        } else {
            panic!("Expected Freq command");
        }
    }

    #[test]
    fn test_process_inputs_are_exclusive() {
        let args = StoplistArgs::try_parse_from([
            "stoplist", "process", "--type", "news", "--text", "hello", "--frequency",
        ])
        .unwrap();
        if let Command::Process(process_args) = args.command {
            assert_eq!(process_args.doc_type.as_deref(), Some("news"));
            assert_eq!(process_args.text.as_deref(), Some("hello"));
            assert!(process_args.frequency);
        } else {
            panic!("Expected Process command");
        }

        assert!(
            StoplistArgs::try_parse_from([
                "stoplist", "process", "--text", "a", "--file", "b.txt"
            ])
            .is_err()
        );
        assert!(
            StoplistArgs::try_parse_from(["stoplist", "process", "--pattern", "*.md"]).is_err()
        );
    }

    #[test]
    fn test_verbosity_levels() {
        let args = StoplistArgs::try_parse_from(["stoplist", "types"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = StoplistArgs::try_parse_from(["stoplist", "-vv", "types"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = StoplistArgs::try_parse_from(["stoplist", "--quiet", "types"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = StoplistArgs::try_parse_from(["stoplist", "--format", "json", "types"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
