//! Command implementations for the stoplist CLI.

use log::debug;

use crate::analysis::analyzer::preprocess;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::{Result, StoplistError};
use crate::pipeline::{NlpPipeline, TextOptions};
use crate::processor::TextProcessor;
use crate::stopwords::store::{StopwordStore, StoreConfig};

/// Execute a CLI command.
pub fn execute_command(args: StoplistArgs) -> Result<()> {
    match &args.command {
        Command::Add(words_args) => add_words(words_args, &args),
        Command::Remove(words_args) => remove_words(words_args, &args),
        Command::Check(words_args) => check_words(words_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Tokens(tokens_args) => show_tokens(tokens_args, &args),
        Command::Freq(freq_args) => show_frequency(freq_args, &args),
        Command::Process(process_args) => run_pipeline(process_args, &args),
        Command::Types(types_args) => list_types(types_args, &args),
    }
}

fn open_store(args: &StoreArgs) -> Result<StopwordStore> {
    debug!("Opening store {} ({})", args.store.display(), args.language);
    StopwordStore::open(StoreConfig::new(&args.store).with_language(args.language.clone()))
}

fn load_config(path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::from_file(path),
        None => Ok(PipelineConfig::default()),
    }
}

fn update_result(store: &StopwordStore, words: &[String]) -> StoreUpdateResult {
    StoreUpdateResult {
        store: store.path().display().to_string(),
        language: store.language().to_string(),
        words: words.iter().map(|w| w.to_lowercase()).collect(),
        custom_stopwords: store.custom_stopwords().iter().cloned().collect(),
    }
}

/// Add custom stopwords.
fn add_words(args: &WordsArgs, cli_args: &StoplistArgs) -> Result<()> {
    let mut store = open_store(&args.store)?;
    store.add(&args.words)?;

    output_result(
        "Custom stopwords added",
        &update_result(&store, &args.words),
        cli_args,
    )
}

/// Remove custom stopwords.
fn remove_words(args: &WordsArgs, cli_args: &StoplistArgs) -> Result<()> {
    let mut store = open_store(&args.store)?;
    store.remove(&args.words)?;

    output_result(
        "Custom stopwords removed",
        &update_result(&store, &args.words),
        cli_args,
    )
}

/// Report which words are stopwords.
fn check_words(args: &WordsArgs, cli_args: &StoplistArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    let checks: Vec<WordCheck> = args
        .words
        .iter()
        .map(|word| WordCheck {
            word: word.clone(),
            is_stopword: store.is_stopword(word),
        })
        .collect();

    output_result("Stopword check", &checks, cli_args)
}

/// Show store statistics.
fn show_stats(args: &StatsArgs, cli_args: &StoplistArgs) -> Result<()> {
    let processor = TextProcessor::new(open_store(&args.store)?);
    output_result("Stopword statistics", &processor.stats_snapshot(), cli_args)
}

/// Tokenize text against a store.
fn show_tokens(args: &TokensArgs, cli_args: &StoplistArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    let remove_stopwords = !args.keep_stopwords;
    let tokens = preprocess(&args.text, &store, remove_stopwords);

    output_result(
        "Tokens",
        &TokensResult {
            token_count: tokens.len(),
            tokens,
            remove_stopwords,
        },
        cli_args,
    )
}

/// Show the most frequent words of a file.
fn show_frequency(args: &FreqArgs, cli_args: &StoplistArgs) -> Result<()> {
    let processor = TextProcessor::new(open_store(&args.store)?);
    let top = processor.word_frequency(&args.file, args.top_n, !args.keep_stopwords)?;

    output_result(
        &format!("Top {} words in {}", args.top_n, args.file.display()),
        &top,
        cli_args,
    )
}

/// Run text, a file or a directory through the pipeline.
fn run_pipeline(args: &ProcessArgs, cli_args: &StoplistArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let options = TextOptions {
        compute_frequency: args.frequency,
        top_n: args.top_n.unwrap_or(config.top_n),
    };
    let mut pipeline = NlpPipeline::new(config)?;
    let doc_type = args.doc_type.as_deref();

    if let Some(text) = &args.text {
        let result = pipeline.process_text(text, doc_type, &options)?;
        output_result("Processed text", &result, cli_args)?;
    } else if let Some(file) = &args.file {
        let outcome = pipeline.process_file(file, doc_type, &options)?;
        output_result("Processed file", &outcome, cli_args)?;
    } else if let Some(dir) = &args.dir {
        let outcomes =
            pipeline.process_directory(dir, args.pattern.as_deref(), doc_type, &options)?;
        output_result(
            &format!("Processed {} files in {}", outcomes.len(), dir.display()),
            &outcomes,
            cli_args,
        )?;
    } else {
        return Err(StoplistError::invalid_config(
            "one of --text, --file or --dir is required",
        ));
    }

    if args.stats {
        output_result("Pipeline statistics", &pipeline.pipeline_stats(), cli_args)?;
    }
    Ok(())
}

/// List document types.
fn list_types(args: &TypesArgs, cli_args: &StoplistArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let pipeline = NlpPipeline::new(config)?;
    output_result(
        "Available document types",
        &pipeline.available_document_types(),
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> Result<()> {
        execute_command(StoplistArgs::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_add_and_remove_commands_persist() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().join("words.json");
        let store_arg = store.to_str().unwrap();

        run(&["stoplist", "-q", "add", "API", "client", "--store", store_arg]).unwrap();
        let reopened = StopwordStore::open(StoreConfig::new(&store)).unwrap();
        assert!(reopened.is_stopword("api"));
        assert!(reopened.is_stopword("client"));

        run(&["stoplist", "-q", "remove", "client", "--store", store_arg]).unwrap();
        let reopened = StopwordStore::open(StoreConfig::new(&store)).unwrap();
        assert!(!reopened.is_stopword("client"));
    }

    #[test]
    fn test_freq_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = temp_dir.path().join("words.json");
        let missing = temp_dir.path().join("missing.txt");

        let err = run(&[
            "stoplist",
            "freq",
            missing.to_str().unwrap(),
            "--store",
            store.to_str().unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, StoplistError::FileNotFound(_)));
    }

    #[test]
    fn test_process_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pipeline.json");
        let stores = temp_dir.path().join("stores");
        fs::write(
            &config_path,
            serde_json::json!({
                "default_type": "news",
                "storage": {"mode": "per_type", "directory": stores}
            })
            .to_string(),
        )
        .unwrap();

        run(&[
            "stoplist",
            "-q",
            "--format",
            "json",
            "process",
            "--config",
            config_path.to_str().unwrap(),
            "--text",
            "Officials said the bridge reopened",
            "--stats",
        ])
        .unwrap();
        assert!(stores.join("news.json").exists());
    }

    #[test]
    fn test_process_requires_input() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pipeline.json");
        fs::write(
            &config_path,
            serde_json::json!({"storage": {"mode": "per_type", "directory": temp_dir.path()}})
                .to_string(),
        )
        .unwrap();

        let err = run(&[
            "stoplist",
            "process",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, StoplistError::InvalidConfig(_)));
    }
}
