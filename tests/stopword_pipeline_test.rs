#[cfg(test)]
mod tests {
    use std::fs;

    use stoplist::analysis::analyzer::{filter_tokens, preprocess, tokenize};
    use stoplist::config::PipelineConfig;
    use stoplist::error::StoplistError;
    use stoplist::pipeline::{NlpPipeline, PipelineStats, TextOptions};
    use stoplist::processor::{FileOutcome, TextProcessor, WordCount};
    use stoplist::registry::{ProcessorRegistry, StorageLayout};
    use stoplist::stopwords::store::{StopwordStore, StoreConfig};
    use tempfile::TempDir;

    fn english_store(dir: &TempDir) -> StopwordStore {
        StopwordStore::open(StoreConfig::new(dir.path().join("custom_stopwords.json"))).unwrap()
    }

    #[test]
    fn test_api_client_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = english_store(&temp_dir);
        store.add(&["api", "client", "request", "server"]).unwrap();

        let text = "The API client sends a request to the server.";
        assert_eq!(preprocess(text, &store, true), vec!["sends"]);

        // Without removal the tokens are only case-folded.
        let tokens = tokenize(text);
        assert_eq!(filter_tokens(tokens.clone(), &store, false), tokens);
    }

    #[test]
    fn test_store_survives_reopen_and_keeps_other_languages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom_stopwords.json");
        fs::write(&path, r#"{"french": ["le", "la"]}"#).unwrap();

        let mut store = StopwordStore::open(StoreConfig::new(&path)).unwrap();
        store.add(&["Widget", "gadget"]).unwrap();
        store.remove(&["gadget"]).unwrap();

        let reopened = StopwordStore::open(StoreConfig::new(&path)).unwrap();
        assert_eq!(reopened.custom_stopwords(), store.custom_stopwords());
        assert!(reopened.is_stopword("WIDGET"));
        assert!(!reopened.is_stopword("gadget"));

        let data: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(data["french"], serde_json::json!(["le", "la"]));
        assert_eq!(data["english"], serde_json::json!(["widget"]));
    }

    #[test]
    fn test_word_frequency_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let processor = TextProcessor::new(english_store(&temp_dir));
        let path = temp_dir.path().join("counts.txt");
        fs::write(&path, "a a b b b c").unwrap();

        let top = processor.word_frequency(&path, 2, false).unwrap();
        assert_eq!(top, vec![WordCount::new("b", 3), WordCount::new("a", 2)]);
    }

    #[test]
    fn test_registry_unknown_type() {
        let temp_dir = TempDir::new().unwrap();
        let registry = ProcessorRegistry::with_presets(
            StorageLayout::PerType {
                directory: temp_dir.path().to_path_buf(),
            },
            "english",
        );

        let err = registry.get_processor("unknown").err().unwrap();
        assert!(matches!(err, StoplistError::UnknownDocumentType { .. }));
        assert_eq!(
            err.to_string(),
            "Unknown document type 'unknown'. Available: technical, web, business, academic, news"
        );
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let config = PipelineConfig::default().with_storage(StorageLayout::PerType {
            directory: temp_dir.path().join("stores"),
        });
        let mut pipeline = NlpPipeline::new(config).unwrap();

        let empty = pipeline.process_text("", None, &TextOptions::default()).unwrap();
        assert_eq!(empty.token_count, 0);
        assert_eq!(empty.reduction_percent, 0.0);
        pipeline.reset();

        pipeline
            .process_batch(&[
                ("parsers lexers tokens grammars", "technical"),
                ("markets rallied as investors cheered strong earnings", "business"),
            ])
            .unwrap();

        match pipeline.pipeline_stats() {
            PipelineStats::Summary(summary) => {
                assert_eq!(summary.total_documents, 2);
                assert_eq!(summary.total_tokens, 10);
                assert_eq!(summary.avg_tokens_per_doc, 5.0);
                assert_eq!(summary.document_types, vec!["business", "technical"]);
            }
            PipelineStats::NoResults => panic!("expected a summary"),
        }

        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("a.txt"), "Researchers published the paper").unwrap();
        let outcomes = pipeline
            .process_directory(&docs, None, Some("academic"), &TextOptions::with_frequency(5))
            .unwrap();
        match &outcomes[..] {
            [FileOutcome::Processed(result)] => {
                assert_eq!(result.tokens, vec!["researchers", "published"]);
                assert_eq!(result.top_words.as_ref().unwrap().len(), 2);
            }
            other => panic!("unexpected outcomes: {other:?}"),
        }

        let missing = pipeline
            .process_file(docs.join("nope.txt"), None, &TextOptions::default())
            .unwrap();
        assert_eq!(missing.error(), Some("File not found"));
        assert_eq!(pipeline.results().len(), 3);
    }
}
