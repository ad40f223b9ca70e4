//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StoplistArgs};
use crate::error::Result;

/// Result structure for add/remove commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreUpdateResult {
    pub store: String,
    pub language: String,
    pub words: Vec<String>,
    pub custom_stopwords: Vec<String>,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub is_stopword: bool,
}

/// Result structure for the tokens command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokensResult {
    pub tokens: Vec<String>,
    pub token_count: usize,
    pub remove_stopwords: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &StoplistArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &StoplistArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match &value {
        serde_json::Value::Array(items) => {
            for item in items {
                output_generic_human(item);
                if item.is_object() {
                    println!();
                }
            }
        }
        _ => output_generic_human(&value),
    }
    Ok(())
}

fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &StoplistArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human-readable output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let fields = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("({fields})")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}
