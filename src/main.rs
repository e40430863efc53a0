// src/main.rs
mod config;
mod document;
mod extractors;
mod nlp;
mod pipeline;
mod schema;
mod utils;

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use config::ParserConfig;
use schema::ParseResponse;
use utils::AppError;

/// Extracts structured fields from a PDF/DOC/DOCX resume and prints them as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the resume file (.pdf, .docx or .doc)
    path: PathBuf,

    /// Characters of text handed to the entity tagger
    #[arg(long, default_value_t = config::DEFAULT_TAG_LIMIT)]
    tag_limit: usize,

    /// Characters of the original text echoed back as raw_text
    #[arg(long, default_value_t = config::DEFAULT_RAW_TEXT_LIMIT)]
    raw_text_limit: usize,

    /// Reject files larger than this many bytes
    #[arg(long, default_value_t = config::DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Given-name lexicon (one name per line) used to confirm person names
    #[arg(long)]
    name_lexicon: Option<PathBuf>,

    /// Include the extractor output before renaming as raw_data
    #[arg(long)]
    include_raw: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            tag_limit: self.tag_limit,
            raw_text_limit: self.raw_text_limit,
            max_file_size: self.max_file_size,
            name_lexicon: self.name_lexicon.clone(),
            include_raw: self.include_raw,
        }
    }
}

fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var, writes to stderr)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments. Help and version keep clap's own output,
    //    every other problem becomes a JSON failure.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let err = match e.kind() {
                ErrorKind::MissingRequiredArgument => AppError::MissingArgument,
                _ => AppError::InvalidArgument(first_line(&e.to_string())),
            };
            return emit(ParseResponse::failure(&err), false);
        }
    };
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Run the pipeline; a panic anywhere still ends in a JSON object
    let config = args.parser_config();
    let today = chrono::Local::now().date_naive();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pipeline::parse_resume(&args.path, &config, today)))
        .unwrap_or_else(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(AppError::UnknownFailure(message))
        });

    // 4. Emit exactly one JSON object and set the exit code
    match outcome {
        Ok(parsed) => emit(parsed.into_response(config.include_raw), args.pretty),
        Err(e) => {
            tracing::error!("Resume parsing failed ({}): {}", e.kind(), e);
            emit(ParseResponse::failure(&e), args.pretty)
        }
    }
}

fn emit(response: ParseResponse, pretty: bool) -> ExitCode {
    println!("{}", response.to_json(pretty));
    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// clap renders multi-line errors with usage hints; the JSON only needs the
// first line, minus its "error: " prefix.
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults_match_config_defaults() {
        let args = Args::try_parse_from(["resume_extractor", "cv.pdf"]).unwrap();
        assert_eq!(args.parser_config(), ParserConfig::default());
        assert!(!args.pretty);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "resume_extractor",
            "--tag-limit",
            "200",
            "--raw-text-limit",
            "50",
            "--name-lexicon",
            "names.txt",
            "--include-raw",
            "cv.docx",
        ])
        .unwrap();
        let config = args.parser_config();
        assert_eq!(config.tag_limit, 200);
        assert_eq!(config.raw_text_limit, 50);
        assert_eq!(config.name_lexicon, Some(PathBuf::from("names.txt")));
        assert!(config.include_raw);
    }

    #[test]
    fn test_missing_path_is_reported() {
        let err = Args::try_parse_from(["resume_extractor"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_first_line_strips_clap_prefix() {
        assert_eq!(first_line("error: the following required arguments were not provided:\n  <PATH>\n"),
            "the following required arguments were not provided:");
    }
}
