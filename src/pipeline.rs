// src/pipeline.rs
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::config::ParserConfig;
use crate::document::{self, ExtractedText, ResumeDocument};
use crate::extractors::{self, RawExtraction};
use crate::nlp::{EntityTagger, RuleTagger};
use crate::schema::{self, ParseResponse, ResumeData};
use crate::utils::text::truncate_chars;
use crate::utils::AppError;

/// Result of a successful run, before it is wrapped into a response.
#[derive(Debug, Clone)]
pub struct ParsedResume {
    pub data: ResumeData,
    pub raw: RawExtraction,
}

impl ParsedResume {
    pub fn into_response(self, include_raw: bool) -> ParseResponse {
        let raw = include_raw.then_some(self.raw);
        ParseResponse::success(self.data, raw)
    }
}

/// Builds the tagger described by the config. A configured lexicon that
/// cannot be loaded is fatal.
pub fn build_tagger(config: &ParserConfig) -> Result<RuleTagger, AppError> {
    match &config.name_lexicon {
        Some(path) => Ok(RuleTagger::with_lexicon(path)?),
        None => Ok(RuleTagger::new()),
    }
}

/// Validate → extract text → tag once → run the field extractors → reshape.
pub fn parse_resume(path: &Path, config: &ParserConfig, today: NaiveDate) -> Result<ParsedResume, AppError> {
    // 1. Validate the input file
    let resume = ResumeDocument::open(path, config.max_file_size)?;

    // 2. Load the tagger before paying for text extraction
    let tagger = build_tagger(config)?;

    // 3. Extract plain text
    let ExtractedText { text, pages } = document::extract_text(&resume)?;
    tracing::info!("Extracted {} characters from {}", text.chars().count(), resume.path.display());

    // 4. Tag a bounded prefix
    let tagged = tagger.tag(truncate_chars(&text, config.tag_limit));
    tracing::debug!("Tagged {} entities in the first {} characters", tagged.entities().len(), config.tag_limit);

    // 5. Field extraction and schema transformation
    let raw = extractors::extract_fields(&text, &tagged, today);
    let data = schema::transform(raw.clone(), &text, pages, config.raw_text_limit, today.year());

    tracing::info!(
        "Parsed resume: name={}, {} skills, {} experiences, {} education entries",
        data.full_name.is_some(),
        data.skills.len(),
        data.experiences.len(),
        data.education.len()
    );
    Ok(ParsedResume { data, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn docx_with_lines(lines: &[&str]) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let docx = lines.iter().fold(Docx::new(), |docx, line| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)))
        });
        docx.build().pack(file.reopen().unwrap()).unwrap();
        file
    }

    #[test]
    fn test_parse_docx_resume() {
        let file = docx_with_lines(&[
            "Jane Doe",
            "jane.doe@example.com",
            "(415) 555-0199",
            "Experience",
            "Acme Corp",
            "Engineer",
            "Mar 2021 - Present",
        ]);

        let parsed = parse_resume(file.path(), &ParserConfig::default(), today()).unwrap();
        assert_eq!(parsed.data.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(parsed.data.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(parsed.data.phone.as_deref(), Some("4155550199"));
        assert_eq!(parsed.data.experiences[0].company, "Acme Corp");
        assert!(parsed.data.experiences[0].current);
        assert_eq!(parsed.data.total_experience, Some(3.0));
        assert!(parsed.data.raw_text.starts_with("Jane Doe"));
    }

    #[test]
    fn test_tag_limit_bounds_name_search() {
        let file = docx_with_lines(&["jane.doe@example.com", "Jane Doe"]);
        let config = ParserConfig { tag_limit: 5, ..ParserConfig::default() };

        let parsed = parse_resume(file.path(), &config, today()).unwrap();
        // Only "jane." reaches the tagger, so the fallback returns that line fragment.
        assert_eq!(parsed.data.full_name.as_deref(), Some("jane."));
        assert_eq!(parsed.data.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_missing_lexicon_is_model_unavailable() {
        let file = docx_with_lines(&["Jane Doe"]);
        let config = ParserConfig { name_lexicon: Some("/no/such/names.txt".into()), ..ParserConfig::default() };

        let err = parse_resume(file.path(), &config, today()).unwrap_err();
        assert_eq!(err.kind(), "ModelUnavailable");
    }

    #[test]
    fn test_unsupported_and_missing_inputs() {
        let mut txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(txt, "Jane Doe").unwrap();
        let err = parse_resume(txt.path(), &ParserConfig::default(), today()).unwrap_err();
        assert_eq!(err.kind(), "UnsupportedFormat");

        let err = parse_resume(Path::new("/no/such/resume.docx"), &ParserConfig::default(), today()).unwrap_err();
        assert_eq!(err.kind(), "FileNotFound");
    }

    #[test]
    fn test_raw_data_only_on_request() {
        let file = docx_with_lines(&["Jane Doe"]);
        let parsed = parse_resume(file.path(), &ParserConfig::default(), today()).unwrap();

        assert!(parsed.clone().into_response(false).raw_data.is_none());
        let response = parsed.into_response(true);
        assert_eq!(response.raw_data.unwrap().name.as_deref(), Some("Jane Doe"));
    }
}
