// src/config.rs
use std::path::PathBuf;

// --- Defaults ---
/// Characters of text handed to the entity tagger.
pub const DEFAULT_TAG_LIMIT: usize = 10_000;
/// Characters of the original text echoed back as `raw_text`.
pub const DEFAULT_RAW_TEXT_LIMIT: usize = 500;
/// Upload limit of the calling service: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Knobs of one parsing run, filled from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub tag_limit: usize,
    pub raw_text_limit: usize,
    pub max_file_size: u64,
    pub name_lexicon: Option<PathBuf>,
    pub include_raw: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tag_limit: DEFAULT_TAG_LIMIT,
            raw_text_limit: DEFAULT_RAW_TEXT_LIMIT,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            name_lexicon: None,
            include_raw: false,
        }
    }
}
