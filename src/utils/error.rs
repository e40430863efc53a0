// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}. Allowed: .pdf, .docx, .doc")]
    UnsupportedFormat(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX text extraction failed: {0}")]
    Docx(String),

    #[error("Could not extract text from file")]
    EmptyDocument,

    #[error("Text extraction library panicked: {0}")]
    Panicked(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Could not load name lexicon {path}: {source}")]
    LexiconUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Name lexicon {0} contains no entries")]
    EmptyLexicon(PathBuf),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage: resume_extractor <path_to_resume_file>")]
    MissingArgument,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("{0}")]
    UnsupportedFormat(ExtractError),

    #[error("Resume parsing failed: {0}")]
    ExtractionFailed(ExtractError),

    #[error("Could not load entity model: {0}")]
    ModelUnavailable(#[from] TaggerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Resume parsing failed: {0}")]
    UnknownFailure(String),
}

impl AppError {
    /// Stable name reported as `error_type` in the failure object.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingArgument => "MissingArgument",
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::FileNotFound(_) => "FileNotFound",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::UnsupportedFormat(_) => "UnsupportedFormat",
            AppError::ExtractionFailed(_) => "ExtractionFailed",
            AppError::ModelUnavailable(_) => "ModelUnavailable",
            AppError::Io(_) => "IoError",
            AppError::UnknownFailure(_) => "UnknownFailure",
        }
    }
}

// Unsupported formats are a caller mistake, everything else from the
// document layer is a failed extraction.
impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => AppError::UnsupportedFormat(err),
            other => AppError::ExtractionFailed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_maps_to_its_own_kind() {
        let err: AppError = ExtractError::UnsupportedFormat(".txt".to_string()).into();
        assert_eq!(err.kind(), "UnsupportedFormat");
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_library_errors_map_to_extraction_failed() {
        let err: AppError = ExtractError::Pdf("bad xref".to_string()).into();
        assert_eq!(err.kind(), "ExtractionFailed");
        assert!(err.to_string().contains("bad xref"));
    }
}
