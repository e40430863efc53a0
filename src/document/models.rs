// src/document/models.rs
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, ExtractError};

/// Document formats the reader knows how to turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// Legacy Word binary. Attempted through the DOCX reader.
    Doc,
}

impl DocumentFormat {
    /// Determines the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "doc" => Ok(DocumentFormat::Doc),
            "" => Err(ExtractError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(ExtractError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
        };
        f.write_str(name)
    }
}

/// A resume file that passed input validation and is ready to be read.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

impl ResumeDocument {
    /// Validates `path` in the order the caller relies on: extension first
    /// (so unsupported types never touch the filesystem), then existence,
    /// then size.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self, AppError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;

        if !path.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }

        let size_bytes = std::fs::metadata(path)?.len();
        if size_bytes > max_bytes {
            return Err(AppError::FileTooLarge { size: size_bytes, limit: max_bytes });
        }

        tracing::debug!("Opened {} document {} ({} bytes)", format, path.display(), size_bytes);
        Ok(Self { path: path.to_path_buf(), format, size_bytes })
    }
}
