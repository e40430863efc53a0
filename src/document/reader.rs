// src/document/reader.rs

// --- Imports ---
use std::fs;
use std::panic::{self, AssertUnwindSafe};

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::models::{DocumentFormat, ResumeDocument};
use crate::utils::error::ExtractError;

/// Plain text of a document, plus its page count where the format has pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub pages: Option<usize>,
}

/// Reads the document and returns its full plain text.
///
/// Whitespace-only output counts as a failure: a scanned PDF with no text
/// layer would otherwise yield an empty, successful parse.
pub fn extract_text(document: &ResumeDocument) -> Result<ExtractedText, ExtractError> {
    let bytes = fs::read(&document.path)?;
    tracing::info!("Extracting text from {} ({} bytes, {})", document.path.display(), document.size_bytes, document.format);

    let text = match document.format {
        DocumentFormat::Pdf => extract_pdf_text(&bytes),
        DocumentFormat::Docx => extract_docx_text(&bytes),
        DocumentFormat::Doc => {
            tracing::warn!("DOC files may not be fully supported. Consider using DOCX format.");
            extract_docx_text(&bytes)
        }
    }
    .map_err(|e| {
        tracing::error!("Error extracting text from {}: {}", document.path.display(), e);
        e
    })?;

    if text.trim().is_empty() {
        tracing::error!("No text found in {}", document.path.display());
        return Err(ExtractError::EmptyDocument);
    }

    let pages = match document.format {
        DocumentFormat::Pdf => count_pdf_pages(&bytes),
        DocumentFormat::Docx | DocumentFormat::Doc => None,
    };

    tracing::debug!("Extracted {} characters, pages: {:?}", text.chars().count(), pages);
    Ok(ExtractedText { text, pages })
}

/// Page count from the PDF page tree. Text was already extracted, so a
/// failure here only drops the count.
fn count_pdf_pages(bytes: &[u8]) -> Option<usize> {
    match panic::catch_unwind(AssertUnwindSafe(|| lopdf::Document::load_mem(bytes))) {
        Ok(Ok(doc)) => Some(doc.get_pages().len()),
        Ok(Err(e)) => {
            tracing::warn!("Could not read PDF page tree: {}", e);
            None
        }
        Err(payload) => {
            tracing::warn!("PDF page count panicked: {}", panic_message(payload.as_ref()));
            None
        }
    }
}

/// PDF text via `pdf-extract`. The library panics on some malformed files,
/// so the call runs under `catch_unwind`.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));
    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
        Err(payload) => Err(ExtractError::Panicked(panic_message(payload.as_ref()))),
    }
}

/// DOCX text via `docx-rs`: one line per paragraph, table cells included.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut lines: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => lines.push(paragraph_text(para)),
            DocumentChild::Table(table) => collect_table_text(table, &mut lines),
            _ => {} // Section properties, bookmarks, etc.
        }
    }

    Ok(lines.join("\n"))
}

fn collect_table_text(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        #[allow(irrefutable_let_patterns)]
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            #[allow(irrefutable_let_patterns)]
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => lines.push(paragraph_text(para)),
                    TableCellContent::Table(inner) => collect_table_text(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

/// Paragraph → Run → Text. Runs of one paragraph are concatenated with no
/// separator; hyperlinks (mailto links, profile URLs) are walked too.
fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_paragraph_children(&para.children, &mut out);
    out
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push(' '),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
