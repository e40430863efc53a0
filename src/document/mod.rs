// src/document/mod.rs
pub mod models;
pub mod reader;

pub use models::ResumeDocument;
pub use reader::{extract_text, ExtractedText};
