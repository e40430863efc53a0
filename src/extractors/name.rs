// src/extractors/name.rs
use crate::nlp::{EntityLabel, TaggedDocument};

/// How many leading lines the fallback inspects.
const FALLBACK_LINES: usize = 5;
const MAX_FALLBACK_TOKENS: usize = 4;

/// Candidate's name: the first PERSON entity, otherwise the first short line
/// near the top of the document that is neither an email address nor a
/// tagged ORG.
pub fn extract_name(doc: &TaggedDocument) -> Option<String> {
    if let Some(person) = doc.first(EntityLabel::Person) {
        return Some(person.text.clone());
    }

    tracing::debug!("No PERSON entity, falling back to the first {} lines", FALLBACK_LINES);
    doc.text()
        .lines()
        .take(FALLBACK_LINES)
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && line.split_whitespace().count() <= MAX_FALLBACK_TOKENS
                && !line.contains('@')
                && !doc.is_labeled(line, EntityLabel::Org)
        })
        .map(str::to_string)
}
