// src/utils/text.rs
//! Small string helpers shared by the tagger, the extractors and the schema.

/// Returns the first `max_chars` characters of `text`, never splitting a
/// UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Normalizes one line of extracted text: trims it and folds the
/// non-breaking and zero-width characters PDF/DOCX output is full of.
pub fn clean_line(line: &str) -> String {
    line.replace(['\u{00A0}', '\u{2007}', '\u{202F}'], " ")
        .replace(['\u{200B}', '\u{FEFF}'], "")
        .trim()
        .to_string()
}

/// True when the line has at least one letter and no lower-case letters,
/// e.g. a section header like `WORK EXPERIENCE`.
pub fn is_fully_upper(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest: `machine learning` -> `Machine Learning`, `ci/cd` -> `Ci/Cd`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
