// src/extractors/sections.rs
//! Section header recognition shared by the line-scanning extractors.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::text::clean_line;

// --- Constants ---
/// Headers are short; anything at or above this is body text.
pub const MAX_HEADER_CHARS: usize = 50;
const MAX_CERTIFICATIONS: usize = 10;

// Every word of a header line must come from this set.
static HEADER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "summary", "profile", "objective", "about", "me", "career", "professional", "personal",
        "executive", "experience", "work", "history", "employment", "relevant", "education",
        "academic", "background", "qualifications", "skills", "technical", "key", "core",
        "competencies", "technologies", "certifications", "certification", "certificates",
        "licenses", "license", "training", "projects", "selected", "references", "awards",
        "achievements", "publications", "languages", "interests", "hobbies", "volunteer",
        "volunteering", "and", "of", "my",
    ]
    .into_iter()
    .collect()
});

static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-*•·▪◦●‣>]+|\d+[.)])\s*").expect("Failed to compile BULLET_RE")
});

/// The resume sections the extractors care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    /// A recognized header of a section nobody extracts (awards, references, ...)
    Other,
}

/// Classifies `line` as a section header, or `None` for body text.
///
/// A header is a short line whose words all belong to the header vocabulary,
/// so "Experience" and "WORK HISTORY:" are headers while "Managed employment
/// contracts" is not.
pub fn classify_header(line: &str) -> Option<SectionKind> {
    let line = line.trim();
    if line.is_empty() || line.chars().count() >= MAX_HEADER_CHARS {
        return None;
    }

    let lowered = line.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| c.is_whitespace() || matches!(c, '&' | '/' | ':' | ',' | '-' | '|'))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() || !words.iter().all(|w| HEADER_WORDS.contains(w)) {
        return None;
    }
    if words.iter().all(|w| matches!(*w, "and" | "of" | "my")) {
        return None;
    }

    let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));
    let kind = if has(&["volunteer", "volunteering"]) {
        SectionKind::Other
    } else if has(&["experience", "employment"]) || lowered.contains("work history") {
        SectionKind::Experience
    } else if has(&["education", "academic"]) {
        SectionKind::Education
    } else if has(&["certifications", "certification", "certificates", "licenses", "license", "training"]) {
        SectionKind::Certifications
    } else if has(&["skills", "competencies", "technologies"]) {
        SectionKind::Skills
    } else if has(&["projects"]) {
        SectionKind::Projects
    } else if has(&["summary", "profile", "objective", "about"]) {
        SectionKind::Summary
    } else {
        SectionKind::Other
    };
    Some(kind)
}

/// Strips a leading bullet marker (`-`, `•`, `1.`) from a list line.
pub fn strip_bullet(line: &str) -> &str {
    match BULLET_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CertState {
    Outside,
    InSection,
}

/// Non-empty lines listed under a certifications/licenses header, up to 10.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let mut state = CertState::Outside;
    let mut found = Vec::new();

    for raw in text.lines() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = classify_header(&line) {
            state = if kind == SectionKind::Certifications { CertState::InSection } else { CertState::Outside };
            continue;
        }

        if state == CertState::InSection {
            let item = strip_bullet(&line).trim();
            if !item.is_empty() {
                found.push(item.to_string());
                if found.len() == MAX_CERTIFICATIONS {
                    break;
                }
            }
        }
    }

    found
}
