// src/extractors/education.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::{classify_header, SectionKind};
use super::RawEducation;
use crate::utils::text::clean_line;

const MAX_EDUCATION: usize = 5;

// --- Regex Patterns (Lazy Static) ---
static DEGREE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|bachelors|master|masters|ph\.?d|doctorate|diploma|certificate|degree|associate)\b")
        .expect("Failed to compile DEGREE_WORD_RE")
});

// Abbreviations are matched case-sensitively so "ma" or "be" in prose do not count.
static DEGREE_ABBREV_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^A-Za-z])(?:B\.?S\.?c?|B\.?A\.|BA|M\.?S\.?c?|M\.?A\.|MA|MBA|M\.B\.A\.?|B\.?Tech|M\.?Tech|B\.E\.|M\.E\.|B\.?Eng|M\.?Eng)(?:[^A-Za-z]|$)")
        .expect("Failed to compile DEGREE_ABBREV_RE")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Failed to compile YEAR_RE"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EducationState {
    Outside,
    InSection,
    /// A degree line was just read; the next body line names the institution.
    AwaitingInstitution,
}

fn is_degree_line(line: &str) -> bool {
    DEGREE_WORD_RE.is_match(line) || DEGREE_ABBREV_RE.is_match(line)
}

fn is_year_only(line: &str) -> bool {
    YEAR_RE.replace_all(line, "").chars().all(|c| !c.is_alphanumeric())
}

/// Graduation year mentioned in `line`: the last 1900-2099 year on it, so
/// `2014 - 2018` yields `2018`.
fn year_in(line: &str) -> Option<String> {
    YEAR_RE.find_iter(line).last().map(|m| m.as_str().to_string())
}

/// Education entries, at most five. A degree line opens an entry, the next
/// body line is its institution, and the first year seen afterwards is its
/// year.
pub fn extract_education(text: &str) -> Vec<RawEducation> {
    let mut state = EducationState::Outside;
    let mut entries: Vec<RawEducation> = Vec::new();

    for raw in text.lines() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = classify_header(&line) {
            state = if kind == SectionKind::Education { EducationState::InSection } else { EducationState::Outside };
            continue;
        }
        if state == EducationState::Outside {
            continue;
        }

        if is_degree_line(&line) {
            if entries.len() == MAX_EDUCATION {
                break;
            }
            entries.push(RawEducation {
                year: year_in(&line),
                degree: line,
                institution: String::new(),
                field: String::new(),
            });
            state = EducationState::AwaitingInstitution;
            continue;
        }

        let Some(current) = entries.last_mut() else {
            continue;
        };

        if current.year.is_none() {
            current.year = year_in(&line);
        }
        if state == EducationState::AwaitingInstitution && !is_year_only(&line) {
            current.institution = line;
            state = EducationState::InSection;
        }
    }

    tracing::debug!("Found {} education entries", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_institution_year() {
        let text = "\
EXPERIENCE
Bachelor's degree holders preferred
2019 - 2020
EDUCATION
Master of Science in Computer Science
Stanford University
2016 - 2018
B.S. Mathematics, 2014
UC Davis
SKILLS
Python
";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].degree, "Master of Science in Computer Science");
        assert_eq!(entries[0].institution, "Stanford University");
        assert_eq!(entries[0].year.as_deref(), Some("2018"));
        assert_eq!(entries[0].field, "");

        assert_eq!(entries[1].degree, "B.S. Mathematics, 2014");
        assert_eq!(entries[1].institution, "UC Davis");
        assert_eq!(entries[1].year.as_deref(), Some("2014"));
    }

    #[test]
    fn test_year_line_does_not_become_institution() {
        let entries = extract_education("Education\nPhD in Physics\n2020\nMIT\n");
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].year.as_deref(), Some("2020"));
    }

    #[test]
    fn test_abbreviations_need_their_case() {
        assert!(is_degree_line("MBA, Finance"));
        assert!(is_degree_line("B.Tech (Electronics)"));
        assert!(!is_degree_line("Helped me become a better engineer"));
        assert!(!is_degree_line("Boston"));
    }

    #[test]
    fn test_years_outside_range_ignored() {
        assert_eq!(year_in("Class of 1899"), None);
        assert_eq!(year_in("Room 2150"), None);
        assert_eq!(year_in("Graduated May 2099"), Some("2099".to_string()));
    }

    #[test]
    fn test_capped_at_five() {
        let mut text = String::from("Education\n");
        for i in 0..7 {
            text.push_str(&format!("Diploma {i}\nSchool {i}\n"));
        }
        assert_eq!(extract_education(&text).len(), 5);
    }
}
