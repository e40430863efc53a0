// src/extractors/summary.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::{classify_header, SectionKind, MAX_HEADER_CHARS};
use crate::utils::text::{clean_line, is_fully_upper};

const MIN_SUMMARY_LINE_CHARS: usize = 20;
const MAX_SUMMARY_LINES: usize = 3;

static SUMMARY_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:summary|profile|objective|about)\b").expect("Failed to compile SUMMARY_HEADER_RE")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryState {
    Searching,
    Collecting,
}

/// Up to three prose lines following the first summary/profile/objective/about
/// header, joined with spaces.
///
/// Short lines inside the section are skipped; an empty or ALL-CAPS line ends
/// the section once something has been collected. The next section header
/// ends it in any case.
pub fn extract_summary(text: &str) -> Option<String> {
    let mut state = SummaryState::Searching;
    let mut collected: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = clean_line(raw);

        match state {
            SummaryState::Searching => {
                if line.chars().count() < MAX_HEADER_CHARS && SUMMARY_HEADER_RE.is_match(&line) {
                    state = SummaryState::Collecting;
                }
            }
            SummaryState::Collecting => {
                match classify_header(&line) {
                    Some(SectionKind::Summary) => continue,
                    Some(kind) => {
                        tracing::trace!("Summary ends at {:?} header '{}'", kind, line);
                        break;
                    }
                    None => {}
                }
                if line.is_empty() || is_fully_upper(&line) {
                    if !collected.is_empty() {
                        break;
                    }
                    continue;
                }
                if line.chars().count() > MIN_SUMMARY_LINE_CHARS {
                    collected.push(line);
                    if collected.len() == MAX_SUMMARY_LINES {
                        break;
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_lines_after_header() {
        let text = "Jane Doe\n\nPROFESSIONAL SUMMARY\n\nBackend engineer with eight years of experience\nbuilding payment systems at scale.\nShort\n\nEXPERIENCE\n";
        assert_eq!(
            extract_summary(text).as_deref(),
            Some("Backend engineer with eight years of experience building payment systems at scale.")
        );
    }

    #[test]
    fn test_caps_line_ends_section() {
        let text = "Objective\nSeeking a role in platform engineering teams\nSKILLS\nRust, Go, and distributed systems work\n";
        assert_eq!(extract_summary(text).as_deref(), Some("Seeking a role in platform engineering teams"));
    }

    #[test]
    fn test_title_case_header_ends_section() {
        let text = "Summary\nBackend engineer building payment systems.\nExperience\nAcme Corporation International Holdings\nSenior Software Engineer, Payments\n";
        assert_eq!(extract_summary(text).as_deref(), Some("Backend engineer building payment systems."));

        let text = "Profile\nWork History\nStaff engineer at a very large company\n";
        assert_eq!(extract_summary(text), None);
    }

    #[test]
    fn test_split_summary_header_is_skipped() {
        let text = "Professional Summary\nAbout Me\nBackend engineer building payment systems.\n";
        assert_eq!(extract_summary(text).as_deref(), Some("Backend engineer building payment systems."));
    }

    #[test]
    fn test_at_most_three_lines() {
        let text = "Profile\nline one is long enough to keep\nline two is long enough to keep\nline three is long enough to keep\nline four is long enough to keep\n";
        let summary = extract_summary(text).unwrap();
        assert!(summary.ends_with("line three is long enough to keep"));
        assert!(!summary.contains("four"));
    }

    #[test]
    fn test_no_header_means_absent() {
        assert_eq!(extract_summary("Jane Doe\nEngineer with many long descriptive lines\n"), None);
        assert_eq!(extract_summary("Summary\n\nSHORT\n"), None);
    }
}
