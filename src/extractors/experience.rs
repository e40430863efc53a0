// src/extractors/experience.rs
use super::duration::find_date_range;
use super::sections::{classify_header, SectionKind};
use super::RawExperience;
use crate::utils::text::clean_line;

const MAX_EXPERIENCES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExperienceState {
    Outside,
    /// Inside an experience section; holds the last two body lines seen.
    InSection { previous: Option<String>, before_previous: Option<String> },
}

impl ExperienceState {
    fn entered() -> Self {
        ExperienceState::InSection { previous: None, before_previous: None }
    }
}

/// Work history entries, at most five.
///
/// Every date-range line inside an experience section opens an entry whose
/// title is the body line right above it and whose company is the line
/// above that. This attribution is a layout heuristic: resumes that put the
/// company first, or the dates on the title line, come out shuffled.
pub fn extract_experience(text: &str) -> Vec<RawExperience> {
    let mut state = ExperienceState::Outside;
    let mut entries: Vec<RawExperience> = Vec::new();

    for raw in text.lines() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(kind) = classify_header(&line) {
            state = if kind == SectionKind::Experience { ExperienceState::entered() } else { ExperienceState::Outside };
            tracing::trace!("Experience scanner: header '{}' -> {:?}", line, kind);
            continue;
        }

        let ExperienceState::InSection { previous, before_previous } = &mut state else {
            continue;
        };

        if let Some(duration) = find_date_range(&line) {
            entries.push(RawExperience {
                company: before_previous.take().unwrap_or_default(),
                title: previous.take().unwrap_or_default(),
                duration: duration.to_string(),
                description: String::new(),
            });
            if entries.len() == MAX_EXPERIENCES {
                break;
            }
            continue;
        }

        *before_previous = previous.replace(line);
    }

    tracing::debug!("Found {} experience entries", entries.len());
    entries
}
