// src/nlp/tagger.rs

// --- Imports ---
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::utils::error::TaggerError;

// --- Constants ---
/// A name line never carries more tokens than this.
const MAX_NAME_TOKENS: usize = 4;
/// Longer lines are prose, not a name.
const MAX_NAME_LINE_CHARS: usize = 40;
const MAX_ORG_TOKENS: usize = 8;

// --- Regex Patterns (Lazy Static) ---
// One token of a personal name: "Jane", "O'Neil", "Smith-Jones", "JANE", or an initial "Q."
static NAME_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z][a-z]+(?:['-][A-Z]?[a-z]+)*|[A-Z]{2,}(?:['-][A-Z]+)*|[A-Z]\.)$")
        .expect("Failed to compile NAME_TOKEN_RE")
});

static INITIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]\.$").expect("Failed to compile INITIAL_RE"));

// Words that show up Title-cased on their own line in resumes but are not names.
static NON_NAME_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // section headers
        "summary", "profile", "objective", "about", "me", "experience", "work", "history",
        "employment", "professional", "education", "academic", "skills", "technical",
        "certifications", "certificates", "licenses", "projects", "references", "contact",
        "languages", "interests", "hobbies", "achievements", "awards", "publications",
        "volunteer", "career", "personal", "information", "details", "resume", "curriculum",
        "vitae", "cv", "core", "competencies", "qualifications", "highlights",
        // titles
        "engineer", "developer", "manager", "analyst", "designer", "consultant", "director",
        "intern", "lead", "senior", "junior", "architect", "scientist", "specialist",
        "administrator", "assistant", "associate", "coordinator", "officer", "president",
        "head", "principal", "staff", "software", "data", "product", "project", "marketing",
        "sales", "full", "stack", "frontend", "backend", "web", "mobile", "devops", "cloud",
        "systems", "business", "machine", "learning", "analysis", "research", "technician",
        // organizations and places
        "university", "college", "school", "institute", "academy", "inc", "llc", "ltd",
        "corp", "company", "street", "avenue", "road", "city", "remote",
        // dates
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "present", "current",
        // degrees
        "bachelor", "master", "science", "arts", "technology", "degree", "diploma",
    ]
    .into_iter()
    .collect()
});

static ORG_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "llc", "ltd", "llp", "plc", "corp", "corporation", "company", "co", "gmbh",
        "group", "technologies", "labs", "solutions", "systems", "consulting",
    ]
    .into_iter()
    .collect()
});

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityLabel {
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "ORG")]
    Org,
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => f.write_str("PERSON"),
            EntityLabel::Org => f.write_str("ORG"),
        }
    }
}

/// A labeled span; `start..end` are byte offsets into the tagged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Text plus the entities recognized in it. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TaggedDocument {
    text: String,
    entities: Vec<Entity>,
}

impl TaggedDocument {
    pub fn new(text: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self { text: text.into(), entities }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// First entity carrying `label`, in document order.
    pub fn first(&self, label: EntityLabel) -> Option<&Entity> {
        self.entities.iter().find(|e| e.label == label)
    }

    /// Whether the whole trimmed `line` was tagged with `label`.
    pub fn is_labeled(&self, line: &str, label: EntityLabel) -> bool {
        let line = line.trim();
        self.entities.iter().any(|e| e.label == label && e.text == line)
    }
}

/// Produces a [`TaggedDocument`] from plain text.
pub trait EntityTagger {
    fn tag(&self, text: &str) -> TaggedDocument;
}

/// Line-oriented rule tagger.
///
/// A line ending in a company suffix is an `ORG`, whatever else it looks
/// like. Otherwise a line made only of 2-4 name-shaped tokens, none of them
/// common resume vocabulary, is a `PERSON`. With a lexicon loaded, a `PERSON`
/// must also start with a known given name.
#[derive(Debug, Default)]
pub struct RuleTagger {
    lexicon: Option<HashSet<String>>,
}

impl RuleTagger {
    pub fn new() -> Self {
        Self { lexicon: None }
    }

    /// Loads a given-name lexicon: one name per line, `#` starts a comment.
    pub fn with_lexicon(path: &Path) -> Result<Self, TaggerError> {
        let content = fs::read_to_string(path).map_err(|source| TaggerError::LexiconUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if lexicon.is_empty() {
            return Err(TaggerError::EmptyLexicon(path.to_path_buf()));
        }

        tracing::info!("Loaded {} given names from {}", lexicon.len(), path.display());
        Ok(Self { lexicon: Some(lexicon) })
    }

    fn is_person(&self, line: &str) -> bool {
        if line.chars().count() > MAX_NAME_LINE_CHARS {
            return false;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !(2..=MAX_NAME_TOKENS).contains(&tokens.len()) {
            return false;
        }
        if !tokens.iter().all(|t| NAME_TOKEN_RE.is_match(t)) {
            return false;
        }
        // "J. K." alone is not a name
        if tokens.iter().all(|t| INITIAL_RE.is_match(t)) {
            return false;
        }
        if tokens.iter().any(|t| NON_NAME_WORDS.contains(t.to_lowercase().as_str())) {
            return false;
        }

        match &self.lexicon {
            Some(names) => names.contains(&tokens[0].to_lowercase()),
            None => true,
        }
    }

    fn is_org(line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 || tokens.len() > MAX_ORG_TOKENS {
            return false;
        }
        if !line.starts_with(|c: char| c.is_uppercase()) {
            return false;
        }
        tokens
            .last()
            .map(|t| t.trim_matches(|c: char| c == '.' || c == ',').to_lowercase())
            .is_some_and(|suffix| ORG_SUFFIXES.contains(suffix.as_str()))
    }
}

impl EntityTagger for RuleTagger {
    fn tag(&self, text: &str) -> TaggedDocument {
        let mut entities = Vec::new();
        let mut offset = 0;

        for raw_line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += raw_line.len();

            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = line_start + (raw_line.len() - raw_line.trim_start().len());
            let end = start + trimmed.len();

            let label = if Self::is_org(trimmed) {
                EntityLabel::Org
            } else if self.is_person(trimmed) {
                EntityLabel::Person
            } else {
                continue;
            };

            tracing::trace!("Tagged {} '{}' at {}..{}", label, trimmed, start, end);
            entities.push(Entity { text: trimmed.to_string(), label, start, end });
        }

        tracing::debug!("Tagger found {} entities", entities.len());
        TaggedDocument::new(text, entities)
    }
}
