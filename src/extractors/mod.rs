// src/extractors/mod.rs
pub mod contact;
pub mod duration;
pub mod education;
pub mod experience;
pub mod name;
pub mod sections;
pub mod skills;
pub mod summary;

use chrono::NaiveDate;
use serde::Serialize;

use crate::nlp::TaggedDocument;

// Re-export key extraction functions for convenience
pub use contact::{extract_email, extract_location, extract_phone};
pub use duration::total_experience_years;
pub use education::extract_education;
pub use experience::extract_experience;
pub use name::extract_name;
pub use sections::extract_certifications;
pub use skills::extract_skills;
pub use summary::extract_summary;

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawExperience {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawEducation {
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub year: Option<String>,
}

/// Everything the field extractors found, under their own names. The schema
/// module renames this into the caller's shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawExtraction {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<RawExperience>,
    pub education: Vec<RawEducation>,
    pub certifications: Vec<String>,
    pub total_experience: Option<f64>,
}

/// Runs every field extractor. Contact and section extractors read the full
/// text; the name comes from the tagged prefix.
pub fn extract_fields(text: &str, tagged: &TaggedDocument, today: NaiveDate) -> RawExtraction {
    let experience = extract_experience(text);
    let total_experience = total_experience_years(&experience, today);

    RawExtraction {
        name: extract_name(tagged),
        email: extract_email(text),
        mobile_number: extract_phone(text),
        location: extract_location(text),
        summary: extract_summary(text),
        skills: extract_skills(text),
        experience,
        education: extract_education(text),
        certifications: extract_certifications(text),
        total_experience,
    }
}
