// src/schema/mod.rs
//! Output shape consumed by the calling process.

use serde::Serialize;

use crate::extractors::duration::is_ongoing;
use crate::extractors::{RawEducation, RawExperience, RawExtraction};
use crate::utils::text::truncate_chars;
use crate::utils::AppError;

pub const FIELD_NOT_SPECIFIED: &str = "Not specified";

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub current: bool,
}

/// The `data` object of a successful run. Absent optional fields are
/// omitted from the JSON, list fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeData {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
    #[serde(rename = "totalExperience", skip_serializing_if = "Option::is_none")]
    pub total_experience: Option<f64>,
    #[serde(rename = "resumePages", skip_serializing_if = "Option::is_none")]
    pub resume_pages: Option<usize>,
    pub raw_text: String,
}

/// The single JSON object written to stdout.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResumeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawExtraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
}

impl ParseResponse {
    pub fn success(data: ResumeData, raw_data: Option<RawExtraction>) -> Self {
        Self { success: true, data: Some(data), raw_data, error: None, error_type: None }
    }

    pub fn failure(error: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            raw_data: None,
            error: Some(error.to_string()),
            error_type: Some(error.kind()),
        }
    }

    /// Serializes the response. Falls back to a hand-built failure object so
    /// stdout always carries valid JSON.
    pub fn to_json(&self, pretty: bool) -> String {
        let rendered = if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) };
        rendered.unwrap_or_else(|e| {
            tracing::error!("Failed to serialize response: {}", e);
            serde_json::json!({
                "success": false,
                "error": format!("Failed to serialize result: {}", e),
                "error_type": "UnknownFailure",
            })
            .to_string()
        })
    }
}

/// Renames extractor output into the caller's field names and fills in
/// defaults. `pages` is only known for paged formats (PDF). `current_year`
/// decides whether a graduation year is still ahead (an expected degree).
pub fn transform(
    raw: RawExtraction,
    text: &str,
    pages: Option<usize>,
    raw_text_limit: usize,
    current_year: i32,
) -> ResumeData {
    ResumeData {
        full_name: raw.name,
        email: raw.email,
        phone: raw.mobile_number,
        location: raw.location,
        about: raw.summary,
        skills: raw.skills,
        experiences: raw.experience.into_iter().map(to_experience).collect(),
        education: raw
            .education
            .into_iter()
            .map(|e| to_education(e, current_year))
            .collect(),
        certifications: raw.certifications,
        total_experience: raw.total_experience,
        resume_pages: pages,
        raw_text: truncate_chars(text, raw_text_limit).to_string(),
    }
}

fn to_experience(raw: RawExperience) -> Experience {
    let current = is_ongoing(&raw.duration);
    Experience {
        company: raw.company,
        title: raw.title,
        description: raw.description,
        duration: Some(raw.duration).filter(|d| !d.is_empty()),
        current,
    }
}

fn to_education(raw: RawEducation, current_year: i32) -> Education {
    let current = raw
        .year
        .as_deref()
        .and_then(|y| y.parse::<i32>().ok())
        .is_some_and(|y| y > current_year);

    let field = if raw.field.trim().is_empty() { FIELD_NOT_SPECIFIED.to_string() } else { raw.field };

    Education {
        institution: raw.institution,
        degree: raw.degree,
        field,
        year: raw.year,
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> RawExtraction {
        RawExtraction {
            name: Some("Jane Doe".to_string()),
            email: None,
            mobile_number: Some("4155550199".to_string()),
            location: None,
            summary: Some("Builds things.".to_string()),
            skills: vec!["Python".to_string()],
            experience: vec![RawExperience {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                duration: "Jan 2020 - PRESENT".to_string(),
                description: String::new(),
            }],
            education: vec![
                RawEducation {
                    degree: "BSc".to_string(),
                    institution: "State".to_string(),
                    field: String::new(),
                    year: Some("2031".to_string()),
                },
                RawEducation {
                    degree: "MSc".to_string(),
                    institution: "Tech".to_string(),
                    field: "Physics".to_string(),
                    year: None,
                },
            ],
            certifications: Vec::new(),
            total_experience: None,
        }
    }

    #[test]
    fn test_renames_and_defaults() {
        let data = transform(raw(), "Jane Doe resume text", Some(2), 8, 2024);

        assert_eq!(data.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(data.phone.as_deref(), Some("4155550199"));
        assert_eq!(data.about.as_deref(), Some("Builds things."));
        assert!(data.experiences[0].current);
        assert_eq!(data.education[0].field, FIELD_NOT_SPECIFIED);
        assert!(data.education[0].current);
        assert_eq!(data.education[1].field, "Physics");
        assert!(!data.education[1].current);
        assert_eq!(data.raw_text, "Jane Doe");
        assert_eq!(data.resume_pages, Some(2));
        assert_eq!(serde_json::to_value(&data).unwrap()["resumePages"], json!(2));
    }

    #[test]
    fn test_current_and_now_end_dates_are_current() {
        let mut extraction = raw();
        extraction.experience = ["Jan 2020 - Current", "2021 to now", "2016 - 2019"]
            .iter()
            .map(|d| RawExperience {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                duration: d.to_string(),
                description: String::new(),
            })
            .collect();

        let data = transform(extraction, "text", None, 500, 2024);
        let current: Vec<bool> = data.experiences.iter().map(|e| e.current).collect();
        assert_eq!(current, vec![true, true, false]);
    }

    #[test]
    fn test_json_shape_omits_absent_fields() {
        let value = serde_json::to_value(transform(raw(), "text", None, 500, 2024)).unwrap();

        assert_eq!(value["fullName"], json!("Jane Doe"));
        assert!(value.get("email").is_none());
        assert!(value.get("location").is_none());
        assert!(value.get("certifications").is_none());
        assert!(value.get("totalExperience").is_none());
        assert!(value.get("resumePages").is_none());
        assert_eq!(value["skills"], json!(["Python"]));
        assert_eq!(
            value["experiences"][0],
            json!({
                "company": "Acme",
                "title": "Engineer",
                "description": "",
                "duration": "Jan 2020 - PRESENT",
                "current": true
            })
        );
        assert!(value["education"][1].get("year").is_none());
        assert_eq!(value["raw_text"], json!("text"));
    }

    #[test]
    fn test_failure_response_shape() {
        let err = AppError::FileNotFound("/tmp/missing.pdf".to_string());
        let value: serde_json::Value = serde_json::from_str(&ParseResponse::failure(&err).to_json(false)).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("File not found: /tmp/missing.pdf"));
        assert_eq!(value["error_type"], json!("FileNotFound"));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_success_response_carries_raw_data_on_request() {
        let data = transform(raw(), "text", None, 500, 2024);
        let value: serde_json::Value =
            serde_json::from_str(&ParseResponse::success(data.clone(), Some(raw())).to_json(true)).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["raw_data"]["mobile_number"], json!("4155550199"));

        let value: serde_json::Value = serde_json::from_str(&ParseResponse::success(data, None).to_json(false)).unwrap();
        assert!(value.get("raw_data").is_none());
        assert!(value.get("error").is_none());
    }
}
