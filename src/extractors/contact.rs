// src/extractors/contact.rs
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Text Matching (Lazy Static) ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Failed to compile EMAIL_RE")
});

// North-American numbering: optional +1, then 3-3-4 digits with optional
// separators and parentheses around the area code.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})")
        .expect("Failed to compile PHONE_RE")
});

// "City, Region 12345": Capitalized words, comma, Capitalized words, 5-6 digit code.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*),[ \t]*([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*)[ \t]+\d{5,6}\b")
        .expect("Failed to compile LOCATION_RE")
});

/// First email address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone number in the text, digit groups concatenated without the
/// country code or separators.
pub fn extract_phone(text: &str) -> Option<String> {
    let caps = PHONE_RE.captures(text)?;
    Some(format!("{}{}{}", &caps[1], &caps[2], &caps[3]))
}

/// `"City, Region"` from the first `City, Region ZIP` in the text.
pub fn extract_location(text: &str) -> Option<String> {
    let caps = LOCATION_RE.captures(text)?;
    Some(format!("{}, {}", &caps[1], &caps[2]))
}
