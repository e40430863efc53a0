// src/extractors/duration.rs
//! Employment date ranges: recognizing them in a line and measuring them.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::RawExperience;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

// "Jan 2020 - Present", "03/2018 to 11/2021", "2016 – 2019"
pub(crate) static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let point = format!(r"(?:{}\s+\d{{4}}|\d{{1,2}}/\d{{4}}|\d{{4}})", MONTH);
    let pattern = format!(r"(?i)\b(?P<start>{0})\s*(?:-|–|—|to)\s*(?P<end>{0}|present|current|now)\b", point);
    Regex::new(&pattern).expect("Failed to compile DATE_RANGE_RE")
});

static NUMERIC_POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{1,2})/)?(\d{4})$").expect("Failed to compile NUMERIC_POINT_RE")
});

static NAMED_POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]{3})[a-z]*\.?\s+(\d{4})$").expect("Failed to compile NAMED_POINT_RE")
});

/// First date range in `line`, as written.
pub fn find_date_range(line: &str) -> Option<&str> {
    DATE_RANGE_RE.find(line).map(|m| m.as_str())
}

/// True for a range still running: the text mentions "present", or the
/// range ends in "current" or "now".
pub fn is_ongoing(range: &str) -> bool {
    if range.to_lowercase().contains("present") {
        return true;
    }
    DATE_RANGE_RE
        .captures(range)
        .is_some_and(|caps| matches!(caps["end"].to_lowercase().as_str(), "current" | "now"))
}

/// Whole months covered by a range like `Jan 2020 - Present`, with open ends
/// resolved against `today`. Year-only endpoints count from January.
pub fn months_in_range(range: &str, today: NaiveDate) -> Option<u32> {
    let caps = DATE_RANGE_RE.captures(range)?;
    let (start_year, start_month) = parse_point(&caps["start"], today)?;
    let (end_year, end_month) = parse_point(&caps["end"], today)?;

    let start = start_year * 12 + start_month as i32;
    let end = end_year * 12 + end_month as i32;
    u32::try_from(end - start).ok()
}

/// Sum of all measurable experience durations in years, one decimal place.
/// Overlapping roles are counted twice.
pub fn total_experience_years(experiences: &[RawExperience], today: NaiveDate) -> Option<f64> {
    let months: Vec<u32> = experiences
        .iter()
        .filter_map(|e| months_in_range(&e.duration, today))
        .collect();

    if months.is_empty() {
        return None;
    }
    let total: u32 = months.iter().sum();
    Some((f64::from(total) / 12.0 * 10.0).round() / 10.0)
}

fn parse_point(point: &str, today: NaiveDate) -> Option<(i32, u32)> {
    let point = point.trim().to_lowercase();
    if matches!(point.as_str(), "present" | "current" | "now") {
        return Some((today.year(), today.month()));
    }

    if let Some(caps) = NUMERIC_POINT_RE.captures(&point) {
        let year: i32 = caps[2].parse().ok()?;
        let month: u32 = match caps.get(1) {
            Some(m) => m.as_str().parse().ok()?,
            None => 1,
        };
        return (1..=12).contains(&month).then_some((year, month));
    }

    let caps = NAMED_POINT_RE.captures(&point)?;
    let month = month_number(&caps[1])?;
    let year: i32 = caps[2].parse().ok()?;
    Some((year, month))
}

fn month_number(abbrev: &str) -> Option<u32> {
    let months = ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];
    months.iter().position(|m| *m == abbrev).map(|i| i as u32 + 1)
}
