//! Identity field extraction — pulls email, phone, name, experience, and
//! education out of raw résumé text with first-occurrence pattern matching.
//!
//! Every field is best-effort and independent: absence is a sentinel value,
//! never an error. The matching rules are deliberately loose (name = first
//! non-empty line, phone = exactly ten digits with no separators) and are
//! kept as-is; stricter validation is a future enhancement.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sentinel for contact fields with no match.
pub const NOT_FOUND: &str = "not found";
/// Sentinel for profile fields with no match.
pub const NOT_MENTIONED: &str = "not mentioned";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").unwrap());

// Exactly ten consecutive digits with non-digit boundaries. Numbers with
// separators or country codes do not match.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").unwrap());

static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+\s*years?\s+of\s+experience\b").unwrap());

// Earliest occurrence wins; more specific variants come before their prefixes
// so a tie at the same position resolves to the longer keyword.
const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor's",
    "bachelors",
    "bachelor",
    "master's",
    "masters",
    "master",
    "phd",
    "ph.d",
    "b.sc",
    "m.sc",
    "bsc",
    "msc",
    "b.tech",
    "m.tech",
    "btech",
    "mtech",
    "mba",
    "bca",
    "mca",
];

/// Identity fields of one candidate, each populated independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub education: String,
}

pub fn extract_identity(text: &str) -> IdentityFields {
    IdentityFields {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        experience: extract_experience(text),
        education: extract_education(text),
    }
}

/// First substring shaped like `local-part@domain`.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First run of exactly ten consecutive digits.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First non-empty line, used as a heuristic proxy for the candidate name.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First match of `<integer> year(s) of experience`, case-insensitive.
pub fn extract_experience(text: &str) -> String {
    EXPERIENCE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_MENTIONED.to_string())
}

/// Earliest case-insensitive occurrence of a degree keyword.
pub fn extract_education(text: &str) -> String {
    let lowered = text.to_lowercase();
    DEGREE_KEYWORDS
        .iter()
        .filter_map(|kw| lowered.find(kw).map(|pos| (pos, *kw)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, kw)| kw.to_string())
        .unwrap_or_else(|| NOT_MENTIONED.to_string())
}
