//! Compiled patterns and keyword tables shared by the detectors.
//!
//! Regexes compile once on first use; every pattern here is a literal, so a
//! compile failure is a programming error rather than a runtime condition.

use once_cell::sync::Lazy;
use regex::Regex;

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Plain 10 digits, dashed/dotted/spaced 3-3-4 groups, `(xxx)` area codes,
/// and an optional `+91` or generic `+N` prefix. ASCII digits only, matching
/// what the normalizer keeps.
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\+91[-.\s]?)?(?:[0-9]{10}|[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}|\([0-9]{3}\)[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}|(?:\+[0-9]{1,3}[-.\s]?)?[0-9]{10})",
    )
    .unwrap()
});

pub static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());

pub static GITHUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());

pub static LEETCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)leetcode\.com/[\w-]+").unwrap());

pub static CODEFORCES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)codeforces\.com/profile/[\w-]+").unwrap());

pub static CGPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)cgpa[:\s]*(\d+\.?\d*)[/\s]*(\d+\.?\d*)?").unwrap());

pub static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)gpa[:\s]*(\d+\.?\d*)[/\s]*(\d+\.?\d*)?").unwrap());

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "bachelor",
    "master",
    "phd",
    "degree",
];

pub const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "programming languages",
    "technologies",
];

pub const SKILLS_STOP_WORDS: &[&str] = &["experience", "education", "project"];

pub const PROJECT_KEYWORDS: &[&str] = &["projects", "project work", "academic projects"];

pub const PROJECT_STOP_WORDS: &[&str] = &["experience", "education", "skill"];

pub const EXPERIENCE_KEYWORDS: &[&str] =
    &["experience", "work experience", "employment", "internship"];

pub const EXPERIENCE_STOP_WORDS: &[&str] = &["education", "skill", "project"];

pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// True when the lower-cased `line` contains any of `keywords`.
pub fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}
