use regex::Regex;

use crate::extraction::patterns::{contains_any, CGPA_RE, EDUCATION_KEYWORDS, GPA_RE};
use crate::models::resume::EducationEntry;

/// The keyword line plus this many following lines are searched for a grade.
const GRADE_LOOKAHEAD: usize = 2;

/// Emits one entry per line that mentions an education keyword.
///
/// Each keyword line opens its own grade window even when it already sat
/// inside an earlier entry's window, so neighbouring entries may report the
/// same figure.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let lower = text.to_lowercase();
    let lines: Vec<&str> = lower.split('\n').collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| contains_any(line, EDUCATION_KEYWORDS))
        .map(|(i, line)| {
            let end = (i + 1 + GRADE_LOOKAHEAD).min(lines.len());
            let window = lines[i..end].join(" ");
            EducationEntry {
                institution: line.trim().to_string(),
                cgpa: find_grade(&window),
            }
        })
        .collect()
}

/// A `cgpa` figure wins over a plain `gpa` one; only the numerator is kept.
fn find_grade(window: &str) -> Option<String> {
    capture_numerator(&CGPA_RE, window).or_else(|| capture_numerator(&GPA_RE, window))
}

fn capture_numerator(re: &Regex, window: &str) -> Option<String> {
    re.captures(window)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
