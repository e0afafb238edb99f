use crate::extraction::patterns::{contains_any, SKILLS_KEYWORDS, SKILLS_STOP_WORDS};

/// Lines read after the skills header.
const SKILLS_WINDOW: usize = 4;

/// Collects comma-separated tokens from the lines under the first skills header.
///
/// Only the first header is honoured. Lines naming another section are
/// skipped but do not end the window.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(header) = lines
        .iter()
        .position(|line| contains_any(line, SKILLS_KEYWORDS))
    else {
        return Vec::new();
    };

    lines
        .iter()
        .skip(header + 1)
        .take(SKILLS_WINDOW)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !contains_any(line, SKILLS_STOP_WORDS))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
