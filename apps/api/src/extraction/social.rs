use regex::Regex;

use crate::extraction::patterns::{CODEFORCES_RE, GITHUB_RE, LEETCODE_RE, LINKEDIN_RE};
use crate::models::resume::SocialHandles;

/// Runs one independent scan per platform over the unflattened text.
pub fn extract_social_handles(text: &str) -> SocialHandles {
    SocialHandles {
        linkedin: first_match(&LINKEDIN_RE, text),
        github: first_match(&GITHUB_RE, text),
        leetcode: first_match(&LEETCODE_RE, text),
        codeforces: first_match(&CODEFORCES_RE, text),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}
