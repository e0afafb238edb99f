use serde::{Deserialize, Serialize};

/// Structured record assembled from one résumé's text.
///
/// Optional fields serialize as `null` when no detector matched; an empty
/// string never stands in for "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub social_handles: SocialHandles,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub experience: Vec<String>,
    /// First 500 characters of the source text, with `...` appended when cut.
    pub raw_text_preview: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Profile URL fragments, e.g. `github.com/jdoe`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialHandles {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub leetcode: Option<String>,
    pub codeforces: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// The whole matching line, lower-cased and trimmed.
    pub institution: String,
    /// Raw numerator of a CGPA/GPA figure, e.g. `"3.8"` from `3.8/4.0`.
    pub cgpa: Option<String>,
}
