//! Free-form list sections (projects, experience).
//!
//! Both detectors share one shape: find the first header line, read a bounded
//! window after it, and regroup the window's lines into items. PDF text wraps
//! long bullets over several lines, so grouping is driven by a two-state
//! machine:
//!
//! | state          | bullet line            | continuation line | blank / stop-word line |
//! |----------------|------------------------|-------------------|------------------------|
//! | `Idle`         | start item             | start item        | stay idle              |
//! | `Accumulating` | flush, start new item  | append            | flush, go idle         |
//!
//! Only the first matching header is honoured; a later, better-formatted
//! section with the same keyword is ignored.

use crate::extraction::patterns::{
    contains_any, BULLET_MARKERS, EXPERIENCE_KEYWORDS, EXPERIENCE_STOP_WORDS, PROJECT_KEYWORDS,
    PROJECT_STOP_WORDS,
};

/// Describes one list section: how to find its header and how far to read.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub keywords: &'static [&'static str],
    /// Lines naming another section; they close the current item.
    pub stop_words: &'static [&'static str],
    /// Lines read after the header.
    pub window: usize,
}

pub const PROJECTS: SectionSpec = SectionSpec {
    keywords: PROJECT_KEYWORDS,
    stop_words: PROJECT_STOP_WORDS,
    window: 10,
};

pub const EXPERIENCE: SectionSpec = SectionSpec {
    keywords: EXPERIENCE_KEYWORDS,
    stop_words: EXPERIENCE_STOP_WORDS,
    window: 8,
};

pub fn extract_projects(text: &str) -> Vec<String> {
    extract_section(text, &PROJECTS)
}

pub fn extract_experience(text: &str) -> Vec<String> {
    extract_section(text, &EXPERIENCE)
}

/// Groups the lines under the first header matching `spec` into items.
pub fn extract_section(text: &str, spec: &SectionSpec) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(header) = lines
        .iter()
        .position(|line| contains_any(line, spec.keywords))
    else {
        return Vec::new();
    };

    let mut grouper = ItemGrouper::default();
    for line in lines.iter().skip(header + 1).take(spec.window) {
        grouper.feed(classify(line.trim(), spec.stop_words));
    }
    grouper.finish()
}

#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    Bullet(&'a str),
    Continuation(&'a str),
    Break,
}

fn classify<'a>(line: &'a str, stop_words: &[&str]) -> LineKind<'a> {
    if line.is_empty() || contains_any(line, stop_words) {
        LineKind::Break
    } else if line.starts_with(BULLET_MARKERS) {
        LineKind::Bullet(line)
    } else {
        LineKind::Continuation(line)
    }
}

#[derive(Debug, Default)]
enum GroupState {
    #[default]
    Idle,
    Accumulating(String),
}

#[derive(Debug, Default)]
struct ItemGrouper {
    state: GroupState,
    items: Vec<String>,
}

impl ItemGrouper {
    fn feed(&mut self, kind: LineKind<'_>) {
        self.state = match (std::mem::take(&mut self.state), kind) {
            (GroupState::Idle, LineKind::Break) => GroupState::Idle,
            (GroupState::Idle, LineKind::Bullet(line) | LineKind::Continuation(line)) => {
                GroupState::Accumulating(line.to_string())
            }
            (GroupState::Accumulating(item), LineKind::Bullet(line)) => {
                self.flush(item);
                GroupState::Accumulating(line.to_string())
            }
            (GroupState::Accumulating(mut item), LineKind::Continuation(line)) => {
                item.push(' ');
                item.push_str(line);
                GroupState::Accumulating(item)
            }
            (GroupState::Accumulating(item), LineKind::Break) => {
                self.flush(item);
                GroupState::Idle
            }
        };
    }

    fn flush(&mut self, item: String) {
        let item = item.trim();
        if !item.is_empty() {
            self.items.push(item.to_string());
        }
    }

    fn finish(mut self) -> Vec<String> {
        if let GroupState::Accumulating(item) = std::mem::take(&mut self.state) {
            self.flush(item);
        }
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_bullet_is_reassembled() {
        let text = "Projects\n• Built a compiler\n  for a custom language\n• Wrote a parser";
        assert_eq!(
            extract_projects(text),
            vec![
                "• Built a compiler for a custom language",
                "• Wrote a parser"
            ]
        );
    }

    #[test]
    fn test_dash_and_star_are_bullets() {
        let text = "Academic Projects\n- Chess engine\n* Ray tracer";
        assert_eq!(extract_projects(text), vec!["- Chess engine", "* Ray tracer"]);
    }

    #[test]
    fn test_blank_line_closes_item() {
        let text = "Projects\nTodo app\n\nWeather bot\nwith alerts";
        assert_eq!(
            extract_projects(text),
            vec!["Todo app", "Weather bot with alerts"]
        );
    }

    #[test]
    fn test_stop_word_line_closes_item_but_window_continues() {
        let text = "Projects\n• Search engine\nEducation\n• Tiny OS";
        assert_eq!(
            extract_projects(text),
            vec!["• Search engine", "• Tiny OS"]
        );
    }

    #[test]
    fn test_projects_window_is_ten_lines() {
        let mut text = String::from("Projects");
        for i in 0..12 {
            text.push_str(&format!("\n• item {i}"));
        }
        let items = extract_projects(&text);
        assert_eq!(items.len(), 10);
        assert_eq!(items.last().map(String::as_str), Some("• item 9"));
    }

    #[test]
    fn test_experience_window_is_eight_lines() {
        let mut text = String::from("Work Experience");
        for i in 0..10 {
            text.push_str(&format!("\n- role {i}"));
        }
        assert_eq!(extract_experience(&text).len(), 8);
    }

    #[test]
    fn test_experience_groups_role_lines() {
        let text = "Experience\nAcme Corp, Backend Intern\n• Cut p99 latency 40%\nby caching\n\nGlobex\n• Shipped billing";
        assert_eq!(
            extract_experience(text),
            vec![
                "Acme Corp, Backend Intern",
                "• Cut p99 latency 40% by caching",
                "Globex",
                "• Shipped billing"
            ]
        );
    }

    #[test]
    fn test_experience_skips_project_lines() {
        let text = "Internship\n• Data pipeline\nSide project notes\n• Dashboards";
        assert_eq!(
            extract_experience(text),
            vec!["• Data pipeline", "• Dashboards"]
        );
    }

    #[test]
    fn test_no_header_no_items() {
        assert!(extract_projects("Jane Doe\n• Something").is_empty());
        assert!(extract_experience("Jane Doe\n• Something").is_empty());
    }

    #[test]
    fn test_header_at_end_of_text() {
        assert!(extract_projects("Jane Doe\nProjects").is_empty());
    }

    /// Known limitation: a second "Projects" header is never looked at, even
    /// when the first one has nothing useful under it.
    #[test]
    fn test_later_section_with_same_header_is_ignored() {
        let mut text = String::from("Projects\n\n");
        for _ in 0..10 {
            text.push('\n');
        }
        text.push_str("Projects\n• Hidden project");
        assert!(extract_projects(&text).is_empty());
    }

    #[test]
    fn test_classify_line_kinds() {
        assert_eq!(classify("", PROJECT_STOP_WORDS), LineKind::Break);
        assert_eq!(classify("Skills", PROJECT_STOP_WORDS), LineKind::Break);
        assert_eq!(classify("• a", PROJECT_STOP_WORDS), LineKind::Bullet("• a"));
        assert_eq!(classify("a", PROJECT_STOP_WORDS), LineKind::Continuation("a"));
    }

    #[test]
    fn test_grouper_idle_break_emits_nothing() {
        let mut grouper = ItemGrouper::default();
        grouper.feed(LineKind::Break);
        grouper.feed(LineKind::Break);
        assert!(grouper.finish().is_empty());
    }
}
