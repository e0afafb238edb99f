/// How many leading non-empty lines are considered.
const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_TOKENS: usize = 4;

/// Returns the first short, digit-free line near the top of the text.
///
/// Only the first five non-empty lines are examined. A line qualifies with at
/// most four whitespace-separated tokens and no ASCII digits.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            line.split_whitespace().count() <= MAX_NAME_TOKENS
                && !line.chars().any(|c| c.is_ascii_digit())
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_short_line_is_the_name() {
        let text = "John A. Smith\njohn@example.com\nSoftware Engineer";
        assert_eq!(extract_name(text).as_deref(), Some("John A. Smith"));
    }

    #[test]
    fn test_line_with_digit_is_skipped() {
        let text = "Resume 2024\nJane Doe\n";
        assert_eq!(extract_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_long_line_is_skipped() {
        let text = "Curriculum vitae of a very keen engineer\nJane Doe";
        assert_eq!(extract_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(extract_name("   Jane Doe   \n").as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_only_first_five_lines_are_considered() {
        let text = "1\n2\n3\n4\n5\nJane Doe";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_blank_lines_do_not_use_up_window() {
        let text = "2024\n\n\n\n\nJane Doe";
        assert_eq!(extract_name(text).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_sixth_non_empty_line_is_not_examined() {
        let text = "1\n\n2\n3\n\n4\n5\n\nJane Doe";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_non_digit_numerals_do_not_disqualify() {
        assert_eq!(extract_name("Henry Ⅻ ½\n").as_deref(), Some("Henry Ⅻ ½"));
    }

    #[test]
    fn test_empty_text_has_no_name() {
        assert_eq!(extract_name(""), None);
        assert_eq!(extract_name("   \n  \n"), None);
    }
}
