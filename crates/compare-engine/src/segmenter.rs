//! Splits document text into sections on blank-line boundaries

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Section, Side};

lazy_static! {
    /// Two or more consecutive line breaks separate sections
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Split `text` into trimmed, non-empty sections in order of appearance
pub fn segment(text: &str, side: Side) -> Vec<Section> {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(index, block)| Section {
            index,
            side,
            text: block.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_blank_lines() {
        let sections = segment("Rent is $1000.\n\nDeposit is $500.", Side::A);
        assert_eq!(texts(&sections), vec!["Rent is $1000.", "Deposit is $500."]);
        assert_eq!(sections[1].index, 1);
        assert_eq!(sections[1].side, Side::A);
    }

    #[test]
    fn test_single_line_breaks_stay_inside_section() {
        let sections = segment("Line one\nLine two\n\nNext", Side::B);
        assert_eq!(texts(&sections), vec!["Line one\nLine two", "Next"]);
    }

    #[test]
    fn test_runs_of_blank_lines_are_one_separator() {
        let sections = segment("First\n\n\n\n\nSecond\n\n\nThird", Side::A);
        assert_eq!(texts(&sections), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_whitespace_blocks_are_dropped() {
        let sections = segment("  \n\n  Clause  \n\n \t \n\nEnd ", Side::A);
        assert_eq!(texts(&sections), vec!["Clause", "End"]);
        assert_eq!(sections[1].index, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("", Side::A).is_empty());
        assert!(segment("\n\n\n", Side::B).is_empty());
    }
}
