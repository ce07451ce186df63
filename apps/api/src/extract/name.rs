//! Candidate name extraction. Three tiers, first hit wins: a name-shaped line
//! near the top of the document, the local part of the first email address,
//! then the uploaded filename.

use crate::extract::contact;
use crate::extract::UNKNOWN_NAME;

/// How many header-section lines to scan for a name-shaped line.
const NAME_SCAN_WINDOW: usize = 10;

/// Lines at or past this length are never treated as a name.
const MAX_NAME_LINE_LEN: usize = 50;

const ALL_CAPS_MIN_LEN: usize = 3;
const ALL_CAPS_MAX_LEN: usize = 30;

/// Minimum length for a name derived from an email local part or a filename.
const MIN_DERIVED_NAME_LEN: usize = 4;

pub fn extract_name(header_lines: &[String], text: &str, filename: &str) -> String {
    name_from_header(header_lines)
        .or_else(|| name_from_email(text))
        .or_else(|| name_from_filename(filename))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

fn name_from_header(header_lines: &[String]) -> Option<String> {
    header_lines
        .iter()
        .take(NAME_SCAN_WINDOW)
        .find(|line| is_proper_case_name(line) || is_all_caps_name(line))
        .cloned()
}

/// Two to four words, each capitalized (middle initials like "Q." allowed).
fn is_proper_case_name(line: &str) -> bool {
    if line.len() >= MAX_NAME_LINE_LEN {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    words
        .iter()
        .all(|w| is_capitalized_word(w) || is_initial(w))
}

fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    first.is_ascii_uppercase() && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_lowercase())
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), None, None) | (Some(c), Some('.'), None) if c.is_ascii_uppercase()
    )
}

/// An all-caps line of 3 to 30 characters with at least two words, e.g.
/// "JANE DOE". Digits disqualify the line.
fn is_all_caps_name(line: &str) -> bool {
    if !(ALL_CAPS_MIN_LEN..=ALL_CAPS_MAX_LEN).contains(&line.len()) {
        return false;
    }
    if line.split_whitespace().count() < 2 {
        return false;
    }
    let mut has_alpha = false;
    for c in line.chars() {
        match c {
            'A'..='Z' => has_alpha = true,
            ' ' | '.' | '-' | '\'' => {}
            _ => return false,
        }
    }
    has_alpha
}

/// Derives "Jane Doe" from "jane.doe@example.com".
fn name_from_email(text: &str) -> Option<String> {
    let email = contact::first_email(text)?;
    let local = email.split('@').next()?;
    let name = local
        .split(['.', '_', '-'])
        .filter(|token| !token.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    (name.len() >= MIN_DERIVED_NAME_LEN).then_some(name)
}

/// Derives "John Smith" from "john_smith.pdf".
fn name_from_filename(filename: &str) -> Option<String> {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(filename);
    let name = stem
        .split(['_', '-', ' '])
        .filter(|token| !token.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    (name.len() >= MIN_DERIVED_NAME_LEN).then_some(name)
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_proper_case_line_wins() {
        let header = lines(&["Jane Doe", "Software Engineer Resume"]);
        assert_eq!(extract_name(&header, "", "resume.pdf"), "Jane Doe");
    }

    #[test]
    fn test_middle_initial_accepted() {
        let header = lines(&["Jane Q. Doe"]);
        assert_eq!(extract_name(&header, "", "resume.pdf"), "Jane Q. Doe");
    }

    #[test]
    fn test_all_caps_line_accepted() {
        let header = lines(&["JANE DOE", "Engineer"]);
        assert_eq!(extract_name(&header, "", "resume.pdf"), "JANE DOE");
    }

    #[test]
    fn test_all_caps_single_word_rejected() {
        assert!(!is_all_caps_name("RESUME"));
    }

    #[test]
    fn test_all_caps_with_digits_rejected() {
        assert!(!is_all_caps_name("JANE DOE 2023"));
    }

    #[test]
    fn test_lowercase_line_rejected() {
        assert!(!is_proper_case_name("jane doe"));
    }

    #[test]
    fn test_five_word_line_rejected() {
        assert!(!is_proper_case_name("One Two Three Four Five"));
    }

    #[test]
    fn test_scan_window_limits_header_search() {
        let mut header: Vec<String> = (0..NAME_SCAN_WINDOW).map(|i| format!("x{i}")).collect();
        header.push("Jane Doe".to_string());
        assert_eq!(extract_name(&header, "", "f.bin"), UNKNOWN_NAME);
    }

    #[test]
    fn test_email_fallback_title_cases_local_part() {
        let text = "reach me at jane.doe@gmail.com";
        assert_eq!(extract_name(&[], text, "resume.pdf"), "Jane Doe");
    }

    #[test]
    fn test_email_fallback_rejects_short_local_part() {
        // "J" is too short, so the chain falls through to the filename.
        let text = "contact: j@x.co";
        assert_eq!(extract_name(&[], text, "john_smith.pdf"), "John Smith");
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(extract_name(&[], "", "john_smith.pdf"), "John Smith");
        assert_eq!(extract_name(&[], "", "mary-jones.docx"), "Mary Jones");
    }

    #[test]
    fn test_unknown_when_all_tiers_fail() {
        assert_eq!(extract_name(&[], "", "cv.txt"), UNKNOWN_NAME);
    }

    #[test]
    fn test_header_beats_email() {
        let header = lines(&["Jane Doe"]);
        let text = "Jane Doe\nother.person@gmail.com";
        assert_eq!(extract_name(&header, text, "x.pdf"), "Jane Doe");
    }
}
