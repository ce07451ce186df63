//! Email and phone extraction over the full document text.

use std::sync::OnceLock;

use regex::Regex;

/// Domains preferred when a resume lists several addresses (work aliases tend
/// to go stale; personal inboxes do not).
const CONSUMER_PROVIDERS: &[&str] = &["gmail.com", "outlook.com", "yahoo.com", "hotmail.com"];

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
    })
}

/// Phone patterns ordered most-specific first. The first pattern with any
/// match decides; later patterns are not consulted.
fn phone_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // +1 (555) 123-4567
            r"\+?1[-.\s]?\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}",
            // +1 555 123 4567 / 15551234567
            r"\+?1[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
            // (555) 123-4567
            r"\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}",
            // 555-123-4567 / 555.123.4567 / 5551234567
            r"\d{3}[-.]?\d{3}[-.]?\d{4}",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("phone pattern"))
        .collect()
    })
}

/// All matches in document order; a consumer-provider domain wins over
/// position. `None` when the text has no address at all.
pub fn extract_email(text: &str) -> Option<String> {
    let matches: Vec<&str> = email_re().find_iter(text).map(|m| m.as_str()).collect();
    matches
        .iter()
        .find(|email| {
            email
                .split('@')
                .nth(1)
                .is_some_and(|domain| {
                    CONSUMER_PROVIDERS
                        .iter()
                        .any(|p| domain.eq_ignore_ascii_case(p))
                })
        })
        .or_else(|| matches.first())
        .map(|s| s.to_string())
}

/// First email address in document order, ignoring provider preference.
/// Used by the name heuristic.
pub(crate) fn first_email(text: &str) -> Option<String> {
    email_re().find(text).map(|m| m.as_str().to_string())
}

/// True when the string contains something email-shaped. Used to sanity-check
/// externally supplied values.
pub(crate) fn is_email(text: &str) -> bool {
    email_re().is_match(text)
}

pub fn extract_phone(text: &str) -> Option<String> {
    phone_patterns()
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| format_phone(m.as_str()))
}

/// 10 digits format as US-domestic, 11 digits with a leading 1 as US-international.
/// Anything else is returned as matched.
fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_simple_match() {
        assert_eq!(
            extract_email("reach me at jane@example.com please"),
            Some("jane@example.com".to_string())
        );
    }

    #[test]
    fn test_email_consumer_domain_preferred_over_order() {
        assert_eq!(
            extract_email("Contact: jane.doe@gmail.com or j@x.co"),
            Some("jane.doe@gmail.com".to_string())
        );
        assert_eq!(
            extract_email("Contact: j@x.co or jane.doe@gmail.com"),
            Some("jane.doe@gmail.com".to_string())
        );
    }

    #[test]
    fn test_email_first_match_when_no_consumer_domain() {
        assert_eq!(
            extract_email("a@corp.io then b@firm.net"),
            Some("a@corp.io".to_string())
        );
    }

    #[test]
    fn test_email_none_when_absent() {
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_email_provider_match_is_case_insensitive() {
        assert_eq!(
            extract_email("x@corp.io or jane@GMAIL.com"),
            Some("jane@GMAIL.com".to_string())
        );
    }

    #[test]
    fn test_first_email_ignores_provider_preference() {
        assert_eq!(
            first_email("j@x.co or jane.doe@gmail.com"),
            Some("j@x.co".to_string())
        );
    }

    #[test]
    fn test_phone_bare_ten_digits() {
        assert_eq!(
            extract_phone("call 5551234567 today"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_eleven_digits_with_country_code() {
        assert_eq!(
            extract_phone("cell: 15551234567"),
            Some("+1 (555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        assert_eq!(
            extract_phone("Phone: (555) 123-4567"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_plus_one_prefix() {
        assert_eq!(
            extract_phone("+1 (555) 123-4567"),
            Some("+1 (555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_dotted_separators() {
        assert_eq!(
            extract_phone("555.123.4567"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_none_when_absent() {
        assert_eq!(extract_phone("no digits that look like a number"), None);
        assert_eq!(extract_phone("year 2023 only"), None);
    }

    #[test]
    fn test_format_phone_passes_through_odd_lengths() {
        assert_eq!(format_phone("123-4567"), "123-4567");
    }
}
