//! Experience and education extraction. Both walk their section's lines with
//! the same accumulator: a line that looks like the start of an entry opens a
//! new block, and longer non-entry lines are folded into the open block until
//! the next entry starts.

use crate::extract::sections::{sticky_region, Section, SectionMap};

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_EDUCATION_ENTRIES: usize = 3;

/// Continuation lines at or below this length (bare dates, bullets glyphs,
/// location fragments) are not worth folding into an entry.
const MIN_DETAIL_LINE_LEN: usize = 10;

const COMPANY_SUFFIXES: &[&str] = &["inc", "corp", "llc", "ltd", "co.", "company", "corporation"];

const ROLE_TITLES: &[&str] = &[
    "manager",
    "director",
    "engineer",
    "developer",
    "analyst",
    "specialist",
    "coordinator",
    "assistant",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "diploma",
    "certificate",
];

const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "school", "institute"];

/// Cues for the full-text fallback when no experience heading was found.
/// Broader than the segmenter's heading set, matching how resumes without a
/// conventional heading still announce the block.
const EXPERIENCE_CUES: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "career",
    "professional",
    "job",
    "position",
    "role",
    "responsibilities",
    "achievements",
];

const EXPERIENCE_TERMINATORS: &[&str] = &["education", "skills", "certification", "projects"];

const EDUCATION_CUES: &[&str] = &[
    "education",
    "academic",
    "degree",
    "university",
    "college",
    "school",
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "diploma",
    "certificate",
];

const EDUCATION_TERMINATORS: &[&str] = &["experience", "skills", "projects"];

pub fn extract_experience(sections: &SectionMap, all_lines: &[String]) -> Vec<String> {
    let section = sections.lines(Section::Experience);
    if section.is_empty() {
        let region = sticky_region(all_lines, EXPERIENCE_CUES, EXPERIENCE_TERMINATORS);
        return accumulate(&region, looks_like_job_entry, MAX_EXPERIENCE_ENTRIES);
    }
    accumulate(section, looks_like_job_entry, MAX_EXPERIENCE_ENTRIES)
}

pub fn extract_education(sections: &SectionMap, all_lines: &[String]) -> Vec<String> {
    let section = sections.lines(Section::Education);
    if section.is_empty() {
        let region = sticky_region(all_lines, EDUCATION_CUES, EDUCATION_TERMINATORS);
        return accumulate(&region, looks_like_education_entry, MAX_EDUCATION_ENTRIES);
    }
    accumulate(section, looks_like_education_entry, MAX_EDUCATION_ENTRIES)
}

/// A 4-digit year, a company suffix, or a role title marks a new job block.
fn looks_like_job_entry(line: &str) -> bool {
    let lower = line.to_lowercase();
    contains_year(line)
        || COMPANY_SUFFIXES.iter().any(|s| lower.contains(s))
        || ROLE_TITLES.iter().any(|t| lower.contains(t))
}

/// A degree keyword alone is enough; an institution keyword needs a year on
/// the same line to avoid catching prose like "school projects".
fn looks_like_education_entry(line: &str) -> bool {
    let lower = line.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|k| lower.contains(k))
        || (INSTITUTION_KEYWORDS.iter().any(|k| lower.contains(k)) && contains_year(line))
}

fn contains_year(line: &str) -> bool {
    line.as_bytes()
        .windows(4)
        .any(|w| w.iter().all(u8::is_ascii_digit))
}

fn accumulate(lines: &[String], is_entry: impl Fn(&str) -> bool, cap: usize) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        if is_entry(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(line.clone());
        } else if line.len() > MIN_DETAIL_LINE_LEN {
            if let Some(open) = current.as_mut() {
                open.push(' ');
                open.push_str(line);
            }
        }
    }
    if let Some(done) = current {
        entries.push(done);
    }

    entries.truncate(cap);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sections::segment;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_job_entry_triggers() {
        assert!(looks_like_job_entry("Google (2019 - 2023)"));
        assert!(looks_like_job_entry("Initech LLC"));
        assert!(looks_like_job_entry("Senior Software Engineer"));
        assert!(!looks_like_job_entry("Built internal tooling"));
    }

    #[test]
    fn test_education_entry_triggers() {
        assert!(looks_like_education_entry("Bachelor of Science"));
        assert!(looks_like_education_entry("Stanford University, 2016"));
        assert!(!looks_like_education_entry("Stanford University"));
        assert!(!looks_like_education_entry("Graduated with honors"));
    }

    #[test]
    fn test_contains_year() {
        assert!(contains_year("May 2020"));
        assert!(!contains_year("May 20"));
        assert!(!contains_year(""));
    }

    #[test]
    fn test_continuation_lines_fold_into_entry() {
        let input = lines(&[
            "Experience",
            "Senior Engineer at Google (2019)",
            "Led the payments replatform",
            "Analyst at Initech Corp (2016)",
        ]);
        let sections = segment(&input);
        let entries = extract_experience(&sections, &input);
        assert_eq!(
            entries,
            vec![
                "Senior Engineer at Google (2019) Led the payments replatform",
                "Analyst at Initech Corp (2016)",
            ]
        );
    }

    #[test]
    fn test_short_continuation_lines_skipped() {
        let input = lines(&["Experience", "Engineer at Acme Inc (2020)", "remote"]);
        let sections = segment(&input);
        let entries = extract_experience(&sections, &input);
        assert_eq!(entries, vec!["Engineer at Acme Inc (2020)"]);
    }

    #[test]
    fn test_preamble_lines_without_open_entry_dropped() {
        let input = lines(&["Experience", "A decade of shipping software", "Engineer at Acme Inc"]);
        let sections = segment(&input);
        let entries = extract_experience(&sections, &input);
        assert_eq!(entries, vec!["Engineer at Acme Inc"]);
    }

    #[test]
    fn test_experience_capped_at_five() {
        let mut items = vec!["Experience".to_string()];
        for year in 2015..2023 {
            items.push(format!("Engineer at Shop {year}"));
        }
        let sections = segment(&items);
        let entries = extract_experience(&sections, &items);
        assert_eq!(entries.len(), MAX_EXPERIENCE_ENTRIES);
        // Oldest-first as encountered.
        assert!(entries[0].contains("2015"));
    }

    #[test]
    fn test_education_capped_at_three() {
        let input = lines(&[
            "Education",
            "Bachelor of Arts (2010)",
            "Master of Science (2012)",
            "PhD in Biology (2016)",
            "Diploma in Design (2018)",
        ]);
        let sections = segment(&input);
        assert_eq!(extract_education(&sections, &input).len(), MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_experience_fallback_without_heading() {
        // No segmenter heading, but the cue list catches "roles held".
        let input = lines(&["Jane Doe", "Roles held so far", "Engineer at Acme Inc (2020)"]);
        let sections = segment(&input);
        assert!(sections.lines(Section::Experience).is_empty());
        let entries = extract_experience(&sections, &input);
        assert_eq!(entries, vec!["Engineer at Acme Inc (2020)"]);
    }

    #[test]
    fn test_sections_keep_experience_and_education_apart() {
        let input = lines(&[
            "Experience",
            "Engineer at Google Inc (2020)",
            "Education",
            "Bachelor of Science - MIT (2016)",
        ]);
        let sections = segment(&input);
        let experience = extract_experience(&sections, &input);
        let education = extract_education(&sections, &input);
        assert_eq!(experience, vec!["Engineer at Google Inc (2020)"]);
        assert_eq!(education, vec!["Bachelor of Science - MIT (2016)"]);
    }
}
