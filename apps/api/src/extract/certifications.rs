//! Certification extraction: everything of substance in the certifications
//! section, with a cue-driven rescan of the whole document when the segmenter
//! never saw a certifications heading.

use crate::extract::sections::{heading_for, sticky_region, SectionMap, Section};

pub const MAX_CERTIFICATION_ENTRIES: usize = 5;

/// Shortest line worth reporting as a certification.
const MIN_ENTRY_LEN: usize = 5;

const CERTIFICATION_CUES: &[&str] = &[
    "certification",
    "certificate",
    "certified",
    "course",
    "coursera",
    "udemy",
    "edx",
    "datacamp",
];

const CERTIFICATION_TERMINATORS: &[&str] = &["experience", "education", "projects", "skills"];

pub fn extract_certifications(sections: &SectionMap, all_lines: &[String]) -> Vec<String> {
    let section = sections.lines(Section::Certifications);
    if section.is_empty() {
        let region = sticky_region(all_lines, CERTIFICATION_CUES, CERTIFICATION_TERMINATORS);
        return collect_entries(&region);
    }
    collect_entries(section)
}

/// Keeps substantive lines, skipping anything that is itself a heading.
fn collect_entries(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| heading_for(line).is_none())
        .filter(|line| line.len() > MIN_ENTRY_LEN)
        .take(MAX_CERTIFICATION_ENTRIES)
        .cloned()
        .collect()
}
