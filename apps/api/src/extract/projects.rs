//! Project extraction. Mirrors the certifications collector over the projects
//! section; the fallback scan also opens on a GitHub URL, since personal
//! project blocks are often introduced by a repository link instead of a
//! heading.

use crate::extract::sections::{heading_for, sticky_region, SectionMap, Section};

pub const MAX_PROJECT_ENTRIES: usize = 5;

const MIN_ENTRY_LEN: usize = 5;

const PROJECT_CUES: &[&str] = &["project", "portfolio", "hackathon", "case study", "github.com"];

const PROJECT_TERMINATORS: &[&str] = &["experience", "education", "certification", "skills"];

pub fn extract_projects(sections: &SectionMap, all_lines: &[String]) -> Vec<String> {
    let section = sections.lines(Section::Projects);
    if section.is_empty() {
        let region = sticky_region(all_lines, PROJECT_CUES, PROJECT_TERMINATORS);
        return collect_entries(&region);
    }
    collect_entries(section)
}

fn collect_entries(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| heading_for(line).is_none())
        .filter(|line| line.len() > MIN_ENTRY_LEN)
        .take(MAX_PROJECT_ENTRIES)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sections::segment;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collects_section_lines() {
        let input = lines(&[
            "Projects",
            "Realtime chat server in Rust",
            "Static site generator",
        ]);
        let sections = segment(&input);
        assert_eq!(
            extract_projects(&sections, &input),
            vec!["Realtime chat server in Rust", "Static site generator"]
        );
    }

    #[test]
    fn test_heading_line_not_reported() {
        let input = lines(&["Portfolio", "Realtime chat server in Rust"]);
        let sections = segment(&input);
        let entries = extract_projects(&sections, &input);
        assert!(!entries.iter().any(|e| e == "Portfolio"));
        assert_eq!(entries, vec!["Realtime chat server in Rust"]);
    }

    #[test]
    fn test_capped_at_five() {
        let mut items = vec!["Projects".to_string()];
        for i in 0..7 {
            items.push(format!("Side build number {i}"));
        }
        let sections = segment(&items);
        assert_eq!(extract_projects(&sections, &items).len(), MAX_PROJECT_ENTRIES);
    }

    #[test]
    fn test_fallback_opens_on_github_url() {
        let input = lines(&[
            "Jane Doe",
            "See github.com/janedoe for code",
            "Realtime chat server in Rust",
            "Experience",
            "Engineer at Acme Inc",
        ]);
        let sections = segment(&input);
        assert!(sections.lines(Section::Projects).is_empty());
        assert_eq!(
            extract_projects(&sections, &input),
            vec!["Realtime chat server in Rust"]
        );
    }

    #[test]
    fn test_empty_without_section_or_cue() {
        let input = lines(&["Jane Doe", "Skills", "Rust"]);
        let sections = segment(&input);
        assert!(extract_projects(&sections, &input).is_empty());
    }
}
