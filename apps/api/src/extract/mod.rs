//! The extraction engine: decoded text in, structured record out.
//!
//! Data flows strictly forward: text, lines, sections, then one independent
//! heuristic extractor per output field. Extractors never fail; a miss
//! resolves to the field's default. `parse_resume` is therefore total over
//! arbitrary string input and allocates everything fresh per call.

pub mod backend;
pub mod certifications;
pub mod contact;
pub mod history;
pub mod lines;
pub mod links;
pub mod name;
pub mod projects;
pub mod sections;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::extract::sections::Section;

/// Name reported when every name heuristic comes up empty.
pub const UNKNOWN_NAME: &str = "Unknown";

fn default_name() -> String {
    UNKNOWN_NAME.to_string()
}

/// Structured record extracted from one resume. Every field is always
/// present: strings default to `Unknown`/`null`, containers to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Default for ParsedResume {
    fn default() -> Self {
        ParsedResume {
            name: default_name(),
            email: None,
            phone: None,
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            projects: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Runs every field extractor over the text and assembles the record.
///
/// Pure and total: identical input yields identical output, and no input can
/// make it fail. The filename only participates in the last-resort name tier.
pub fn parse_resume(text: &str, filename: &str) -> ParsedResume {
    let all_lines = lines::split_lines(text);
    let section_map = sections::segment(&all_lines);

    ParsedResume {
        name: name::extract_name(section_map.lines(Section::Header), text, filename),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        skills: skills::extract_skills(text),
        experience: history::extract_experience(&section_map, &all_lines),
        education: history::extract_education(&section_map, &all_lines),
        certifications: certifications::extract_certifications(&section_map, &all_lines),
        projects: projects::extract_projects(&section_map, &all_lines),
        links: links::extract_links(text),
    }
}
