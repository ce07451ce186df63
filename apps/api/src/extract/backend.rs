//! Extraction backends. The rule-based engine is the default and the
//! guaranteed floor: the LLM backend exists as a best-effort upgrade and
//! falls back to rules wholesale whenever the model call or its response
//! cannot be used.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`, chosen at startup via
//! `EXTRACTOR_BACKEND`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::extract::{self, contact, ParsedResume, UNKNOWN_NAME};
use crate::llm_client::LlmClient;

const EXTRACT_SYSTEM: &str =
    "You are an expert resume parser. Always respond with valid JSON only.";

const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract structured information from the resume below and return ONLY a JSON object with this exact shape:

{"name": string, "email": string|null, "phone": string|null, "skills": [string], "experience": [string], "education": [string]}

Guidelines:
1. Take the name from the first lines, or derive it from the filename if the text never states one.
2. Format phone numbers as (XXX) XXX-XXXX or +1 (XXX) XXX-XXXX.
3. Experience entries are single strings like "Senior Software Engineer at Google (2020-2023)".
4. Education entries are single strings like "Bachelor of Science in Computer Science - Stanford University (2016)".
5. Use null for unknown strings and [] for empty lists. No text outside the JSON object.

FILENAME: {filename}

RESUME TEXT:
{text}"#;

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, text: &str, filename: &str) -> Result<ParsedResume, AppError>;

    /// Short label reported in logs, "rules" or "llm".
    fn backend(&self) -> &'static str;
}

/// The deterministic heuristic engine. Cannot fail.
pub struct RuleBasedExtractor;

#[async_trait]
impl ResumeExtractor for RuleBasedExtractor {
    async fn extract(&self, text: &str, filename: &str) -> Result<ParsedResume, AppError> {
        Ok(extract::parse_resume(text, filename))
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

/// Claude-backed extractor. The model is asked for the six prose-shaped
/// fields; certifications, projects, and links are regex-shaped work and are
/// always computed rule-based regardless of backend.
pub struct LlmExtractor {
    llm: LlmClient,
}

impl LlmExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

/// What the model is asked to return. Looser than `ParsedResume` so a partial
/// response still deserializes and can be cleaned.
#[derive(Debug, Deserialize)]
struct LlmDraft {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experience: Vec<String>,
    #[serde(default)]
    education: Vec<String>,
}

#[async_trait]
impl ResumeExtractor for LlmExtractor {
    async fn extract(&self, text: &str, filename: &str) -> Result<ParsedResume, AppError> {
        let prompt = EXTRACT_PROMPT_TEMPLATE
            .replace("{filename}", filename)
            .replace("{text}", text);

        match self.llm.call_json::<LlmDraft>(&prompt, EXTRACT_SYSTEM).await {
            Ok(draft) => Ok(merge_draft(draft, text, filename)),
            Err(e) => {
                warn!("LLM extraction failed, falling back to rule-based parsing: {e}");
                Ok(extract::parse_resume(text, filename))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Cleans the model's draft and fills in the always-rule-based fields.
fn merge_draft(draft: LlmDraft, text: &str, filename: &str) -> ParsedResume {
    let all_lines = extract::lines::split_lines(text);
    let section_map = extract::sections::segment(&all_lines);

    ParsedResume {
        name: clean_name(draft.name),
        email: draft.email.filter(|e| contact::is_email(e)),
        phone: draft.phone.filter(|p| is_plausible_phone(p)),
        skills: trimmed_non_empty(draft.skills),
        experience: trimmed_non_empty(draft.experience),
        education: trimmed_non_empty(draft.education),
        certifications: extract::certifications::extract_certifications(&section_map, &all_lines),
        projects: extract::projects::extract_projects(&section_map, &all_lines),
        links: extract::links::extract_links(text),
    }
}

fn clean_name(name: Option<String>) -> String {
    match name.as_deref().map(str::trim) {
        Some(trimmed) if trimmed.len() >= 2 => trimmed.to_string(),
        _ => UNKNOWN_NAME.to_string(),
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=15).contains(&digits)
}

fn trimmed_non_empty(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
