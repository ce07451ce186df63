//! Social link extraction. GitHub profiles and LinkedIn `/in/` profiles are
//! normalized to canonical scheme-qualified URLs and deduplicated in
//! first-seen order.

use std::sync::OnceLock;

use regex::Regex;

fn github_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9_-]+)")
            .expect("github pattern")
    })
}

fn linkedin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:https?://)?(?:www\.)?linkedin\.com/in/([A-Za-z0-9_-]+)")
            .expect("linkedin pattern")
    })
}

pub fn extract_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();

    for cap in github_re().captures_iter(text) {
        push_unique(&mut links, format!("https://github.com/{}", &cap[1]));
    }
    for cap in linkedin_re().captures_iter(text) {
        push_unique(&mut links, format!("https://linkedin.com/in/{}", &cap[1]));
    }

    links
}

fn push_unique(links: &mut Vec<String>, url: String) {
    if !links.contains(&url) {
        links.push(url);
    }
}
