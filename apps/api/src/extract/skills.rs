//! Skill detection against a curated vocabulary.
//!
//! Matching is case-insensitive substring presence over the full text, so the
//! vocabulary is curated to avoid terms that collide with ordinary prose
//! (bare "r" or "go" would match almost any document). Results keep the
//! vocabulary scan order; duplicates are dropped on first sight.

/// Known technology, tool, and platform terms, lower-case, grouped loosely by
/// area. Order here is the output order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "golang",
    "rust",
    "swift",
    "kotlin",
    "scala",
    "matlab",
    "dart",
    "perl",
    "bash",
    "powershell",
    "assembly",
    "cobol",
    "fortran",
    "objective-c",
    "haskell",
    "elixir",
    // Web
    "html",
    "css",
    "react",
    "angular",
    "vue.js",
    "svelte",
    "node.js",
    "express",
    "next.js",
    "django",
    "flask",
    "laravel",
    "rails",
    "spring",
    "asp.net",
    "jquery",
    "bootstrap",
    "tailwind",
    "sass",
    "less",
    "webpack",
    "vite",
    "babel",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "oracle",
    "sqlite",
    "mariadb",
    "cassandra",
    "neo4j",
    "dynamodb",
    "elasticsearch",
    // Cloud and devops
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "terraform",
    "ansible",
    "chef",
    "puppet",
    "vagrant",
    "nginx",
    "apache",
    "ci/cd",
    "prometheus",
    "grafana",
    // Data and ML
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "plotly",
    "jupyter",
    "spark",
    "hadoop",
    "kafka",
    "airflow",
    "dbt",
    // Tools
    "excel",
    "powerpoint",
    "word",
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
    "invision",
    "zeplin",
    "tableau",
    "power bi",
    "looker",
    "jira",
    "confluence",
    "slack",
    "zoom",
    "teams",
    "trello",
    "asana",
    "notion",
    // Frameworks and APIs
    "fastapi",
    "fastify",
    "koa",
    "hapi",
    "meteor",
    "ember.js",
    "backbone.js",
    "socket.io",
    "graphql",
    "rest",
    "soap",
    "grpc",
    "protobuf",
    "thrift",
    // Mobile
    "react native",
    "flutter",
    "xamarin",
    "ionic",
    "cordova",
    "android",
    "ios",
    "xcode",
    // Other
    "blockchain",
    "ethereum",
    "solidity",
    "web3",
    "iot",
    "arduino",
    "raspberry pi",
    "opencv",
    "computer vision",
    "nlp",
    "natural language processing",
    "artificial intelligence",
    "microservices",
    "linux",
    "unix",
];

/// Process and soft-skill words that must never be reported as skills, even
/// when they coincide with a vocabulary term.
pub const EXCLUDED_TERMS: &[&str] = &[
    "team",
    "teams",
    "work",
    "working",
    "worked",
    "experience",
    "project",
    "projects",
    "development",
    "develop",
    "developed",
    "analysis",
    "analyze",
    "analyzed",
    "management",
    "manage",
    "managed",
    "leadership",
    "lead",
    "led",
    "communication",
    "collaboration",
    "collaborate",
    "collaborated",
    "problem solving",
    "problem-solving",
    "critical thinking",
    "time management",
    "organization",
    "organized",
];

/// Scans the full text for vocabulary terms. Dedup policy: first-seen
/// vocabulary order, never sorted.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for term in SKILL_VOCABULARY {
        if EXCLUDED_TERMS.contains(term) {
            continue;
        }
        if lower.contains(term) && !found.iter().any(|f| f == term) {
            found.push((*term).to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_case_insensitively() {
        let skills = extract_skills("Expert in Python and DOCKER.");
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"docker".to_string()));
    }

    #[test]
    fn test_repeated_mentions_reported_once() {
        let skills = extract_skills("Python, python, and more Python");
        assert_eq!(skills.iter().filter(|s| *s == "python").count(), 1);
    }

    #[test]
    fn test_excluded_terms_never_reported() {
        // "teams" is in the vocabulary (the chat tool) but also excluded as a
        // soft-skill word; exclusion wins.
        let skills = extract_skills("strong teams player with leadership experience");
        assert!(!skills.contains(&"teams".to_string()));
        assert!(!skills.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_scan_order_is_vocabulary_order() {
        // "rust" precedes "docker" in the vocabulary even though the text
        // mentions them in the opposite order.
        let skills = extract_skills("Docker and Rust");
        let rust_pos = skills.iter().position(|s| s == "rust").unwrap();
        let docker_pos = skills.iter().position(|s| s == "docker").unwrap();
        assert!(rust_pos < docker_pos);
    }

    #[test]
    fn test_multi_word_terms_match() {
        let skills = extract_skills("applied machine learning at scale");
        assert!(skills.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_vocabulary_is_all_lowercase() {
        for term in SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase(), "vocabulary term {term} must be lower-case");
        }
    }
}
