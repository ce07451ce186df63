use std::sync::Arc;

use crate::config::Config;
use crate::extract::backend::ResumeExtractor;

/// Shared application state injected into route handlers via Axum extractors.
/// Holds no per-request mutable state; every parse allocates fresh.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: RuleBasedExtractor. Swap via EXTRACTOR_BACKEND env.
    pub extractor: Arc<dyn ResumeExtractor>,
}
