use std::sync::Arc;

use anyhow::{Context, Result};

use crate::analysis::extractor::SkillExtractor;
use crate::analysis::taxonomy::Taxonomy;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    pub taxonomy: Arc<Taxonomy>,
    /// Compiled once from `taxonomy`.
    pub extractor: Arc<SkillExtractor>,
    pub config: Config,
}

impl AppState {
    /// Builds state around an already-loaded taxonomy.
    pub fn new(taxonomy: Taxonomy, config: Config) -> Result<Self> {
        let extractor =
            SkillExtractor::new(&taxonomy).context("Failed to compile skill patterns")?;
        Ok(Self {
            taxonomy: Arc::new(taxonomy),
            extractor: Arc::new(extractor),
            config,
        })
    }
}
