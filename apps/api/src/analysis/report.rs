//! Full skill-gap report: resolve the target domain, score it, look for an alternative.

use serde::{Deserialize, Serialize};

use crate::analysis::alternative::find_alternative;
use crate::analysis::gap::{analyze_gap, SkillSet, TierBreakdown};
use crate::analysis::resolver::{resolve_domain, ResolutionMethod};
use crate::analysis::taxonomy::Taxonomy;

/// The merged analysis record returned for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Taxonomy key the target query resolved to.
    pub domain: String,
    pub resolution: ResolutionMethod,
    pub score: f64,
    pub status_text: String,
    pub warning: String,
    pub master_msg: String,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: String,
    pub missing_by_tier: TierBreakdown,
    pub alt_domain: Option<String>,
    /// Empty when there is no alternative.
    pub alt_missing_by_tier: TierBreakdown,
}

/// Runs the whole pipeline for one candidate. Pure; never fails.
pub fn analyze(taxonomy: &Taxonomy, skills: &SkillSet, target_query: &str) -> AnalysisResult {
    let resolution = resolve_domain(taxonomy, target_query);
    let gap = analyze_gap(&resolution.domain, taxonomy.get(&resolution.domain), skills);
    let alternative = find_alternative(taxonomy, &resolution.domain, skills);

    let (alt_domain, alt_missing_by_tier) = match alternative {
        Some(alt) => (Some(alt.domain), alt.missing_by_tier),
        None => (None, TierBreakdown::new()),
    };

    AnalysisResult {
        domain: resolution.domain,
        resolution: resolution.method,
        score: gap.score,
        status_text: gap.status_text,
        warning: gap.warning,
        master_msg: gap.master_msg,
        found_skills: gap.found_skills,
        missing_skills: gap.missing_skills,
        roadmap: gap.roadmap,
        missing_by_tier: gap.missing_by_tier,
        alt_domain,
        alt_missing_by_tier,
    }
}
