//! Gap Analyzer: scores a candidate's skills against one domain profile.

use std::collections::{BTreeMap, HashSet};

use crate::analysis::roadmap::render_roadmap;
use crate::analysis::taxonomy::{DomainProfile, Tier};

/// Below this score the candidate gets a warning.
pub const WARNING_THRESHOLD: f64 = 30.0;
/// Above this score the candidate gets the mastery message.
pub const MASTERY_THRESHOLD: f64 = 80.0;

pub const WARNING_MESSAGE: &str = "you should work on yours skills";
pub const DEFAULT_NEXT_STEP: &str = "Engineering Leadership";

/// Missing skills keyed by tier, serialized as `{"beginner": [..], ...}`.
pub type TierBreakdown = BTreeMap<Tier, Vec<String>>;

/// Case-insensitive set of resume skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    lowered: HashSet<String>,
}

impl SkillSet {
    pub fn contains(&self, skill: &str) -> bool {
        self.lowered.contains(&skill.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lowered: iter
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Per-domain part of the analysis record.
#[derive(Debug, Clone, PartialEq)]
pub struct GapAnalysis {
    pub score: f64,
    pub status_text: String,
    pub warning: String,
    pub master_msg: String,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: String,
    pub missing_by_tier: TierBreakdown,
}

/// Analyzes `skills` against `profile`. An absent profile is scored as empty.
pub fn analyze_gap(domain: &str, profile: Option<&DomainProfile>, skills: &SkillSet) -> GapAnalysis {
    let empty = DomainProfile::default();
    let profile = profile.unwrap_or(&empty);

    let (found_skills, missing_skills): (Vec<String>, Vec<String>) = profile
        .all_required()
        .cloned()
        .partition(|s| skills.contains(s));

    let score = match_score(found_skills.len(), profile.required_count());

    let warning = if score < WARNING_THRESHOLD {
        WARNING_MESSAGE.to_string()
    } else {
        String::new()
    };

    let master_msg = if score > MASTERY_THRESHOLD {
        let next_step = profile
            .next_steps
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_NEXT_STEP);
        format!("You are a master in this field. Plan on taking the next step to the {next_step}")
    } else {
        String::new()
    };

    GapAnalysis {
        score,
        status_text: format!("Match Level: {score:.1}%"),
        warning,
        master_msg,
        found_skills,
        missing_skills,
        roadmap: render_roadmap(domain, profile),
        missing_by_tier: missing_by_tier(profile, skills),
    }
}

/// Skills in each tier that the candidate lacks, computed tier by tier.
pub fn missing_by_tier(profile: &DomainProfile, skills: &SkillSet) -> TierBreakdown {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            let missing: Vec<String> = profile
                .tier(tier)
                .iter()
                .filter(|s| !skills.contains(s))
                .cloned()
                .collect();
            (tier, missing)
        })
        .collect()
}

/// Number of a profile's required skills present in `skills`.
pub fn match_count(profile: &DomainProfile, skills: &SkillSet) -> usize {
    profile.all_required().filter(|s| skills.contains(s)).count()
}

/// `100 * found / required`, or 0 when nothing is required.
pub fn match_score(found: usize, required: usize) -> f64 {
    if required == 0 {
        0.0
    } else {
        // Multiply first so round ratios like 3/10 land exactly on 30.0.
        found as f64 * 100.0 / required as f64
    }
}
