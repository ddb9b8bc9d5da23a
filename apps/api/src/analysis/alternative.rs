//! Alternative-Domain Finder: looks for one other domain the candidate already fits.

use tracing::debug;

use crate::analysis::gap::{match_count, match_score, missing_by_tier, SkillSet, TierBreakdown};
use crate::analysis::taxonomy::Taxonomy;

/// An alternative must score strictly above this to be reported.
pub const ALTERNATIVE_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub domain: String,
    pub missing_by_tier: TierBreakdown,
}

/// Returns the non-primary domain with the strictly highest match score above
/// `ALTERNATIVE_THRESHOLD`. Ties keep the earlier domain in taxonomy order.
pub fn find_alternative(taxonomy: &Taxonomy, primary: &str, skills: &SkillSet) -> Option<Alternative> {
    let mut best: Option<(&str, f64)> = None;
    let mut best_score = ALTERNATIVE_THRESHOLD;

    for (domain, profile) in taxonomy.iter() {
        if domain == primary {
            continue;
        }
        let required = profile.required_count();
        if required == 0 {
            continue;
        }

        let alt_score = match_score(match_count(profile, skills), required);
        if alt_score > best_score {
            best_score = alt_score;
            best = Some((domain, alt_score));
        }
    }

    let (domain, score) = best?;
    debug!("Alternative domain '{domain}' matched at {score:.1}%");

    let profile = taxonomy.get(domain)?;
    Some(Alternative {
        domain: domain.to_string(),
        missing_by_tier: missing_by_tier(profile, skills),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::{DomainProfile, Tier};
    use crate::analysis::test_support::fixture_taxonomy;

    fn profile(beginner: &[&str]) -> DomainProfile {
        DomainProfile {
            beginner: beginner.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_overlap_yields_none() {
        let skills: SkillSet = ["Cobol", "Fortran"].into_iter().collect();
        assert!(find_alternative(&fixture_taxonomy(), "Full Stack Developer", &skills).is_none());
    }

    #[test]
    fn test_finds_best_alternative_with_tiers() {
        // DevOps: Linux, Git, Docker of 5 → 60%.
        let skills: SkillSet = ["linux", "git", "docker", "HTML"].into_iter().collect();
        let alt = find_alternative(&fixture_taxonomy(), "Full Stack Developer", &skills).unwrap();

        assert_eq!(alt.domain, "DevOps Engineer");
        assert!(alt.missing_by_tier[&Tier::Beginner].is_empty());
        assert_eq!(alt.missing_by_tier[&Tier::Intermediate], vec!["Kubernetes"]);
        assert_eq!(alt.missing_by_tier[&Tier::Advanced], vec!["Terraform"]);
    }

    #[test]
    fn test_primary_is_excluded() {
        let skills: SkillSet = ["Linux", "Git", "Docker", "Kubernetes", "Terraform"]
            .into_iter()
            .collect();
        let alt = find_alternative(&fixture_taxonomy(), "DevOps Engineer", &skills);
        assert!(alt.is_none());
    }

    #[test]
    fn test_exactly_thirty_percent_is_not_enough() {
        let ten = profile(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        let taxonomy = Taxonomy::from_domains(vec![
            ("Primary".to_string(), profile(&["X"])),
            ("Ten Skills".to_string(), ten),
        ])
        .unwrap();

        let three: SkillSet = ["A", "B", "C"].into_iter().collect();
        assert!(find_alternative(&taxonomy, "Primary", &three).is_none());

        let four: SkillSet = ["A", "B", "C", "D"].into_iter().collect();
        let alt = find_alternative(&taxonomy, "Primary", &four).unwrap();
        assert_eq!(alt.domain, "Ten Skills");
    }

    #[test]
    fn test_ties_keep_first_in_taxonomy_order() {
        let taxonomy = Taxonomy::from_domains(vec![
            ("Primary".to_string(), profile(&["X"])),
            ("First".to_string(), profile(&["A", "B"])),
            ("Second".to_string(), profile(&["A", "C"])),
        ])
        .unwrap();
        let skills: SkillSet = ["A"].into_iter().collect();

        let alt = find_alternative(&taxonomy, "Primary", &skills).unwrap();
        assert_eq!(alt.domain, "First");
    }

    #[test]
    fn test_strictly_higher_score_wins() {
        let taxonomy = Taxonomy::from_domains(vec![
            ("Primary".to_string(), profile(&["X"])),
            ("Half".to_string(), profile(&["A", "B"])),
            ("Full".to_string(), profile(&["A"])),
        ])
        .unwrap();
        let skills: SkillSet = ["A"].into_iter().collect();

        let alt = find_alternative(&taxonomy, "Primary", &skills).unwrap();
        assert_eq!(alt.domain, "Full");
        assert!(alt.missing_by_tier.values().all(Vec::is_empty));
    }

    #[test]
    fn test_domains_without_skills_are_skipped() {
        let taxonomy = Taxonomy::from_domains(vec![
            ("Primary".to_string(), profile(&["X"])),
            ("Hollow".to_string(), DomainProfile::default()),
        ])
        .unwrap();
        let skills: SkillSet = ["X"].into_iter().collect();
        assert!(find_alternative(&taxonomy, "Primary", &skills).is_none());
    }
}
