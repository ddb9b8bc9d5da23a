//! Mermaid roadmap rendering for a domain profile. Display only.

use crate::analysis::taxonomy::DomainProfile;

const DEFAULT_ADVANCED_LABEL: &str = "Specialist";

/// Renders a `graph TD` diagram: You → Beginner → Intermediate → Advanced → Goal.
pub fn render_roadmap(domain: &str, profile: &DomainProfile) -> String {
    let beginner = first_n(&profile.beginner, 2);
    let intermediate = first_n(&profile.intermediate, 2);
    let advanced = profile
        .advanced
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_ADVANCED_LABEL);

    let mut out = String::from("graph TD\n");
    out.push_str(&format!("  Start((You)) --> B[\"Beginner: {beginner}\"]\n"));
    out.push_str(&format!("  B --> I[\"Intermediate: {intermediate}\"]\n"));
    out.push_str(&format!("  I --> A[\"Advanced: {advanced}\"]\n"));
    out.push_str(&format!("  A --> Goal(({domain}))\n"));
    out.push_str("  style Start fill:#ACC8A2,stroke:#1A2517\n");
    out.push_str("  style Goal fill:#1A2517,stroke:#ACC8A2,color:#fff\n");
    out
}

fn first_n(skills: &[String], n: usize) -> String {
    skills
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
