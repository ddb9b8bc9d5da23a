//! Domain Resolver: maps a free-text target role onto a taxonomy key.
//!
//! Never fails: the result always names a domain present in the taxonomy.
//! How the key was reached is reported alongside it so callers can tell an
//! explicit match from a fallback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::taxonomy::Taxonomy;

/// Domain used when nothing else matches.
pub const DEFAULT_DOMAIN: &str = "Full Stack Developer";

/// Curated synonyms, keyed by normalized query.
const DOMAIN_ALIASES: &[(&str, &str)] = &[
    ("data scientist", "AI and Data Scientist"),
    ("data science", "AI and Data Scientist"),
    ("web developer", "Full Stack Developer"),
    ("ml engineer", "AI Engineer"),
    ("devops", "DevOps Engineer"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    /// Query matched the synonym table.
    Alias,
    /// Query is a substring of a domain name.
    Substring,
    /// Nothing matched; the default domain was used.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub domain: String,
    pub method: ResolutionMethod,
}

/// Resolves `query` to a domain key. First match wins:
/// alias table → substring of a domain name (taxonomy order) → default.
pub fn resolve_domain(taxonomy: &Taxonomy, query: &str) -> Resolution {
    let normalized = query.trim().to_lowercase();

    let resolution = if normalized.is_empty() {
        fallback(taxonomy)
    } else if let Some(domain) = lookup_alias(taxonomy, &normalized) {
        Resolution {
            domain: domain.to_string(),
            method: ResolutionMethod::Alias,
        }
    } else if let Some(domain) = taxonomy
        .domain_names()
        .find(|name| name.to_lowercase().contains(&normalized))
    {
        Resolution {
            domain: domain.to_string(),
            method: ResolutionMethod::Substring,
        }
    } else {
        fallback(taxonomy)
    };

    debug!(
        "Resolved domain query {:?} -> '{}' ({:?})",
        query, resolution.domain, resolution.method
    );
    resolution
}

fn lookup_alias(taxonomy: &Taxonomy, normalized: &str) -> Option<&'static str> {
    DOMAIN_ALIASES
        .iter()
        .find(|(alias, target)| *alias == normalized && taxonomy.contains(target))
        .map(|(_, target)| *target)
}

fn fallback(taxonomy: &Taxonomy) -> Resolution {
    debug_assert!(!taxonomy.is_empty());
    let domain = if taxonomy.contains(DEFAULT_DOMAIN) {
        DEFAULT_DOMAIN.to_string()
    } else {
        taxonomy
            .domain_names()
            .next()
            .unwrap_or(DEFAULT_DOMAIN)
            .to_string()
    };

    Resolution {
        domain,
        method: ResolutionMethod::Default,
    }
}
