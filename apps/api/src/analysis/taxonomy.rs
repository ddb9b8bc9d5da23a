//! Taxonomy Store: the operator-curated domain → tiered-skill mapping.
//!
//! Loaded once at startup and shared read-only (`Arc<Taxonomy>` in `AppState`).
//! Domains keep the order they were written in the JSON document, which the
//! substring step of domain resolution relies on.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration errors raised while building the taxonomy. Fatal at startup.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Taxonomy contains no domains")]
    Empty,

    #[error("Invalid skill pattern for '{alias}': {source}")]
    Pattern {
        alias: String,
        #[source]
        source: regex::Error,
    },
}

/// Proficiency tier within a domain profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Compulsory,
    Intermediate,
    Advanced,
}

impl Tier {
    /// Fixed aggregation order used for `all_required`.
    pub const ALL: [Tier; 4] = [
        Tier::Beginner,
        Tier::Compulsory,
        Tier::Intermediate,
        Tier::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Compulsory => "compulsory",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A career domain's skill requirements, split by tier.
///
/// Missing tier arrays in the source JSON become empty vectors here, so no
/// caller ever has to deal with an absent tier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DomainProfile {
    #[serde(default)]
    pub beginner: Vec<String>,
    #[serde(default)]
    pub compulsory: Vec<String>,
    #[serde(default)]
    pub intermediate: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl DomainProfile {
    pub fn tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Compulsory => &self.compulsory,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }

    /// All skill entries in `[beginner, compulsory, intermediate, advanced]` order.
    pub fn all_required(&self) -> impl Iterator<Item = &String> + '_ {
        Tier::ALL.into_iter().flat_map(move |t| self.tier(t).iter())
    }

    pub fn required_count(&self) -> usize {
        Tier::ALL.iter().map(|t| self.tier(*t).len()).sum()
    }
}

/// Immutable domain → profile mapping.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    domains: Vec<(String, DomainProfile)>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Reads and parses the taxonomy JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let taxonomy = Self::from_json_str(&raw)?;
        info!(
            "Loaded skills taxonomy from {} ({} domains)",
            path.display(),
            taxonomy.len()
        );
        Ok(taxonomy)
    }

    /// Parses a taxonomy document: an object of domain name → profile.
    pub fn from_json_str(raw: &str) -> Result<Self, TaxonomyError> {
        // `preserve_order` keeps the Map in document order.
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;

        let mut domains = Vec::with_capacity(map.len());
        for (name, value) in map {
            let profile: DomainProfile = serde_json::from_value(value)?;
            domains.push((name, profile));
        }

        Self::from_domains(domains)
    }

    /// Builds a taxonomy from already-typed profiles, keeping the given order.
    pub fn from_domains(domains: Vec<(String, DomainProfile)>) -> Result<Self, TaxonomyError> {
        if domains.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut deduped: Vec<(String, DomainProfile)> = Vec::with_capacity(domains.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(domains.len());
        for (name, profile) in domains {
            if let Some(&pos) = index.get(&name) {
                warn!("Duplicate taxonomy domain '{name}', later definition wins");
                deduped[pos].1 = profile;
                continue;
            }
            index.insert(name.clone(), deduped.len());
            deduped.push((name, profile));
        }

        for (name, profile) in &deduped {
            if profile.required_count() == 0 {
                warn!("Taxonomy domain '{name}' has no required skills");
            }
        }

        Ok(Self {
            domains: deduped,
            index,
        })
    }

    pub fn get(&self, domain: &str) -> Option<&DomainProfile> {
        self.index.get(domain).map(|&i| &self.domains[i].1)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.index.contains_key(domain)
    }

    /// `(domain, profile)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainProfile)> + '_ {
        self.domains.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.domains.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
