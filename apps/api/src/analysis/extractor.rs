//! Skill Extractor: finds which taxonomy skill entries are mentioned in free text.
//!
//! Each entry may be an alias group ("Python/Scala"). An entry counts as
//! mentioned if any of its aliases appears as a whole word, case-insensitively.
//! The reported value is always the entry string, never the alias that hit.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;
use tracing::{debug, warn};

use crate::analysis::taxonomy::{Taxonomy, TaxonomyError, Tier};

/// One taxonomy entry with a compiled pattern per alias.
#[derive(Debug)]
struct EntryMatcher {
    entry: String,
    aliases: Vec<Regex>,
}

impl EntryMatcher {
    fn is_mentioned(&self, text_lower: &str) -> bool {
        self.aliases.iter().any(|re| re.is_match(text_lower))
    }
}

/// Precompiled matcher over every skill entry in a taxonomy.
///
/// Built once alongside the taxonomy; `extract` is then a pure function of the text.
#[derive(Debug)]
pub struct SkillExtractor {
    matchers: Vec<EntryMatcher>,
}

impl SkillExtractor {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matchers = Vec::new();

        for (domain, profile) in taxonomy.iter() {
            for tier in Tier::ALL {
                for entry in profile.tier(tier) {
                    if !seen.insert(entry.as_str()) {
                        continue;
                    }
                    let aliases = compile_aliases(entry)?;
                    if aliases.is_empty() {
                        warn!("Skill entry {entry:?} in '{domain}' ({tier}) has no usable aliases");
                        continue;
                    }
                    matchers.push(EntryMatcher {
                        entry: entry.clone(),
                        aliases,
                    });
                }
            }
        }

        debug!("Skill extractor compiled {} entries", matchers.len());
        Ok(Self { matchers })
    }

    /// Returns the set of skill entries mentioned in `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        if text.trim().is_empty() {
            return BTreeSet::new();
        }

        let text_lower = text.to_lowercase();
        let found: BTreeSet<String> = self
            .matchers
            .iter()
            .filter(|m| m.is_mentioned(&text_lower))
            .map(|m| m.entry.clone())
            .collect();

        debug!("Extracted {} skill entries from {} chars", found.len(), text.len());
        found
    }

    pub fn entry_count(&self) -> usize {
        self.matchers.len()
    }
}

/// Splits an entry on `/` and compiles a whole-word pattern for each non-empty alias.
fn compile_aliases(entry: &str) -> Result<Vec<Regex>, TaxonomyError> {
    entry
        .split('/')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(|alias| {
            let pattern = format!(r"\b{}\b", regex::escape(&alias.to_lowercase()));
            Regex::new(&pattern).map_err(|source| TaxonomyError::Pattern {
                alias: alias.to_string(),
                source,
            })
        })
        .collect()
}
