// Skill-gap analysis engine.
// Taxonomy → skill extraction → domain resolution → gap scoring → alternative domain.
// Everything except `handlers` is pure and synchronous over an immutable `Taxonomy`.

pub mod alternative;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod report;
pub mod resolver;
pub mod roadmap;
pub mod taxonomy;

#[cfg(test)]
pub(crate) mod test_support;

pub use extractor::SkillExtractor;
pub use gap::SkillSet;
pub use report::{analyze, AnalysisResult};
pub use taxonomy::{DomainProfile, Taxonomy, TaxonomyError, Tier};
