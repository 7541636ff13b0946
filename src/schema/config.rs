//! Search configuration types.

use serde::{Deserialize, Serialize};

use crate::search::Fragment;

/// Upper bound on the seed vocabulary.
///
/// Seeding enumerates the full power set of the seed fragments, so the
/// initial population has `2^k` candidates for `k` seed fragments.
pub const MAX_SEED_FRAGMENTS: usize = 16;

/// Upper bound on `max_specialization_bound`.
///
/// Each quantified fragment of each survivor yields `bound + 1` children.
pub const MAX_SPECIALIZATION_BOUND: u32 = 64;

/// Top-level configuration for a regex search.
///
/// The fragment vocabularies define the search space; the remaining fields
/// bound the amount of work done per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fragments whose power set forms the initial population.
    #[serde(default = "default_seed_fragments")]
    pub seed_fragments: Vec<Fragment>,
    /// Fragments appended to survivors by the extension operator.
    #[serde(default = "default_extension_fragments")]
    pub extension_fragments: Vec<Fragment>,
    /// Largest exact repetition count tried by specialization (inclusive).
    #[serde(default = "default_max_specialization_bound")]
    pub max_specialization_bound: u32,
    /// Generation budget before falling back to the best candidate.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Number of top candidates promoted into the next generation.
    #[serde(default = "default_survivor_count")]
    pub survivor_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed_fragments: default_seed_fragments(),
            extension_fragments: default_extension_fragments(),
            max_specialization_bound: default_max_specialization_bound(),
            max_generations: default_max_generations(),
            survivor_count: default_survivor_count(),
        }
    }
}

fn default_seed_fragments() -> Vec<Fragment> {
    vec![Fragment::from(r"\d+"), Fragment::from(r"\w+")]
}
fn default_extension_fragments() -> Vec<Fragment> {
    vec![Fragment::from("[-]"), Fragment::from(r"\d+")]
}
fn default_max_specialization_bound() -> u32 {
    3
}
fn default_max_generations() -> usize {
    10
}
fn default_survivor_count() -> usize {
    5
}

impl SearchConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.survivor_count == 0 {
            return Err(ConfigError::NoSurvivors);
        }
        if self.seed_fragments.len() > MAX_SEED_FRAGMENTS {
            return Err(ConfigError::SeedVocabularyTooLarge {
                count: self.seed_fragments.len(),
                max: MAX_SEED_FRAGMENTS,
            });
        }
        if self.max_specialization_bound > MAX_SPECIALIZATION_BOUND {
            return Err(ConfigError::SpecializationBoundTooLarge {
                bound: self.max_specialization_bound,
                max: MAX_SPECIALIZATION_BOUND,
            });
        }
        let vocabularies = [
            ("seed", &self.seed_fragments),
            ("extension", &self.extension_fragments),
        ];
        for (vocabulary, fragments) in vocabularies {
            if let Some(index) = fragments.iter().position(Fragment::is_empty) {
                return Err(ConfigError::EmptyFragment { vocabulary, index });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Generation budget must be at least 1")]
    NoGenerations,
    #[error("Survivor count must be at least 1")]
    NoSurvivors,
    #[error("Seed vocabulary has {count} fragments, at most {max} are allowed")]
    SeedVocabularyTooLarge { count: usize, max: usize },
    #[error("Specialization bound {bound} exceeds the maximum of {max}")]
    SpecializationBoundTooLarge { bound: u32, max: u32 },
    #[error("Fragment {index} of the {vocabulary} vocabulary is empty")]
    EmptyFragment {
        vocabulary: &'static str,
        index: usize,
    },
}
