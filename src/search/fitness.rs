//! Fitness scoring of candidates against labeled examples.
//!
//! A candidate earns `+1` for every positive example its anchored pattern
//! matches in full, and partial credit for positives its unanchored
//! pattern only matches in part. Every negative example matched in full
//! costs `-1`. The sum is rounded to an integer score.

use regex::Regex;

use crate::schema::ExampleSet;

use super::candidate::{Candidate, Fragment};

/// The two patterns compiled from a candidate's fragments.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// `^body$`, used for full-match checks.
    pub full: Regex,
    /// `body`, used for partial credit.
    pub partial: Regex,
}

impl CompiledPattern {
    /// Compile the anchored and unanchored patterns for a fragment sequence.
    pub fn compile(fragments: &[Fragment]) -> Result<Self, regex::Error> {
        let body: String = fragments.iter().map(Fragment::as_str).collect();
        let partial = Regex::new(&body)?;
        let full = Regex::new(&format!("^{body}$"))?;
        Ok(Self { full, partial })
    }
}

/// Outcome of evaluating a whole population.
#[derive(Debug, Default)]
pub struct PopulationEvaluation {
    /// Scored candidates, in population order.
    pub survivors: Vec<Candidate>,
    /// Number of candidates dropped because their pattern did not compile.
    pub failures: usize,
}

/// Scores candidates against a fixed example set.
pub struct FitnessEvaluator {
    examples: ExampleSet,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(examples: ExampleSet) -> Self {
        Self { examples }
    }

    /// Rounded score that counts as a solution.
    pub fn perfect_score(&self) -> i64 {
        self.examples.perfect_score()
    }

    /// Unrounded score of a compiled pattern.
    ///
    /// Always within `[-negative.len(), positive.len()]`.
    pub fn score(&self, pattern: &CompiledPattern) -> f64 {
        let reward: f64 = self
            .examples
            .positive
            .iter()
            .map(|example| positive_credit(pattern, example))
            .sum();
        let penalty: f64 = self
            .examples
            .negative
            .iter()
            .map(|example| negative_penalty(pattern, example))
            .sum();
        reward + penalty
    }

    /// Compile and score a candidate.
    pub fn evaluate(&self, mut candidate: Candidate) -> Result<Candidate, regex::Error> {
        let pattern = CompiledPattern::compile(&candidate.fragments)?;
        let raw = self.score(&pattern);

        candidate.raw_score = raw;
        candidate.score = round_score(raw);
        candidate.full_match = Some(pattern.full);
        Ok(candidate)
    }

    /// Evaluate every candidate, dropping those whose pattern fails to compile.
    pub fn evaluate_population(&self, population: Vec<Candidate>) -> PopulationEvaluation {
        let mut evaluation = PopulationEvaluation {
            survivors: Vec::with_capacity(population.len()),
            failures: 0,
        };

        for candidate in population {
            let source = candidate.full_match_source();
            match self.evaluate(candidate) {
                Ok(scored) => evaluation.survivors.push(scored),
                Err(err) => {
                    log::warn!("Dropping candidate {source}: {err}");
                    evaluation.failures += 1;
                }
            }
        }

        evaluation
    }
}

/// Credit for one positive example: `1` for a full match, otherwise the
/// fraction of the example covered by the first unanchored match.
///
/// Lengths are measured in UTF-16 code units.
pub fn positive_credit(pattern: &CompiledPattern, example: &str) -> f64 {
    if pattern.full.is_match(example) {
        return 1.0;
    }
    let length = utf16_len(example);
    if length == 0 {
        return 0.0;
    }
    match pattern.partial.find(example) {
        Some(m) => utf16_len(m.as_str()) as f64 / length as f64,
        None => 0.0,
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Penalty for one negative example: `-1` for a full match, otherwise `0`.
pub fn negative_penalty(pattern: &CompiledPattern, example: &str) -> f64 {
    if pattern.full.is_match(example) {
        log::debug!("Matched failure {} on {example:?}", pattern.full.as_str());
        -1.0
    } else {
        0.0
    }
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_score(raw: f64) -> i64 {
    let floor = raw.floor();
    if raw - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
