//! Progress reports and results produced by a search run.

use serde::{Deserialize, Serialize};

use crate::search::{Candidate, Fragment};

/// Report emitted once per surviving candidate per generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Generation index (0-based).
    pub generation: usize,
    /// Candidate identifier.
    pub candidate_id: u64,
    /// Rounded score.
    pub score: i64,
    /// Unrounded score.
    pub raw_score: f64,
    /// Full-match pattern source.
    pub pattern: String,
}

impl EvaluationReport {
    pub fn new(generation: usize, candidate: &Candidate) -> Self {
        Self {
            generation,
            candidate_id: candidate.id,
            score: candidate.score,
            raw_score: candidate.raw_score,
            pattern: candidate.full_match_source(),
        }
    }
}

/// Serializable snapshot of a scored candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    pub id: u64,
    /// Generation the candidate was created in.
    pub generation: usize,
    /// Parent that produced this candidate by mutation, if any.
    pub parent: Option<u64>,
    pub fragments: Vec<Fragment>,
    pub score: i64,
    pub raw_score: f64,
    /// Full-match pattern source.
    pub pattern: String,
}

impl From<&Candidate> for CandidateSnapshot {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            generation: candidate.generation,
            parent: candidate.parent,
            fragments: candidate.fragments.clone(),
            score: candidate.score,
            raw_score: candidate.raw_score,
            pattern: candidate.full_match_source(),
        }
    }
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Why the search stopped.
    pub stop_reason: StopReason,
    /// The perfect candidate, or the best one seen in the last generation.
    pub best: CandidateSnapshot,
    /// Run statistics.
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.stop_reason == StopReason::Solved
    }
}

/// Statistics from a search run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Generations evaluated.
    pub generations: usize,
    /// Candidates whose patterns compiled and were scored.
    pub total_evaluations: u64,
    /// Candidates dropped because their pattern failed to compile.
    pub compile_failures: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

/// Reason the search stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// A candidate reached the perfect score.
    Solved,
    /// The generation budget ran out.
    TimedOut,
}
