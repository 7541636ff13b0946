//! Generation loop driving the regex search.

use std::time::Instant;

use crate::schema::{
    CandidateSnapshot, ConfigError, EvaluationReport, ExampleSet, SearchConfig, SearchResult,
    SearchStats, StopReason,
};

use super::candidate::Candidate;
use super::fitness::FitnessEvaluator;
use super::mutation::{Mutator, seed_sequences};
use super::selection;

/// Errors that end a search run without a result.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Generation {generation} has no candidates to evaluate")]
    EmptyPopulation { generation: usize },
    #[error("All {failures} candidates of generation {generation} failed to compile")]
    AllCandidatesInvalid { generation: usize, failures: usize },
}

/// Search engine that evolves candidate patterns.
pub struct SearchEngine {
    config: SearchConfig,
    evaluator: FitnessEvaluator,
    mutator: Mutator,
    population: Vec<Candidate>,
    generation: usize,
    next_id: u64,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a new search engine.
    pub fn new(config: SearchConfig, examples: ExampleSet) -> Self {
        let mutator = Mutator::from_config(&config);
        Self {
            config,
            evaluator: FitnessEvaluator::new(examples),
            mutator,
            population: Vec::new(),
            generation: 0,
            next_id: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current unevaluated population.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seed the population with every subset of the seed vocabulary.
    pub fn initialize(&mut self) {
        self.generation = 0;
        self.next_id = 0;
        self.stats = SearchStats::default();

        let mut population = Vec::new();
        for fragments in seed_sequences(&self.config.seed_fragments) {
            let id = self.allocate_id();
            population.push(Candidate::new(id, fragments, 0));
        }
        self.population = population;
    }

    /// Keep the top survivors and expand them into the next population.
    pub fn promote(&mut self, scored: Vec<Candidate>) -> Vec<Candidate> {
        let survivors = selection::select_survivors(scored, self.config.survivor_count);

        let mut next_gen = Vec::new();
        for parent in &survivors {
            for fragments in self.mutator.offspring(parent) {
                let id = self.allocate_id();
                next_gen.push(Candidate::offspring(id, fragments, parent));
            }
        }

        log::debug!(
            "Promoted {} survivors into {} candidates",
            survivors.len(),
            next_gen.len()
        );
        next_gen
    }

    /// Run the search, reporting every scored candidate to `callback`.
    ///
    /// Stops at the first candidate whose rounded score equals the number of
    /// positive examples, or after `max_generations` with the best candidate
    /// of the last generation.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SearchResult, SearchError>
    where
        F: FnMut(&EvaluationReport),
    {
        self.config.validate()?;
        let start_time = Instant::now();
        let perfect_score = self.evaluator.perfect_score();

        self.initialize();

        let (stop_reason, best) = 'search: loop {
            let generation = self.generation;
            if self.population.is_empty() {
                return Err(SearchError::EmptyPopulation { generation });
            }

            let population = std::mem::take(&mut self.population);
            let evaluation = self.evaluator.evaluate_population(population);

            self.stats.generations = generation + 1;
            self.stats.total_evaluations += evaluation.survivors.len() as u64;
            self.stats.compile_failures += evaluation.failures as u64;

            if evaluation.survivors.is_empty() {
                return Err(SearchError::AllCandidatesInvalid {
                    generation,
                    failures: evaluation.failures,
                });
            }

            for candidate in &evaluation.survivors {
                let report = EvaluationReport::new(generation, candidate);
                log::debug!("{} {}", report.score, report.pattern);
                callback(&report);

                if candidate.score == perfect_score {
                    break 'search (StopReason::Solved, candidate.clone());
                }
            }

            if let Some(best) = selection::best(&evaluation.survivors) {
                log::info!(
                    "Generation {}: {} candidates, best score {}/{} ({})",
                    generation,
                    evaluation.survivors.len(),
                    best.score,
                    perfect_score,
                    best.full_match_source()
                );
            }

            if generation + 1 >= self.config.max_generations {
                let mut last = evaluation.survivors;
                selection::rank(&mut last);
                match last.into_iter().next() {
                    Some(best) => break (StopReason::TimedOut, best),
                    None => return Err(SearchError::EmptyPopulation { generation }),
                }
            }

            self.population = self.promote(evaluation.survivors);
            self.generation += 1;
        };

        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        log::info!(
            "Search stopped ({:?}) after {} generations: {}",
            stop_reason,
            self.stats.generations,
            best.full_match_source()
        );

        Ok(SearchResult {
            stop_reason,
            best: CandidateSnapshot::from(&best),
            stats: self.stats.clone(),
        })
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> Result<SearchResult, SearchError> {
        self.run_with_callback(|_| {})
    }
}
