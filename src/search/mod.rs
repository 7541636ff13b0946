//! Search module - Generate-and-test synthesis of a regular expression.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Candidates** (`candidate`): Fragment sequences plus their fitness
//! - **Fitness** (`fitness`): Compiles candidates and scores them against examples
//! - **Mutation** (`mutation`): Power-set seeding, extension and specialization
//! - **Selection** (`selection`): Truncation to the top survivors
//! - **Engine** (`engine`): The generation loop
//!
//! # Example
//!
//! ```rust,no_run
//! use regex_synth::schema::{ExampleSet, SearchConfig};
//! use regex_synth::search::SearchEngine;
//!
//! let examples = ExampleSet::new(["123", "456"], ["abc"]);
//! let mut engine = SearchEngine::new(SearchConfig::default(), examples);
//!
//! let result = engine
//!     .run_with_callback(|report| println!("{} {}", report.score, report.pattern))
//!     .expect("search failed");
//!
//! println!("{:?}: {}", result.stop_reason, result.best.pattern);
//! ```

mod candidate;
mod engine;
mod fitness;
mod mutation;
mod selection;

pub use candidate::{Candidate, Fragment};
pub use engine::{SearchEngine, SearchError};
pub use fitness::{
    CompiledPattern, FitnessEvaluator, PopulationEvaluation, negative_penalty, positive_credit,
    round_score,
};
pub use mutation::{Mutator, seed_sequences};
pub use selection::{best, rank, select_survivors};
