//! Regex synthesis - Evolve a regular expression from labeled examples.
//!
//! This crate searches for a regular expression that fully matches a set of
//! positive strings and rejects a set of negative strings. Candidates are
//! sequences of pattern fragments drawn from a small vocabulary; each
//! generation is scored, truncated to the best few, and expanded by
//! appending fragments or pinning `+` quantifiers to exact counts.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, example sets and result types
//! - `search`: Candidates, fitness scoring, mutation, selection and the engine
//!
//! # Example
//!
//! ```rust,no_run
//! use regex_synth::{ExampleSet, SearchConfig, SearchEngine};
//!
//! let examples = ExampleSet::parse("123\tabc\n456\n");
//! let mut engine = SearchEngine::new(SearchConfig::default(), examples);
//! let result = engine.run().expect("search failed");
//!
//! if result.is_solved() {
//!     println!("Generated regex: {}", result.best.pattern);
//! }
//! ```

pub mod schema;
pub mod search;

// Re-export commonly used types
pub use schema::{ExampleSet, SearchConfig, SearchResult, StopReason};
pub use search::{Candidate, Fragment, SearchEngine, SearchError};
