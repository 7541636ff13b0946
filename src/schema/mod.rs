//! Schema module - Configuration, example and result types for regex search.

mod config;
mod examples;
mod outcome;

pub use config::*;
pub use examples::*;
pub use outcome::*;
