//! Candidate representation: an ordered sequence of pattern fragments.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An atomic regex sub-pattern drawn from a fixed vocabulary.
///
/// Fragments are concatenated in sequence order to form a pattern body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte offset of the one-or-more quantifier, if the fragment has one.
    ///
    /// Only the first `+` counts, and never at offset 0 where it has
    /// nothing to repeat.
    pub fn unbounded_marker(&self) -> Option<usize> {
        self.0.find('+').filter(|&offset| offset > 0)
    }

    /// Replace the one-or-more quantifier with an exact `{count}` repetition.
    pub fn specialize(&self, count: u32) -> Option<Fragment> {
        let offset = self.unbounded_marker()?;
        Some(Self(format!(
            "{}{{{}}}{}",
            &self.0[..offset],
            count,
            &self.0[offset + 1..]
        )))
    }
}

impl From<&str> for Fragment {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Fragment {
    fn from(source: String) -> Self {
        Self(source)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate pattern in the population.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Unique identifier.
    pub id: u64,
    /// Pattern fragments in concatenation order.
    pub fragments: Vec<Fragment>,
    /// Rounded fitness score.
    pub score: i64,
    /// Fitness score before rounding.
    pub raw_score: f64,
    /// Compiled full-match pattern, set once evaluated.
    pub full_match: Option<Regex>,
    /// Generation created.
    pub generation: usize,
    /// Parent ID, for candidates produced by mutation.
    pub parent: Option<u64>,
}

impl Candidate {
    /// Create an unevaluated candidate.
    pub fn new(id: u64, fragments: Vec<Fragment>, generation: usize) -> Self {
        Self {
            id,
            fragments,
            score: 0,
            raw_score: 0.0,
            full_match: None,
            generation,
            parent: None,
        }
    }

    /// Create an unevaluated offspring of `parent`.
    pub fn offspring(id: u64, fragments: Vec<Fragment>, parent: &Candidate) -> Self {
        Self {
            parent: Some(parent.id),
            ..Self::new(id, fragments, parent.generation + 1)
        }
    }

    /// Concatenated fragments, without anchors.
    pub fn body(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    pub fn is_evaluated(&self) -> bool {
        self.full_match.is_some()
    }

    /// Source of the anchored full-match pattern.
    pub fn full_match_source(&self) -> String {
        match &self.full_match {
            Some(regex) => regex.as_str().to_string(),
            None => format!("^{}$", self.body()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_marker() {
        assert_eq!(Fragment::from(r"\d+").unbounded_marker(), Some(2));
        assert_eq!(Fragment::from("[-]").unbounded_marker(), None);
        assert_eq!(Fragment::from("+a").unbounded_marker(), None);
    }

    #[test]
    fn test_specialize_replaces_first_marker() {
        assert_eq!(
            Fragment::from(r"\w+").specialize(2),
            Some(Fragment::from(r"\w{2}"))
        );
        assert_eq!(
            Fragment::from("a+b+").specialize(0),
            Some(Fragment::from("a{0}b+"))
        );
        assert_eq!(Fragment::from("abc").specialize(1), None);
    }

    #[test]
    fn test_body_and_source() {
        let candidate = Candidate::new(0, vec![Fragment::from(r"\d+"), Fragment::from("[-]")], 0);
        assert_eq!(candidate.body(), r"\d+[-]");
        assert_eq!(candidate.full_match_source(), r"^\d+[-]$");
        assert!(!candidate.is_evaluated());

        let empty = Candidate::new(1, Vec::new(), 0);
        assert_eq!(empty.full_match_source(), "^$");
    }

    #[test]
    fn test_offspring_links_parent() {
        let parent = Candidate::new(7, vec![Fragment::from(r"\d+")], 2);
        let child = Candidate::offspring(8, parent.fragments.clone(), &parent);
        assert_eq!(child.parent, Some(7));
        assert_eq!(child.generation, 3);
        assert_eq!(child.score, 0);
    }
}
