//! Labeled example sets and the plain-text example file format.
//!
//! Each line of an example file holds up to two whitespace-separated
//! columns: a string that must match and a string that must not. A line
//! that starts with whitespace therefore contributes only a negative
//! example.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Positive and negative examples for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSet {
    /// Strings the synthesized pattern must match in full.
    pub positive: Vec<String>,
    /// Strings the synthesized pattern must not match in full.
    pub negative: Vec<String>,
}

impl ExampleSet {
    /// Create an example set from string slices.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse examples from the contents of an example file.
    pub fn parse(text: &str) -> Self {
        let mut examples = Self::default();

        for line in text.lines() {
            let atoms = split_atoms(line);
            if let [positive, negative] = atoms.as_slice() {
                if !positive.trim().is_empty() {
                    examples.positive.push((*positive).to_string());
                }
                if !negative.trim().is_empty() {
                    examples.negative.push((*negative).to_string());
                }
            } else if let Some(first) = atoms.first()
                && !first.trim().is_empty()
            {
                examples.positive.push((*first).to_string());
            }
        }

        examples
    }

    /// Load examples from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExampleLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ExampleLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Score of a candidate that matches every positive and no negative.
    pub fn perfect_score(&self) -> i64 {
        self.positive.len() as i64
    }

    /// Total number of examples.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Split a line on runs of whitespace.
///
/// A leading run yields an empty first atom and a trailing run an empty
/// last atom.
fn split_atoms(line: &str) -> Vec<&str> {
    let mut atoms = Vec::new();
    let mut field_start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }
        atoms.push(&line[field_start..i]);

        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if !d.is_whitespace() {
                break;
            }
            end = j + d.len_utf8();
            chars.next();
        }
        field_start = end;
    }
    atoms.push(&line[field_start..]);

    atoms
}

/// Example loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ExampleLoadError {
    #[error("Failed to read examples from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_atoms() {
        assert_eq!(split_atoms("a b"), vec!["a", "b"]);
        assert_eq!(split_atoms("a \t b"), vec!["a", "b"]);
        assert_eq!(split_atoms("  a"), vec!["", "a"]);
        assert_eq!(split_atoms("a "), vec!["a", ""]);
        assert_eq!(split_atoms(""), vec![""]);
        assert_eq!(split_atoms("a b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_two_columns() {
        let examples = ExampleSet::parse("123\tabc\n456\tx-y\n");
        assert_eq!(examples.positive, vec!["123", "456"]);
        assert_eq!(examples.negative, vec!["abc", "x-y"]);
    }

    #[test]
    fn test_parse_single_column_and_blank_lines() {
        let examples = ExampleSet::parse("123\n\n   \n456\r\n");
        assert_eq!(examples.positive, vec!["123", "456"]);
        assert!(examples.negative.is_empty());
    }

    #[test]
    fn test_parse_blank_input_is_empty() {
        let examples = ExampleSet::parse("\n  \n\t\n");
        assert!(examples.is_empty());
        assert_eq!(examples.len(), 0);
        assert!(!ExampleSet::parse("\tabc\n").is_empty());
    }

    #[test]
    fn test_parse_indented_line_is_negative_only() {
        let examples = ExampleSet::parse("123\n\tabc\n");
        assert_eq!(examples.positive, vec!["123"]);
        assert_eq!(examples.negative, vec!["abc"]);
    }

    #[test]
    fn test_parse_extra_columns_keep_first() {
        let examples = ExampleSet::parse("1 2 3\n");
        assert_eq!(examples.positive, vec!["1"]);
        assert!(examples.negative.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "12-34\tabcd").unwrap();
        writeln!(file, "56-78").unwrap();

        let examples = ExampleSet::from_file(file.path()).unwrap();
        assert_eq!(examples.positive, vec!["12-34", "56-78"]);
        assert_eq!(examples.negative, vec!["abcd"]);
        assert_eq!(examples.perfect_score(), 2);
        assert_eq!(examples.len(), 3);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExampleSet::from_file(dir.path().join("missing.tsv"));
        assert!(matches!(result, Err(ExampleLoadError::Io { .. })));
    }
}
