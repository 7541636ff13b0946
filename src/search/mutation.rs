//! Seeding and mutation operators over fragment sequences.
//!
//! Every operator returns freshly allocated fragment sequences; no child
//! shares storage with its parent.

use crate::schema::SearchConfig;

use super::candidate::{Candidate, Fragment};

/// Initial fragment sequences: the power set of the seed vocabulary.
///
/// Subsets are enumerated recursively over the reversed vocabulary, so for
/// `[a, b]` the result is `[a, b]`, `[b]`, `[a]`, `[]`. The result has
/// `2^k` entries for `k` seed fragments.
pub fn seed_sequences(seed: &[Fragment]) -> Vec<Vec<Fragment>> {
    let reversed: Vec<Fragment> = seed.iter().rev().cloned().collect();
    subsets(&reversed, 0)
}

fn subsets(items: &[Fragment], offset: usize) -> Vec<Vec<Fragment>> {
    let mut result = Vec::new();
    for (i, first) in items.iter().enumerate().skip(offset) {
        for mut subset in subsets(items, i + 1) {
            subset.push(first.clone());
            result.push(subset);
        }
    }
    result.push(Vec::new());
    result
}

/// Derives children from a surviving parent.
#[derive(Debug, Clone)]
pub struct Mutator {
    extension_fragments: Vec<Fragment>,
    max_specialization_bound: u32,
}

impl Mutator {
    pub fn new(extension_fragments: Vec<Fragment>, max_specialization_bound: u32) -> Self {
        Self {
            extension_fragments,
            max_specialization_bound,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            config.extension_fragments.clone(),
            config.max_specialization_bound,
        )
    }

    /// One child per extension fragment, appended to the parent's sequence.
    pub fn extend(&self, parent: &[Fragment]) -> Vec<Vec<Fragment>> {
        self.extension_fragments
            .iter()
            .map(|fragment| {
                let mut child = Vec::with_capacity(parent.len() + 1);
                child.extend_from_slice(parent);
                child.push(fragment.clone());
                child
            })
            .collect()
    }

    /// Rewrite one `+` quantifier at a time into `{n}` for `n` in
    /// `0..=max_specialization_bound`.
    ///
    /// A parent with `m` quantified fragments yields `m * (bound + 1)` children.
    pub fn specialize(&self, parent: &[Fragment]) -> Vec<Vec<Fragment>> {
        let mut children = Vec::new();
        for (position, fragment) in parent.iter().enumerate() {
            if fragment.unbounded_marker().is_none() {
                continue;
            }
            for count in 0..=self.max_specialization_bound {
                if let Some(specialized) = fragment.specialize(count) {
                    let mut child = parent.to_vec();
                    child[position] = specialized;
                    children.push(child);
                }
            }
        }
        children
    }

    /// Extension children followed by specialization children.
    pub fn offspring(&self, parent: &Candidate) -> Vec<Vec<Fragment>> {
        let mut children = self.extend(&parent.fragments);
        children.extend(self.specialize(&parent.fragments));
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fragments(sources: &[&str]) -> Vec<Fragment> {
        sources.iter().copied().map(Fragment::from).collect()
    }

    #[test]
    fn test_seed_sequences_order() {
        let seeds = seed_sequences(&fragments(&[r"\d+", r"\w+"]));
        assert_eq!(
            seeds,
            vec![
                fragments(&[r"\d+", r"\w+"]),
                fragments(&[r"\w+"]),
                fragments(&[r"\d+"]),
                Vec::new(),
            ]
        );
    }

    #[test]
    fn test_seed_sequences_power_set_size() {
        assert_eq!(seed_sequences(&[]).len(), 1);
        assert_eq!(seed_sequences(&fragments(&["a", "b", "c"])).len(), 8);
        assert_eq!(seed_sequences(&fragments(&["a", "b", "c", "d", "e"])).len(), 32);
    }

    #[test]
    fn test_seed_sequences_keep_declared_order() {
        for subset in seed_sequences(&fragments(&["a", "b", "c"])) {
            let joined: String = subset.iter().map(Fragment::as_str).collect();
            let mut sorted = joined.clone().into_bytes();
            sorted.sort_unstable();
            assert_eq!(joined.into_bytes(), sorted);
        }
    }

    #[test]
    fn test_extend_appends_each_fragment() {
        let mutator = Mutator::new(fragments(&["[-]", r"\d+"]), 3);
        let children = mutator.extend(&fragments(&[r"\w+"]));
        assert_eq!(
            children,
            vec![fragments(&[r"\w+", "[-]"]), fragments(&[r"\w+", r"\d+"])]
        );
    }

    #[test]
    fn test_extend_with_empty_vocabulary() {
        let mutator = Mutator::new(Vec::new(), 3);
        assert!(mutator.extend(&fragments(&["a"])).is_empty());
    }

    #[test]
    fn test_specialize_bound() {
        let mutator = Mutator::new(Vec::new(), 3);
        let children = mutator.specialize(&fragments(&[r"\d+", "[-]"]));
        assert_eq!(
            children,
            vec![
                fragments(&[r"\d{0}", "[-]"]),
                fragments(&[r"\d{1}", "[-]"]),
                fragments(&[r"\d{2}", "[-]"]),
                fragments(&[r"\d{3}", "[-]"]),
            ]
        );
    }

    #[test]
    fn test_specialize_single_site() {
        let mutator = Mutator::new(Vec::new(), 1);
        let parent = fragments(&[r"\d+", r"\w+"]);
        let children = mutator.specialize(&parent);

        assert_eq!(children.len(), 4);
        for child in &children {
            let changed = child.iter().zip(&parent).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_specialize_without_quantifier() {
        let mutator = Mutator::new(Vec::new(), 3);
        assert!(mutator.specialize(&fragments(&["[-]", r"\d{2}"])).is_empty());
    }

    #[test]
    fn test_offspring_order() {
        let mutator = Mutator::new(fragments(&["x"]), 0);
        let parent = Candidate::new(0, fragments(&["a+"]), 0);
        assert_eq!(
            mutator.offspring(&parent),
            vec![fragments(&["a+", "x"]), fragments(&["a{0}"])]
        );
    }

    proptest! {
        #[test]
        fn prop_mutating_children_leaves_parent_intact(
            sources in prop::collection::vec(
                prop::sample::select(vec![r"\d+", r"\w+", "[-]", "a"]),
                0..5,
            ),
        ) {
            let mutator = Mutator::new(fragments(&["[-]", r"\d+"]), 2);
            let parent = Candidate::new(0, fragments(&sources), 0);
            let before = parent.fragments.clone();

            for mut child in mutator.offspring(&parent) {
                child.push(Fragment::from("z"));
                if let Some(first) = child.first_mut() {
                    *first = Fragment::from("q");
                }
            }

            prop_assert_eq!(&parent.fragments, &before);
        }
    }
}
