//! Truncation selection over scored candidates.

use super::candidate::Candidate;

/// Sort descending by rounded score.
///
/// The sort is stable, so equal scores keep population order.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Keep the `count` highest-scoring candidates.
pub fn select_survivors(mut candidates: Vec<Candidate>, count: usize) -> Vec<Candidate> {
    rank(&mut candidates);
    candidates.truncate(count);
    candidates
}

/// Highest-scoring candidate, earliest first on ties.
pub fn best(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: u64, score: i64) -> Candidate {
        Candidate {
            score,
            ..Candidate::new(id, Vec::new(), 0)
        }
    }

    #[test]
    fn test_select_survivors_truncates() {
        let candidates: Vec<Candidate> = [3, -1, 7, 0, 5, 2, 6, 1]
            .into_iter()
            .enumerate()
            .map(|(id, score)| scored(id as u64, score))
            .collect();

        let survivors = select_survivors(candidates, 5);
        let scores: Vec<i64> = survivors.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![7, 6, 5, 3, 2]);
    }

    #[test]
    fn test_select_survivors_small_population() {
        let survivors = select_survivors(vec![scored(0, 1), scored(1, 2)], 5);
        assert_eq!(survivors.len(), 2);
        assert_eq!(survivors[0].id, 1);
    }

    #[test]
    fn test_ties_keep_population_order() {
        let candidates = vec![scored(0, 1), scored(1, 2), scored(2, 1), scored(3, 2)];
        let survivors = select_survivors(candidates, 3);
        let ids: Vec<u64> = survivors.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 0]);
    }

    #[test]
    fn test_best() {
        assert!(best(&[]).is_none());
        let candidates = vec![scored(0, 1), scored(1, 4), scored(2, 4)];
        assert_eq!(best(&candidates).map(|c| c.id), Some(1));
    }
}
