//! Pairwise skill matching by bidirectional substring containment.
//!
//! Inputs are expected to be normalized (see `normalizer`). A target skill is
//! satisfied by the first candidate that equals it, is contained in it, or
//! contains it. Each target counts at most once.

use serde::Serialize;

/// A satisfied target skill and the candidate skill that satisfied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPair {
    pub target: String,
    pub candidate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub matched_count: usize,
    pub pairs: Vec<SkillPair>,
    pub unmatched: Vec<String>,
}

impl MatchOutcome {
    pub fn target_count(&self) -> usize {
        self.matched_count + self.unmatched.len()
    }

    /// `round(matched / targets × 100)`; 0 when there are no targets.
    pub fn percentage(&self) -> u32 {
        percentage(self.matched_count, self.target_count())
    }
}

/// Loose match: equal, or either side contains the other.
pub fn skills_match(target: &str, candidate: &str) -> bool {
    target == candidate || target.contains(candidate) || candidate.contains(target)
}

/// Returns the first candidate satisfying `target`.
pub fn find_match<'a, S: AsRef<str>>(target: &str, candidates: &'a [S]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|c| c.as_ref())
        .find(|candidate| skills_match(target, candidate))
}

pub fn match_skills<S: AsRef<str>, T: AsRef<str>>(candidates: &[S], targets: &[T]) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for target in targets.iter().map(|c| c.as_ref()) {
        match find_match(target, candidates) {
            Some(candidate) => {
                outcome.matched_count += 1;
                outcome.pairs.push(SkillPair {
                    target: target.to_string(),
                    candidate: candidate.to_string(),
                });
            }
            None => outcome.unmatched.push(target.to_string()),
        }
    }

    outcome
}

/// Rounded share of `part` in `whole` as 0–100. Guards `whole == 0`.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_match() {
        assert!(skills_match("python", "python"));
    }

    #[test]
    fn test_containment_both_directions() {
        // target contains candidate
        assert!(skills_match("js-framework", "js"));
        // candidate contains target
        assert!(skills_match("java", "javascript"));
        assert!(!skills_match("js-framework", "javascript"));
        assert!(!skills_match("js", "javascript"));
    }

    #[test]
    fn test_no_match_without_containment() {
        assert!(!skills_match("python", "java"));
        assert!(!skills_match("java", "python"));
    }

    #[test]
    fn test_first_candidate_wins() {
        let candidates = ["javascript", "java"];
        assert_eq!(find_match("java", &candidates), Some("javascript"));
    }

    #[test]
    fn test_target_counted_once() {
        let outcome = match_skills(&["react", "react native"], &["react"]);
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.pairs.len(), 1);
        assert_eq!(outcome.pairs[0].candidate, "react");
    }

    #[test]
    fn test_empty_targets_is_zero_percent() {
        let outcome = match_skills::<&str, &str>(&["python"], &[]);
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.percentage(), 0);
    }

    #[test]
    fn test_empty_candidates_leaves_all_unmatched() {
        let outcome = match_skills::<&str, &str>(&[], &["python", "sql"]);
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.unmatched, vec!["python", "sql"]);
        assert_eq!(outcome.percentage(), 0);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
    }

    proptest! {
        #[test]
        fn prop_percentage_bounded(
            candidates in prop::collection::vec("[a-z]{1,8}", 0..6),
            targets in prop::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let outcome = match_skills(&candidates, &targets);
            prop_assert!(outcome.percentage() <= 100);
            prop_assert_eq!(outcome.target_count(), targets.len());
        }

        #[test]
        fn prop_match_is_symmetric(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
            prop_assert_eq!(skills_match(&a, &b), skills_match(&b, &a));
        }
    }
}
