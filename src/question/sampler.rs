//! Distractor sampling.
//!
//! Draws wrong-answer options from the catalog's flattened name pool.
//! Sampling is shuffle-and-take rather than reject-and-retry, so it
//! terminates even when the pool holds exactly as many candidates as
//! requested.

use super::QuestionError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Sample `count` distinct distractors from `pool`.
///
/// Every returned string is present in `pool` and none is a member of
/// `correct` (the target region's acceptable names), so a distractor can
/// never be an alternate right answer. Candidates are deduplicated,
/// filtered, uniformly shuffled, and the first `count` taken.
///
/// Fails with [`QuestionError::InsufficientPool`] when fewer than `count`
/// distinct candidates remain after filtering.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rohe::question::sample_distractors;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let correct = vec!["Ōtākou".to_string()];
/// let pool = ["Ōtākou", "Waitaha", "Murihiku"];
///
/// let distractors = sample_distractors(&correct, &pool, 2, &mut rng)?;
/// assert_eq!(distractors.len(), 2);
/// assert!(!distractors.contains(&"Ōtākou".to_string()));
/// # Ok::<(), rohe::question::QuestionError>(())
/// ```
pub fn sample_distractors(
    correct: &[String],
    pool: &[&str],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<String>, QuestionError> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<&str> = Vec::with_capacity(pool.len());

    for &name in pool {
        if correct.iter().any(|c| c == name) {
            continue;
        }
        if seen.insert(name) {
            candidates.push(name);
        }
    }

    if candidates.len() < count {
        return Err(QuestionError::InsufficientPool {
            needed: count,
            available: candidates.len(),
        });
    }

    candidates.shuffle(rng);
    Ok(candidates
        .into_iter()
        .take(count)
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn sample_excludes_correct_names() {
        let correct = vec!["Te Tai Tokerau".to_string()];
        let pool = ["Te Tai Tokerau", "Waitaha", "Murihiku", "Ōtākou"];

        let distractors = sample_distractors(&correct, &pool, 3, &mut rng()).unwrap();

        assert_eq!(distractors.len(), 3);
        assert!(!distractors.contains(&"Te Tai Tokerau".to_string()));
    }

    #[test]
    fn sample_yields_distinct_entries() {
        let correct = vec!["Waitaha".to_string()];
        // "Murihiku" appears twice; dedup keeps a single candidate.
        let pool = ["Waitaha", "Murihiku", "Murihiku", "Ōtākou"];

        let distractors = sample_distractors(&correct, &pool, 2, &mut rng()).unwrap();

        let unique: HashSet<&String> = distractors.iter().collect();
        assert_eq!(unique.len(), distractors.len());
    }

    #[test]
    fn exact_pool_size_terminates() {
        // Exactly two valid candidates for a request of two. A rejection
        // loop would spin here on unlucky draws; shuffle-and-take cannot.
        let correct = vec!["Te Whanganui-a-Tara".to_string()];
        let pool = ["Te Whanganui-a-Tara", "Waitaha", "Murihiku"];

        let mut distractors = sample_distractors(&correct, &pool, 2, &mut rng()).unwrap();
        distractors.sort();

        assert_eq!(distractors, vec!["Murihiku".to_string(), "Waitaha".to_string()]);
    }

    #[test]
    fn undersized_pool_fails_fast() {
        let correct = vec!["Waitaha".to_string()];
        let pool = ["Waitaha", "Murihiku"];

        let err = sample_distractors(&correct, &pool, 2, &mut rng()).unwrap_err();

        assert_eq!(
            err,
            QuestionError::InsufficientPool {
                needed: 2,
                available: 1,
            }
        );
    }

    #[test]
    fn zero_count_is_trivially_satisfied() {
        let correct = vec!["Waitaha".to_string()];
        let pool = ["Waitaha"];

        let distractors = sample_distractors(&correct, &pool, 0, &mut rng()).unwrap();
        assert!(distractors.is_empty());
    }
}
