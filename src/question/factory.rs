//! Question construction.

use super::{sample_distractors, Question, QuestionError};
use crate::catalog::{CatalogError, RegionCatalog};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of wrong-answer options per question unless configured otherwise.
pub const DEFAULT_DISTRACTOR_COUNT: usize = 2;

/// Builds presentable questions from a catalog.
///
/// A factory holds only configuration; the catalog and random generator
/// are supplied per call so a session can own both.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rohe::catalog::RegionCatalog;
/// use rohe::question::QuestionFactory;
///
/// let catalog = RegionCatalog::aotearoa();
/// let factory = QuestionFactory::default();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let question = factory.build(&catalog, "Gisborne", &mut rng)?;
/// assert_eq!(question.options.len(), 3);
/// assert!(question.options.contains(&question.correct_answer));
/// # Ok::<(), rohe::question::QuestionError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionFactory {
    distractor_count: usize,
}

impl Default for QuestionFactory {
    fn default() -> Self {
        QuestionFactory {
            distractor_count: DEFAULT_DISTRACTOR_COUNT,
        }
    }
}

impl QuestionFactory {
    /// Create a factory producing `distractor_count` wrong options per
    /// question.
    pub fn new(distractor_count: usize) -> Self {
        QuestionFactory { distractor_count }
    }

    /// Wrong options per question.
    pub fn distractor_count(&self) -> usize {
        self.distractor_count
    }

    /// Build a question for `region_id`.
    ///
    /// Picks one correct name uniformly from the region's acceptable
    /// names, samples distractors from the rest of the catalog, and
    /// shuffles the combined options into display order.
    ///
    /// Fails with [`CatalogError::UnknownRegion`](crate::catalog::CatalogError::UnknownRegion)
    /// for a missing region and [`QuestionError::InsufficientPool`] when
    /// the catalog cannot supply enough distinct distractors.
    pub fn build(
        &self,
        catalog: &RegionCatalog,
        region_id: &str,
        rng: &mut impl Rng,
    ) -> Result<Question, QuestionError> {
        let acceptable = catalog.acceptable_names(region_id)?;
        // Unreachable for a validated catalog: name lists are non-empty.
        let correct_answer = acceptable
            .choose(rng)
            .cloned()
            .ok_or_else(|| CatalogError::NoNames(region_id.to_string()))?;

        let pool = catalog.all_names_flattened();
        let distractors = sample_distractors(acceptable, &pool, self.distractor_count, rng)?;

        let mut options = distractors;
        options.push(correct_answer.clone());
        options.shuffle(rng);

        Ok(Question {
            region_id: region_id.to_string(),
            prompt: format!("What is the Maori name for {region_id}?"),
            correct_answer,
            options,
        })
    }
}
