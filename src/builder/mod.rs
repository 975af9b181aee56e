//! Builder API for ergonomic session construction.
//!
//! The builder validates up front that every region can fill a question,
//! so a session built here never hits a pool failure mid-round.

use crate::catalog::RegionCatalog;
use crate::question::QuestionFactory;
use crate::session::QuizSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

pub mod error;

pub use error::BuildError;

/// Fluent builder for a [`QuizSession`].
///
/// # Example
///
/// ```rust
/// use rohe::catalog::RegionCatalog;
/// use rohe::QuizSession;
///
/// let mut session = QuizSession::builder()
///     .catalog(RegionCatalog::aotearoa())
///     .distractor_count(2)
///     .seed(42)
///     .build()?;
///
/// assert_eq!(session.total_regions(), 14);
/// session.open_question("Taranaki")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct SessionBuilder {
    catalog: Option<RegionCatalog>,
    distractor_count: Option<usize>,
    seed: Option<u64>,
}

impl SessionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region catalog to play over. Required.
    pub fn catalog(mut self, catalog: RegionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the number of wrong options per question. Defaults to 2.
    pub fn distractor_count(mut self, count: usize) -> Self {
        self.distractor_count = Some(count);
        self
    }

    /// Fix the random seed, for reproducible question sequences.
    /// Defaults to an entropy seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the session.
    ///
    /// Checks that a non-empty catalog was supplied, that at least one
    /// distractor is requested, and that every region's distractor pool
    /// (the rest of the catalog, deduplicated, minus the region's own
    /// names) is large enough.
    pub fn build(self) -> Result<QuizSession, BuildError> {
        let catalog = self.catalog.ok_or(BuildError::MissingCatalog)?;
        if catalog.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let count = self
            .distractor_count
            .unwrap_or_else(|| QuestionFactory::default().distractor_count());
        if count == 0 {
            return Err(BuildError::ZeroDistractors);
        }

        for region in catalog.all_regions() {
            let candidates: HashSet<&str> = catalog
                .all_names_flattened()
                .into_iter()
                .filter(|name| !region.names.iter().any(|own| own == name))
                .collect();
            if candidates.len() < count {
                return Err(BuildError::PoolTooSmall {
                    region: region.id.clone(),
                    needed: count,
                    available: candidates.len(),
                });
            }
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(QuizSession::with_parts(
            catalog,
            QuestionFactory::new(count),
            rng,
        ))
    }
}
