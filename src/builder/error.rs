//! Build errors for the session builder.

use thiserror::Error;

/// Errors that can occur when building a quiz session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Catalog not specified. Call .catalog(catalog) before .build()")]
    MissingCatalog,

    #[error("Catalog has no regions")]
    EmptyCatalog,

    #[error("Distractor count must be at least 1")]
    ZeroDistractors,

    #[error(
        "Region {region} cannot fill a question: needs {needed} distractors, \
         only {available} candidates in the rest of the catalog"
    )]
    PoolTooSmall {
        region: String,
        needed: usize,
        available: usize,
    },
}
